//! Pattern model
//!
//! A pattern is a root plus an ordered list of intervals: a scale, a chord,
//! an arpeggio or an explicit voicing. Order only matters for inversion and
//! drop-voicing bookkeeping; membership tests go through the pitch-class set.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::models::{Interval, PitchClass};

/// Kind of pattern shown on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    Scale,
    Chord,
    Arpeggio,
    Voicing,
}

impl PatternKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternKind::Scale => "scale",
            PatternKind::Chord => "chord",
            PatternKind::Arpeggio => "arpeggio",
            PatternKind::Voicing => "voicing",
        }
    }

    /// Inversions and drop voicings only apply to chord-like patterns
    pub fn supports_inversion(&self) -> bool {
        matches!(self, PatternKind::Chord | PatternKind::Arpeggio)
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PatternKind {
    type Err = String;

    /// Accepts both the singular kind and the plural library category
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "scale" | "scales" => Ok(PatternKind::Scale),
            "chord" | "chords" => Ok(PatternKind::Chord),
            "arpeggio" | "arpeggios" => Ok(PatternKind::Arpeggio),
            "voicing" | "voicings" => Ok(PatternKind::Voicing),
            _ => Err(format!(
                "Invalid pattern type: '{}'. Expected one of: scale, chord, arpeggio, voicing",
                s
            )),
        }
    }
}

/// Drop voicing applied to a four-note chord or arpeggio
///
/// Serialized as the bare number the voicing selector uses (2 or 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum DropVoicing {
    /// Second voice from the top moves an octave down
    Drop2 = 2,
    /// Third voice from the top moves an octave down
    Drop3 = 3,
}

impl DropVoicing {
    /// Index (in a four-voice, low-to-high list) of the voice that drops
    pub fn dropped_index(&self) -> usize {
        match self {
            DropVoicing::Drop2 => 2,
            DropVoicing::Drop3 => 1,
        }
    }
}

/// One resolved member of a pattern
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PatternTone {
    pub interval: Interval,

    /// Absolute pitch class: root + interval, mod 12
    pub pitch_class: PitchClass,

    /// Octave displacement relative to close position (-1 for a dropped voice)
    pub octave_shift: i8,
}

/// A resolved pattern ready for highlighting
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pattern {
    pub kind: PatternKind,
    pub name: String,
    pub root: PitchClass,

    /// Tones in voicing order; never empty
    pub tones: Vec<PatternTone>,

    /// Inversion that produced this ordering (0 = root position)
    pub inversion: usize,

    pub drop: Option<DropVoicing>,
}

impl Pattern {
    /// Interval labels in voicing order
    pub fn labels(&self) -> Vec<&str> {
        self.tones.iter().map(|tone| tone.interval.label.as_str()).collect()
    }

    /// Distinct pitch classes, in order of first appearance
    pub fn pitch_classes(&self) -> Vec<PitchClass> {
        let mut seen = Vec::with_capacity(self.tones.len());
        for tone in &self.tones {
            if !seen.contains(&tone.pitch_class) {
                seen.push(tone.pitch_class);
            }
        }
        seen
    }

    pub fn contains(&self, pc: PitchClass) -> bool {
        self.tones.iter().any(|tone| tone.pitch_class == pc)
    }

    /// Label shown on cells of this pitch class
    ///
    /// When two labels land on the same pitch class (e.g. "b3" and "#9")
    /// the first one in voicing order is used.
    pub fn label_for(&self, pc: PitchClass) -> Option<&str> {
        self.tones
            .iter()
            .find(|tone| tone.pitch_class == pc)
            .map(|tone| tone.interval.label.as_str())
    }

    /// Number of selectable inversions (root position included)
    pub fn inversion_count(&self) -> usize {
        if self.kind.supports_inversion() {
            self.tones.len()
        } else {
            1
        }
    }

    /// Title shown above the board, e.g. "C Major"
    pub fn title(&self) -> String {
        format!("{} {}", self.root, self.name)
    }
}
