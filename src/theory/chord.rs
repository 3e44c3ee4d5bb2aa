//! Chord identification
//!
//! Names the chord formed by a set of selected notes. Every distinct
//! pitch class is tried as the root; the offsets of all notes relative to
//! that root, sorted ascending, must equal one of the known formulas
//! exactly (no subset or superset matching).
//!
//! Roots are tried in the order the notes were first selected, so when a
//! note set has more than one valid reading (C E G A is both C6 and Am7)
//! the reading rooted on the earliest selected note wins.

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::config::MIN_CHORD_NOTES;
use crate::models::{canonical_label_of, Interval, Pattern, PatternKind, PatternTone, PitchClass};

/// Known chord qualities and their offsets from the root
pub const CHORD_FORMULAS: [(&str, &[u8]); 18] = [
    ("Major", &[0, 4, 7]),
    ("Minor", &[0, 3, 7]),
    ("Diminished", &[0, 3, 6]),
    ("Augmented", &[0, 4, 8]),
    ("Sus4", &[0, 5, 7]),
    ("Sus2", &[0, 2, 7]),
    ("Maj7", &[0, 4, 7, 11]),
    ("7", &[0, 4, 7, 10]),
    ("m7", &[0, 3, 7, 10]),
    ("m(Maj7)", &[0, 3, 7, 11]),
    ("m7b5", &[0, 3, 6, 10]),
    ("dim7", &[0, 3, 6, 9]),
    ("6", &[0, 4, 7, 9]),
    ("m6", &[0, 3, 7, 9]),
    ("7sus4", &[0, 5, 7, 10]),
    ("Maj7#5", &[0, 4, 8, 11]),
    ("7#5", &[0, 4, 8, 10]),
    ("7b5", &[0, 4, 6, 10]),
];

lazy_static! {
    static ref FORMULA_INDEX: HashMap<&'static [u8], &'static str> = CHORD_FORMULAS
        .iter()
        .map(|&(name, offsets)| (offsets, name))
        .collect();
}

/// A successful identification
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChordMatch {
    pub root: PitchClass,
    pub chord_type: String,

    /// Sorted offsets of the selected notes above the root
    pub offsets: Vec<u8>,
}

impl ChordMatch {
    /// Display name, e.g. "F# m7b5"
    pub fn name(&self) -> String {
        self.to_string()
    }

    /// The identified chord as a root-position chord pattern
    ///
    /// Tones use the canonical label of each offset so the chord can be
    /// highlighted and stepped through its inversions like a library chord.
    pub fn to_pattern(&self) -> Pattern {
        let tones = self
            .offsets
            .iter()
            .map(|&offset| PatternTone {
                interval: Interval::from_semitones(offset),
                pitch_class: self.root.transpose(offset as i32),
                octave_shift: 0,
            })
            .collect();

        Pattern {
            kind: PatternKind::Chord,
            name: self.chord_type.clone(),
            root: self.root,
            tones,
            inversion: 0,
            drop: None,
        }
    }

    /// Interval labels of the chord members, root first
    pub fn labels(&self) -> Vec<&'static str> {
        self.offsets.iter().map(|&o| canonical_label_of(o)).collect()
    }
}

impl fmt::Display for ChordMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.root, self.chord_type)
    }
}

/// Identify a chord from pitch classes in selection order
///
/// Duplicates are ignored. Returns `None` with fewer than three distinct
/// pitch classes, or when no rooting matches a formula; neither case is
/// an error.
pub fn identify(selection: &[PitchClass]) -> Option<ChordMatch> {
    let mut unique: Vec<PitchClass> = Vec::with_capacity(selection.len());
    for &pc in selection {
        if !unique.contains(&pc) {
            unique.push(pc);
        }
    }

    if unique.len() < MIN_CHORD_NOTES {
        return None;
    }

    unique.iter().find_map(|&root| {
        let mut offsets: Vec<u8> = unique.iter().map(|&pc| root.interval_to(pc)).collect();
        offsets.sort_unstable();
        FORMULA_INDEX.get(offsets.as_slice()).map(|&chord_type| ChordMatch {
            root,
            chord_type: chord_type.to_string(),
            offsets,
        })
    })
}

/// Identify a chord from note spellings in selection order
///
/// Unresolvable spellings are logged and left out of the candidate set.
pub fn identify_names<S: AsRef<str>>(names: &[S]) -> Option<ChordMatch> {
    let selection: Vec<PitchClass> = names
        .iter()
        .filter_map(|name| match PitchClass::from_name(name.as_ref()) {
            Ok(pc) => Some(pc),
            Err(e) => {
                log::warn!("{}; excluding it from chord identification", e);
                None
            }
        })
        .collect();
    identify(&selection)
}

/// Chord name for a list of spellings, e.g. `["C", "E", "G"]` gives "C Major"
pub fn identify_chord<S: AsRef<str>>(names: &[S]) -> Option<String> {
    identify_names(names).map(|chord| chord.name())
}
