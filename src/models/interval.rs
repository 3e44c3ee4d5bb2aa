//! Interval table
//!
//! Maps interval labels (scale-degree notation plus quality aliases) to
//! semitone offsets 0-11. The forward map is many-to-one; the reverse
//! map only uses the twelve seed labels so that it stays single-valued.

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// Seed labels, one per offset, used for reverse lookups
pub const CANONICAL_LABELS: [&str; 12] = [
    "1", "b2", "2", "b3", "3", "4", "b5", "5", "#5", "6", "b7", "7",
];

/// Additional labels that resolve onto the same twelve offsets
const ALIASES: [(&str, u8); 40] = [
    // Unison
    ("P1", 0),
    ("R", 0),
    ("Root", 0),
    // Seconds and ninths
    ("m2", 1),
    ("min2", 1),
    ("b9", 1),
    ("M2", 2),
    ("maj2", 2),
    ("9", 2),
    ("#2", 3),
    ("m3", 3),
    ("min3", 3),
    ("#9", 3),
    ("a9", 3),
    ("M3", 4),
    ("maj3", 4),
    // Fourths and elevenths
    ("P4", 5),
    ("11", 5),
    ("#4", 6),
    ("A4", 6),
    ("aug4", 6),
    ("#11", 6),
    ("d5", 6),
    ("dim5", 6),
    // Fifths, sixths and thirteenths
    ("P5", 7),
    ("A5", 8),
    ("aug5", 8),
    ("b6", 8),
    ("m6", 8),
    ("min6", 8),
    ("b13", 8),
    ("M6", 9),
    ("maj6", 9),
    ("13", 9),
    ("bb7", 9),
    // Sevenths
    ("m7", 10),
    ("min7", 10),
    ("dom7", 10),
    ("M7", 11),
    ("maj7", 11),
];

lazy_static! {
    static ref SEMITONES: HashMap<&'static str, u8> = {
        let mut table: HashMap<&'static str, u8> = CANONICAL_LABELS
            .iter()
            .enumerate()
            .map(|(offset, &label)| (label, offset as u8))
            .collect();
        table.extend(ALIASES.iter().copied());
        table
    };
}

/// Semitone offset for an interval label, or `None` when the label is unknown
///
/// Unknown labels are a data-quality issue in pattern tables, not a fatal
/// error, so this returns an option rather than a `Result`.
pub fn semitones_of(label: &str) -> Option<u8> {
    SEMITONES.get(label.trim()).copied()
}

/// Canonical label for an offset; the offset is reduced modulo 12
pub fn canonical_label_of(semitones: u8) -> &'static str {
    CANONICAL_LABELS[(semitones % 12) as usize]
}

/// Every label the table accepts, canonical labels first
pub fn all_labels() -> impl Iterator<Item = &'static str> {
    CANONICAL_LABELS
        .iter()
        .copied()
        .chain(ALIASES.iter().map(|&(label, _)| label))
}

/// An interval label together with its semitone offset
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Interval {
    /// Label as written in the pattern table (e.g. "b3", "maj7")
    pub label: String,

    /// Offset above the root, 0-11
    pub semitones: u8,
}

impl Interval {
    /// Look up a label, keeping the caller's spelling
    pub fn parse(label: &str) -> Option<Self> {
        semitones_of(label).map(|semitones| Self {
            label: label.trim().to_string(),
            semitones,
        })
    }

    /// Interval with the canonical label for an offset
    pub fn from_semitones(semitones: u8) -> Self {
        Self {
            label: canonical_label_of(semitones).to_string(),
            semitones: semitones % 12,
        }
    }

    pub fn canonical_label(&self) -> &'static str {
        canonical_label_of(self.semitones)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}
