//! Pitch-class arithmetic
//!
//! A pitch class is a note identity modulo the octave, stored as 0-11
//! with C = 0. Every value has exactly one canonical, sharp-based name;
//! many input spellings (naturals, sharps, flats, doubled accidentals and
//! the edge wraps B#, Cb, E#, Fb) resolve onto the same value.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::error::TheoryError;

/// Canonical spelling for each pitch-class value
pub const CANONICAL_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

const NATURALS: [(&str, i32); 7] = [
    ("C", 0),
    ("D", 2),
    ("E", 4),
    ("F", 5),
    ("G", 7),
    ("A", 9),
    ("B", 11),
];

const ACCIDENTALS: [(&str, i32); 5] = [("", 0), ("#", 1), ("##", 2), ("b", -1), ("bb", -2)];

lazy_static! {
    /// Every accepted spelling, in normalized case, mapped to its value
    static ref SPELLINGS: HashMap<String, u8> = {
        let mut table = HashMap::new();
        for (letter, base) in NATURALS {
            for (accidental, offset) in ACCIDENTALS {
                let value = (base + offset).rem_euclid(12) as u8;
                table.insert(format!("{}{}", letter, accidental), value);
            }
        }
        table
    };
}

/// A note identity modulo the octave (0 = C, 11 = B)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: PitchClass = PitchClass(0);

    /// Build a pitch class from any integer, wrapping into 0..12
    pub fn new(semitones: i32) -> Self {
        PitchClass(semitones.rem_euclid(12) as u8)
    }

    /// Resolve a note spelling such as "C#", "db", "B#" or "E♭"
    ///
    /// The letter is case-insensitive and the accidentals `#`/`♯` and
    /// `b`/`♭` may appear up to twice. Anything else is rejected with
    /// `UnknownNoteSpelling`.
    pub fn from_name(name: &str) -> Result<Self, TheoryError> {
        let normalized = normalize_spelling(name);
        SPELLINGS
            .get(&normalized)
            .map(|&value| PitchClass(value))
            .ok_or_else(|| TheoryError::UnknownNoteSpelling(name.to_string()))
    }

    /// Numeric value in 0..12
    pub fn value(self) -> u8 {
        self.0
    }

    /// Canonical sharp-based spelling
    pub fn name(self) -> &'static str {
        CANONICAL_NAMES[self.0 as usize]
    }

    /// Move up (or down, for negative values) by a number of semitones
    pub fn transpose(self, semitones: i32) -> Self {
        PitchClass::new(self.0 as i32 + semitones)
    }

    /// Ascending distance from `self` to `other`, in 0..12
    pub fn interval_to(self, other: PitchClass) -> u8 {
        (other.0 as i32 - self.0 as i32).rem_euclid(12) as u8
    }

    /// All twelve pitch classes in ascending order from C
    pub fn all() -> impl Iterator<Item = PitchClass> {
        (0..12).map(PitchClass)
    }
}

/// Uppercase the letter, lowercase the accidentals and fold the Unicode
/// accidental glyphs onto their ASCII forms.
fn normalize_spelling(name: &str) -> String {
    let trimmed = name.trim();
    let mut chars = trimmed.chars();
    let Some(letter) = chars.next() else {
        return String::new();
    };

    let mut normalized: String = letter.to_uppercase().collect();
    for c in chars {
        match c {
            '♯' => normalized.push('#'),
            '♭' => normalized.push('b'),
            other => normalized.extend(other.to_lowercase()),
        }
    }
    normalized
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for PitchClass {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PitchClass::from_name(s)
    }
}

impl TryFrom<u8> for PitchClass {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value < 12 {
            Ok(PitchClass(value))
        } else {
            Err(format!("Invalid pitch class value: {} (must be 0-11)", value))
        }
    }
}

impl From<PitchClass> for u8 {
    fn from(pc: PitchClass) -> u8 {
        pc.0
    }
}
