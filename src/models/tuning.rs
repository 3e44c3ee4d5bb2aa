//! Tunings and the named tuning table
//!
//! A tuning is the ordered list of open-string spellings, index 0 being
//! the lowest-pitched string. Spellings are kept as written so that an
//! unresolvable entry can be reported against its string when the
//! fretboard is built.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_TUNING_NAME;
use crate::error::{LibraryError, TheoryError};
use crate::models::PitchClass;

/// Open-string spellings, lowest string first
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(transparent)]
pub struct Tuning {
    pub strings: Vec<String>,
}

impl Tuning {
    pub fn new<S: AsRef<str>>(strings: &[S]) -> Self {
        Self {
            strings: strings.iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }

    /// Standard six-string guitar tuning, E A D G B E
    pub fn standard() -> Self {
        Self::new(&["E", "A", "D", "G", "B", "E"])
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Resolve the open pitch class of one string
    pub fn open_pitch(&self, string: usize) -> Result<PitchClass, TheoryError> {
        let spelling = self.strings.get(string).ok_or(TheoryError::CellOutOfRange {
            string,
            fret: 0,
        })?;
        PitchClass::from_name(spelling).map_err(|_| TheoryError::InvalidTuning {
            string,
            spelling: spelling.clone(),
        })
    }
}

/// A tuning with its display name
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NamedTuning {
    pub name: String,
    pub notes: Tuning,
}

/// Ordered table of selectable tunings
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(transparent)]
pub struct TuningTable {
    entries: Vec<NamedTuning>,
}

lazy_static! {
    static ref BUILTIN: TuningTable = {
        let entries = [
            ("Standard (EADGBE)", ["E", "A", "D", "G", "B", "E"]),
            ("Drop D (DADGBE)", ["D", "A", "D", "G", "B", "E"]),
            ("Open G (DGDGBD)", ["D", "G", "D", "G", "B", "D"]),
            ("Open D (DADF#AD)", ["D", "A", "D", "F#", "A", "D"]),
            ("Standard C (CFA#D#GC)", ["C", "F", "A#", "D#", "G", "C"]),
        ];
        TuningTable {
            entries: entries
                .iter()
                .map(|(name, notes)| NamedTuning {
                    name: name.to_string(),
                    notes: Tuning::new(notes),
                })
                .collect(),
        }
    };
}

impl TuningTable {
    /// The five tunings offered by the tuning selector
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Parse a list of `{ "name": ..., "notes": [...] }` objects
    pub fn from_json(text: &str) -> Result<Self, LibraryError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parse the same structure from YAML
    pub fn from_yaml(text: &str) -> Result<Self, LibraryError> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn get(&self, name: &str) -> Result<&Tuning, TheoryError> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.notes)
            .ok_or_else(|| TheoryError::UnknownTuning(name.to_string()))
    }

    /// Tuning names in table order
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.name.as_str()).collect()
    }

    /// The default tuning, falling back to the first entry of a custom table
    pub fn default_name(&self) -> Option<&str> {
        if self.get(DEFAULT_TUNING_NAME).is_ok() {
            Some(DEFAULT_TUNING_NAME)
        } else {
            self.entries.first().map(|entry| entry.name.as_str())
        }
    }
}

impl Default for TuningTable {
    fn default() -> Self {
        Self::builtin()
    }
}
