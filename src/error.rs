//! Error types for the fretboard core
//!
//! None of these are fatal to the application. Callers that follow the
//! skip policy (pattern resolution, chord identification, fretboard
//! construction) log the error and continue with the remaining input.

use thiserror::Error;

use crate::models::PatternKind;

/// Errors raised by note, interval and tuning lookups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// Input string does not match any pitch-class spelling
    #[error("Unknown note spelling: '{0}'")]
    UnknownNoteSpelling(String),

    /// Interval label absent from the interval table
    #[error("Unknown interval label: '{0}'")]
    UnknownIntervalLabel(String),

    /// A tuning entry cannot be resolved to a pitch class
    #[error("Invalid tuning note '{spelling}' on string {string}")]
    InvalidTuning { string: usize, spelling: String },

    /// No tuning with this name in the tuning table
    #[error("Unknown tuning: '{0}'")]
    UnknownTuning(String),

    /// No pattern with this name in the library category
    #[error("Unknown {kind} pattern: '{name}'")]
    UnknownPattern { kind: PatternKind, name: String },

    /// Cell coordinate outside the current fretboard
    #[error("No cell at string {string}, fret {fret}")]
    CellOutOfRange { string: usize, fret: u8 },
}

/// Errors raised while parsing pattern libraries and tuning tables
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
