//! Default values and session configuration
//!
//! Provides the fretboard constants and the configuration object the
//! page passes in when it creates a session.

use serde::{Deserialize, Serialize};

/// Highest fret drawn on the board (fret 0 is the open string)
pub const MAX_FRETS: u8 = 15;

/// Tuning selected when a session starts or is reset
pub const DEFAULT_TUNING_NAME: &str = "Standard (EADGBE)";

/// Octave of the lowest open string when placing absolute pitches
pub const LOWEST_STRING_OCTAVE: i32 = 2;

/// Concert pitch reference in Hz
pub const DEFAULT_A4_HZ: f64 = 440.0;

/// Semitone number of A4 (C-1 = 0, so C4 = 60)
pub const A4_SEMITONE: i32 = 69;

/// Smallest number of distinct pitch classes that can form a chord
pub const MIN_CHORD_NOTES: usize = 3;

/// Session configuration, deserialized from the page's settings object
///
/// Every field is optional on the JS side; missing fields take the
/// defaults above.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct FretboardConfig {
    /// Number of frets after the nut
    pub num_frets: u8,

    /// Name of the tuning in the tuning table
    pub tuning: String,

    /// Reference frequency for tone playback
    pub a4_hz: f64,
}

impl Default for FretboardConfig {
    fn default() -> Self {
        Self {
            num_frets: MAX_FRETS,
            tuning: DEFAULT_TUNING_NAME.to_string(),
            a4_hz: DEFAULT_A4_HZ,
        }
    }
}

impl FretboardConfig {
    /// Parse a configuration from JSON, filling missing fields with defaults
    pub fn from_json(text: &str) -> Result<Self, crate::error::LibraryError> {
        Ok(serde_json::from_str(text)?)
    }
}
