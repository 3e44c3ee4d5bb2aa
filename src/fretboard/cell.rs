//! Fret cells
//!
//! One (string, fret) coordinate on the board and the note sounding there.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::{A4_SEMITONE, DEFAULT_A4_HZ};
use crate::models::PitchClass;

/// Coordinate of a cell: string index (0 = lowest string) and fret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellId {
    pub string: usize,
    pub fret: u8,
}

impl CellId {
    pub fn new(string: usize, fret: u8) -> Self {
        Self { string, fret }
    }
}

/// Formats as "string-fret", the id the page puts on each note element
impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.string, self.fret)
    }
}

impl FromStr for CellId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (string, fret) = s
            .split_once('-')
            .ok_or_else(|| format!("Invalid cell id: '{}' (expected 'string-fret')", s))?;
        let string = string
            .trim()
            .parse()
            .map_err(|_| format!("Invalid string index in cell id: '{}'", s))?;
        let fret = fret
            .trim()
            .parse()
            .map_err(|_| format!("Invalid fret in cell id: '{}'", s))?;
        Ok(CellId { string, fret })
    }
}

/// A cell together with the note it sounds
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FretCell {
    pub id: CellId,

    pub pitch_class: PitchClass,

    /// Canonical note name of `pitch_class`
    pub note: String,

    /// Absolute pitch in semitones, C-1 = 0 (so C4 = 60)
    pub semitone: i32,

    /// Fret 0; rendered on the nut but otherwise identical
    pub is_open: bool,
}

impl FretCell {
    pub fn new(id: CellId, semitone: i32) -> Self {
        let pitch_class = PitchClass::new(semitone);
        Self {
            id,
            pitch_class,
            note: pitch_class.name().to_string(),
            semitone,
            is_open: id.fret == 0,
        }
    }

    /// Octave number in scientific pitch notation
    pub fn octave(&self) -> i32 {
        self.semitone.div_euclid(12) - 1
    }

    /// Note name with octave, e.g. "E2"
    pub fn scientific_name(&self) -> String {
        format!("{}{}", self.note, self.octave())
    }

    /// Equal-tempered frequency of the cell for a given A4 reference
    pub fn frequency(&self, a4_hz: f64) -> f64 {
        a4_hz * 2f64.powf((self.semitone - A4_SEMITONE) as f64 / 12.0)
    }

    /// Frequency at concert pitch
    pub fn concert_frequency(&self) -> f64 {
        self.frequency(DEFAULT_A4_HZ)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_id_text_form() {
        let id = CellId::new(3, 12);
        assert_eq!(id.to_string(), "3-12");
        assert_eq!("3-12".parse::<CellId>().unwrap(), id);
        assert!("3".parse::<CellId>().is_err());
        assert!("a-1".parse::<CellId>().is_err());
    }

    #[test]
    fn test_cell_ordering_is_string_then_fret() {
        assert!(CellId::new(0, 15) < CellId::new(1, 0));
        assert!(CellId::new(2, 3) < CellId::new(2, 4));
    }

    #[test]
    fn test_low_e_frequency() {
        let cell = FretCell::new(CellId::new(0, 0), 40);
        assert_eq!(cell.scientific_name(), "E2");
        assert!(cell.is_open);
        assert!((cell.concert_frequency() - 82.41).abs() < 0.01);
    }

    #[test]
    fn test_a4_reference() {
        let cell = FretCell::new(CellId::new(5, 5), 69);
        assert_eq!(cell.note, "A");
        assert_eq!(cell.octave(), 4);
        assert!((cell.frequency(432.0) - 432.0).abs() < 1e-9);
    }
}
