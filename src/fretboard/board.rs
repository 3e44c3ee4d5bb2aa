//! Fretboard grid construction
//!
//! The grid is a pure function of the tuning and the fret count. It is
//! rebuilt in full whenever the tuning changes; there is no incremental
//! update.

use serde::{Deserialize, Serialize};

use crate::config::LOWEST_STRING_OCTAVE;
use crate::error::TheoryError;
use crate::fretboard::{CellId, FretCell};
use crate::models::{PitchClass, Tuning, TuningTable};

/// One string of the board with its cells from the nut upwards
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FretString {
    pub index: usize,
    pub open: PitchClass,
    pub cells: Vec<FretCell>,
}

/// The full grid of cells for one tuning
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Fretboard {
    pub num_frets: u8,

    /// Playable strings, lowest first
    pub strings: Vec<FretString>,

    /// Indices of strings whose tuning note could not be resolved
    pub skipped_strings: Vec<usize>,
}

impl Fretboard {
    /// Build the grid for a tuning with frets `0..=num_frets`
    ///
    /// A string whose open note cannot be resolved is left out of the grid
    /// and its index recorded in `skipped_strings`; the rest of the board is
    /// built normally.
    pub fn build(tuning: &Tuning, num_frets: u8) -> Self {
        let mut strings = Vec::with_capacity(tuning.len());
        let mut skipped_strings = Vec::new();
        let mut previous: Option<i32> = None;

        for index in 0..tuning.len() {
            let open = match tuning.open_pitch(index) {
                Ok(pc) => pc,
                Err(e) => {
                    log::warn!("{}; skipping string {}", e, index);
                    skipped_strings.push(index);
                    continue;
                }
            };

            let open_semitone = place_open_string(open, previous);
            previous = Some(open_semitone);

            let cells = (0..=num_frets)
                .map(|fret| FretCell::new(CellId::new(index, fret), open_semitone + fret as i32))
                .collect();

            strings.push(FretString { index, open, cells });
        }

        log::debug!(
            "Built fretboard: {} strings, {} frets, {} skipped",
            strings.len(),
            num_frets,
            skipped_strings.len()
        );

        Self {
            num_frets,
            strings,
            skipped_strings,
        }
    }

    pub fn cell(&self, id: CellId) -> Option<&FretCell> {
        self.strings
            .iter()
            .find(|s| s.index == id.string)
            .and_then(|s| s.cells.get(id.fret as usize))
    }

    /// Like [`Fretboard::cell`], but reports a missing cell as an error
    pub fn require_cell(&self, id: CellId) -> Result<&FretCell, TheoryError> {
        self.cell(id).ok_or(TheoryError::CellOutOfRange {
            string: id.string,
            fret: id.fret,
        })
    }

    /// Every cell, string by string
    pub fn cells(&self) -> impl Iterator<Item = &FretCell> {
        self.strings.iter().flat_map(|s| s.cells.iter())
    }

    pub fn string_count(&self) -> usize {
        self.strings.len()
    }
}

/// Build the grid for a named tuning from a tuning table
pub fn build_fretboard(
    tunings: &TuningTable,
    tuning_name: &str,
    num_frets: u8,
) -> Result<Fretboard, TheoryError> {
    let tuning = tunings.get(tuning_name)?;
    Ok(Fretboard::build(tuning, num_frets))
}

/// Absolute pitch of an open string
///
/// The lowest string sits in `LOWEST_STRING_OCTAVE`; every following string
/// takes the lowest pitch of its class strictly above the previous string.
fn place_open_string(open: PitchClass, previous: Option<i32>) -> i32 {
    match previous {
        None => (LOWEST_STRING_OCTAVE + 1) * 12 + open.value() as i32,
        Some(below) => {
            let step = (open.value() as i32 - below).rem_euclid(12);
            below + if step == 0 { 12 } else { step }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_semitones(board: &Fretboard) -> Vec<i32> {
        board.strings.iter().map(|s| s.cells[0].semitone).collect()
    }

    #[test]
    fn test_standard_tuning_dimensions() {
        let board = Fretboard::build(&Tuning::standard(), 15);
        assert_eq!(board.string_count(), 6);
        assert!(board.strings.iter().all(|s| s.cells.len() == 16));
        assert_eq!(board.cells().count(), 96);
    }

    #[test]
    fn test_octave_equivalence_at_twelfth_fret() {
        let board = Fretboard::build(&Tuning::standard(), 15);
        let open = board.cell(CellId::new(0, 0)).unwrap();
        let twelfth = board.cell(CellId::new(0, 12)).unwrap();
        assert_eq!(open.pitch_class, twelfth.pitch_class);
        assert_eq!(twelfth.semitone - open.semitone, 12);
    }

    #[test]
    fn test_fretted_pitch_classes() {
        let board = Fretboard::build(&Tuning::standard(), 15);
        let name = |string, fret| board.cell(CellId::new(string, fret)).unwrap().note.clone();
        assert_eq!(name(0, 1), "F");
        assert_eq!(name(1, 3), "C");
        assert_eq!(name(4, 1), "C");
        assert_eq!(name(5, 15), "G");
    }

    #[test]
    fn test_open_strings_stack_upwards() {
        let board = Fretboard::build(&Tuning::standard(), 0);
        assert_eq!(open_semitones(&board), vec![40, 45, 50, 55, 59, 64]);

        let open_g = Tuning::new(&["D", "G", "D", "G", "B", "D"]);
        let board = Fretboard::build(&open_g, 0);
        assert_eq!(open_semitones(&board), vec![38, 43, 50, 55, 59, 62]);
    }

    #[test]
    fn test_invalid_string_is_skipped() {
        let tuning = Tuning::new(&["E", "A", "X", "G", "B", "E"]);
        let board = Fretboard::build(&tuning, 5);
        assert_eq!(board.string_count(), 5);
        assert_eq!(board.skipped_strings, vec![2]);
        assert!(board.cell(CellId::new(2, 0)).is_none());
        assert_eq!(board.cell(CellId::new(3, 0)).unwrap().note, "G");
        assert_eq!(
            board.require_cell(CellId::new(2, 1)),
            Err(TheoryError::CellOutOfRange { string: 2, fret: 1 })
        );
    }

    #[test]
    fn test_named_tuning_lookup() {
        let tunings = TuningTable::builtin();
        let board = build_fretboard(&tunings, "Drop D (DADGBE)", 15).unwrap();
        assert_eq!(board.cell(CellId::new(0, 0)).unwrap().note, "D");
        assert!(build_fretboard(&tunings, "Unknown", 15).is_err());
    }
}
