//! Highlight projection
//!
//! Intersects a resolved pattern with the fretboard grid: every cell whose
//! pitch class belongs to the pattern gets that pitch class's interval
//! label, and cells on the root are flagged. Cells outside the pattern are
//! simply absent from the result (dimmed by the page).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::fretboard::{CellId, Fretboard};
use crate::models::{canonical_label_of, Pattern, PitchClass};

/// Label for one highlighted cell
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CellHighlight {
    pub cell: CellId,
    pub pitch_class: PitchClass,
    pub note: String,

    /// Interval label from the pattern (e.g. "b3")
    pub label: String,

    pub is_root: bool,
}

/// Highlighted cells keyed by coordinate
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Highlights {
    cells: BTreeMap<CellId, CellHighlight>,
}

impl Highlights {
    pub fn get(&self, id: CellId) -> Option<&CellHighlight> {
        self.cells.get(&id)
    }

    pub fn label_at(&self, id: CellId) -> Option<&str> {
        self.get(id).map(|h| h.label.as_str())
    }

    pub fn is_highlighted(&self, id: CellId) -> bool {
        self.cells.contains_key(&id)
    }

    /// Highlighted cells ordered by string, then fret
    pub fn iter(&self) -> impl Iterator<Item = &CellHighlight> {
        self.cells.values()
    }

    pub fn root_cells(&self) -> impl Iterator<Item = &CellHighlight> {
        self.iter().filter(|h| h.is_root)
    }

    pub fn to_vec(&self) -> Vec<CellHighlight> {
        self.cells.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Label every cell of the board that belongs to the pattern
pub fn project(pattern: &Pattern, board: &Fretboard) -> Highlights {
    let labels: BTreeMap<PitchClass, &str> = pattern
        .pitch_classes()
        .into_iter()
        .filter_map(|pc| pattern.label_for(pc).map(|label| (pc, label)))
        .collect();

    let cells = board
        .cells()
        .filter_map(|cell| {
            labels.get(&cell.pitch_class).map(|&label| {
                (
                    cell.id,
                    CellHighlight {
                        cell: cell.id,
                        pitch_class: cell.pitch_class,
                        note: cell.note.clone(),
                        label: label.to_string(),
                        is_root: cell.pitch_class == pattern.root,
                    },
                )
            })
        })
        .collect();

    Highlights { cells }
}

/// Canonical interval label of `note` above `root`, for the click-to-inspect display
pub fn interval_label(root: PitchClass, note: PitchClass) -> &'static str {
    canonical_label_of(root.interval_to(note))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PatternKind, Tuning};
    use crate::theory::resolver::resolve;

    fn pc(name: &str) -> PitchClass {
        PitchClass::from_name(name).unwrap()
    }

    #[test]
    fn test_c_major_triad_on_standard_tuning() {
        let board = Fretboard::build(&Tuning::standard(), 15);
        let pattern = resolve(PatternKind::Chord, "Major", pc("C"), &["1", "3", "5"], 0, None).unwrap();
        let highlights = project(&pattern, &board);

        // Low E string: E(0) G(3) C(8) E(12) G(15)
        let frets: Vec<u8> = highlights
            .iter()
            .filter(|h| h.cell.string == 0)
            .map(|h| h.cell.fret)
            .collect();
        assert_eq!(frets, vec![0, 3, 8, 12, 15]);

        assert_eq!(highlights.label_at(CellId::new(0, 0)), Some("3"));
        assert_eq!(highlights.label_at(CellId::new(0, 3)), Some("5"));
        assert_eq!(highlights.label_at(CellId::new(0, 8)), Some("1"));
        assert!(!highlights.is_highlighted(CellId::new(0, 1)));
    }

    #[test]
    fn test_root_flags() {
        let board = Fretboard::build(&Tuning::standard(), 15);
        let pattern = resolve(PatternKind::Scale, "Pent", pc("A"), &["1", "b3", "4", "5", "b7"], 0, None).unwrap();
        let highlights = project(&pattern, &board);
        assert!(highlights.root_cells().all(|h| h.note == "A" && h.label == "1"));
        // A on every string within 15 frets: 5, 0/12, 7, 2/14, 10, 5
        assert_eq!(highlights.root_cells().count(), 8);
    }

    #[test]
    fn test_inversion_does_not_change_projection_set() {
        let board = Fretboard::build(&Tuning::standard(), 15);
        let labels = ["1", "3", "5", "b7"];
        let root = resolve(PatternKind::Chord, "7", pc("G"), &labels, 0, None).unwrap();
        let inverted = resolve(PatternKind::Chord, "7", pc("G"), &labels, 2, None).unwrap();
        assert_eq!(project(&root, &board), project(&inverted, &board));
    }

    #[test]
    fn test_interval_label() {
        assert_eq!(interval_label(pc("C"), pc("G")), "5");
        assert_eq!(interval_label(pc("E"), pc("D")), "b7");
        assert_eq!(interval_label(pc("B"), pc("B")), "1");
    }
}
