//! Fretboard session state
//!
//! The page owns one session per board. It holds everything that changes
//! with user interaction (tuning, selected cells, the displayed pattern)
//! and calls into the pure core on every action. Nothing here is global:
//! two sessions never share state.

use serde::Serialize;

use crate::config::FretboardConfig;
use crate::error::TheoryError;
use crate::fretboard::{CellId, FretCell, Fretboard};
use crate::models::{DropVoicing, Pattern, PatternKind, PatternLibrary, PitchClass, TuningTable};
use crate::theory::{self, ChordMatch, Highlights};

/// Snapshot of the session for the page to render
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub tuning: String,
    pub num_frets: u8,
    pub selected: Vec<CellId>,
    pub selected_notes: Vec<String>,
    pub chord: Option<String>,
    pub pattern: Option<String>,
    pub inversion: usize,
    pub inversion_count: usize,
}

/// Where the displayed pattern came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PatternSource {
    Library,
    Selection,
}

/// Mutable state behind one interactive fretboard
#[derive(Clone, Debug)]
pub struct FretboardSession {
    config: FretboardConfig,
    tunings: TuningTable,
    library: PatternLibrary,
    tuning_name: String,
    board: Fretboard,

    /// Selected cells in the order they were clicked
    selection: Vec<CellId>,
    chord: Option<ChordMatch>,
    pattern: Option<Pattern>,
    source: PatternSource,
}

impl FretboardSession {
    /// Create a session with the built-in tuning table
    pub fn new(config: FretboardConfig, library: PatternLibrary) -> Result<Self, TheoryError> {
        Self::with_tunings(config, library, TuningTable::builtin())
    }

    pub fn with_tunings(
        config: FretboardConfig,
        library: PatternLibrary,
        tunings: TuningTable,
    ) -> Result<Self, TheoryError> {
        let board = Fretboard::build(tunings.get(&config.tuning)?, config.num_frets);
        Ok(Self {
            tuning_name: config.tuning.clone(),
            config,
            tunings,
            library,
            board,
            selection: Vec::new(),
            chord: None,
            pattern: None,
            source: PatternSource::Library,
        })
    }

    pub fn config(&self) -> &FretboardConfig {
        &self.config
    }

    pub fn board(&self) -> &Fretboard {
        &self.board
    }

    pub fn library(&self) -> &PatternLibrary {
        &self.library
    }

    pub fn tunings(&self) -> &TuningTable {
        &self.tunings
    }

    pub fn tuning_name(&self) -> &str {
        &self.tuning_name
    }

    /// Switch tuning and rebuild the board
    ///
    /// Selected cells keep their coordinates and the chord is identified
    /// again from the notes they now sound. Cells on a string the new
    /// tuning cannot resolve drop out of the selection. The displayed
    /// pattern is kept and re-projected by [`FretboardSession::highlights`].
    /// An unknown name leaves the session untouched.
    pub fn set_tuning(&mut self, name: &str) -> Result<(), TheoryError> {
        let tuning = self.tunings.get(name)?;
        self.board = Fretboard::build(tuning, self.config.num_frets);
        self.tuning_name = name.to_string();

        let board = &self.board;
        self.selection.retain(|&id| board.cell(id).is_some());
        self.chord = theory::identify(&self.selected_pitch_classes());

        log::info!("Tuning changed to: {}", name);
        Ok(())
    }

    /// Toggle a cell in or out of the selection and re-identify the chord
    pub fn toggle_cell(&mut self, id: CellId) -> Result<Option<&ChordMatch>, TheoryError> {
        self.board.require_cell(id)?;
        match self.selection.iter().position(|&selected| selected == id) {
            Some(index) => {
                self.selection.remove(index);
            }
            None => self.selection.push(id),
        }
        self.chord = theory::identify(&self.selected_pitch_classes());
        Ok(self.chord.as_ref())
    }

    pub fn is_selected(&self, id: CellId) -> bool {
        self.selection.contains(&id)
    }

    pub fn selection(&self) -> &[CellId] {
        &self.selection
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.chord = None;
    }

    /// Pitch classes of the selected cells, in selection order
    pub fn selected_pitch_classes(&self) -> Vec<PitchClass> {
        self.selection
            .iter()
            .filter_map(|&id| self.board.cell(id))
            .map(|cell| cell.pitch_class)
            .collect()
    }

    pub fn identified_chord(&self) -> Option<&ChordMatch> {
        self.chord.as_ref()
    }

    /// Display a library pattern
    pub fn show_pattern(
        &mut self,
        kind: PatternKind,
        root: &str,
        name: &str,
        inversion: usize,
        drop: Option<DropVoicing>,
    ) -> Result<&Pattern, TheoryError> {
        let pattern = theory::resolve_pattern(&self.library, kind, root, name, inversion, drop)?;
        self.source = PatternSource::Library;
        Ok(&*self.pattern.insert(pattern))
    }

    /// Display the chord identified from the selection, in root position
    pub fn show_identified_chord(&mut self) -> Option<&Pattern> {
        let pattern = self.chord.as_ref()?.to_pattern();
        self.source = PatternSource::Selection;
        Some(&*self.pattern.insert(pattern))
    }

    /// Re-voice the displayed pattern into another inversion
    ///
    /// Library patterns are re-resolved from their labels; an identified
    /// chord is rotated from its own tones. Scales ignore the request.
    pub fn set_inversion(&mut self, inversion: usize) -> Option<&Pattern> {
        let current = self.pattern.as_ref()?;
        let labels: Vec<String> = match self.source {
            PatternSource::Library => self.library.intervals(current.kind, &current.name).to_vec(),
            PatternSource::Selection => {
                let mut tones = current.tones.clone();
                tones.sort_by_key(|t| t.interval.semitones);
                tones.into_iter().map(|t| t.interval.label).collect()
            }
        };
        let pattern = theory::resolve(
            current.kind,
            &current.name,
            current.root,
            &labels,
            inversion,
            current.drop,
        )?;
        Some(&*self.pattern.insert(pattern))
    }

    pub fn pattern(&self) -> Option<&Pattern> {
        self.pattern.as_ref()
    }

    pub fn clear_pattern(&mut self) {
        self.pattern = None;
    }

    /// Labels for the displayed pattern on the current board
    pub fn highlights(&self) -> Highlights {
        self.pattern
            .as_ref()
            .map(|pattern| theory::project(pattern, &self.board))
            .unwrap_or_default()
    }

    /// Interval of a cell relative to the displayed pattern's root
    pub fn interval_of(&self, id: CellId) -> Option<&'static str> {
        let root = self.pattern.as_ref()?.root;
        let cell = self.board.cell(id)?;
        Some(theory::interval_label(root, cell.pitch_class))
    }

    /// Tone to play when a cell is clicked
    pub fn frequency_of(&self, id: CellId) -> Result<f64, TheoryError> {
        let cell: &FretCell = self.board.require_cell(id)?;
        Ok(cell.frequency(self.config.a4_hz))
    }

    /// Back to the configured tuning with nothing selected or displayed
    pub fn reset(&mut self) -> Result<(), TheoryError> {
        self.clear_pattern();
        self.clear_selection();
        let tuning = self.config.tuning.clone();
        self.set_tuning(&tuning)
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            tuning: self.tuning_name.clone(),
            num_frets: self.board.num_frets,
            selected: self.selection.clone(),
            selected_notes: self
                .selected_pitch_classes()
                .iter()
                .map(|pc| pc.name().to_string())
                .collect(),
            chord: self.chord.as_ref().map(ChordMatch::name),
            pattern: self.pattern.as_ref().map(Pattern::title),
            inversion: self.pattern.as_ref().map_or(0, |p| p.inversion),
            inversion_count: self.pattern.as_ref().map_or(0, Pattern::inversion_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library() -> PatternLibrary {
        PatternLibrary::from_json(
            r#"{
                "scales": { "Major": ["1", "2", "3", "4", "5", "6", "7"] },
                "chords": { "Maj7": ["1", "3", "5", "7"] }
            }"#,
        )
        .unwrap()
    }

    fn session() -> FretboardSession {
        FretboardSession::new(FretboardConfig::default(), library()).unwrap()
    }

    #[test]
    fn test_selection_identifies_chord() {
        let mut session = session();
        // C on A string (3), E on D string (2), G on G string (0)
        session.toggle_cell(CellId::new(1, 3)).unwrap();
        session.toggle_cell(CellId::new(2, 2)).unwrap();
        let chord = session.toggle_cell(CellId::new(3, 0)).unwrap().cloned();
        assert_eq!(chord.unwrap().name(), "C Major");
        assert_eq!(session.view().selected_notes, vec!["C", "E", "G"]);

        // Deselecting the G leaves two notes: no chord
        assert!(session.toggle_cell(CellId::new(3, 0)).unwrap().is_none());
        assert_eq!(session.selection(), &[CellId::new(1, 3), CellId::new(2, 2)]);
    }

    #[test]
    fn test_toggle_outside_board() {
        let mut session = session();
        assert_eq!(
            session.toggle_cell(CellId::new(6, 0)).unwrap_err(),
            TheoryError::CellOutOfRange { string: 6, fret: 0 }
        );
        assert!(session.toggle_cell(CellId::new(0, 16)).is_err());
        assert!(session.selection().is_empty());
    }

    #[test]
    fn test_tuning_change_rebuilds_and_keeps_pattern() {
        let mut session = session();
        session.show_pattern(PatternKind::Scale, "C", "Major", 0, None).unwrap();
        session.toggle_cell(CellId::new(0, 0)).unwrap();
        assert_eq!(session.highlights().label_at(CellId::new(0, 0)), Some("3"));

        session.set_tuning("Drop D (DADGBE)").unwrap();
        assert_eq!(session.view().selected_notes, vec!["D"]);
        assert_eq!(session.board().cell(CellId::new(0, 0)).unwrap().note, "D");
        assert_eq!(session.highlights().label_at(CellId::new(0, 0)), Some("2"));

        assert!(session.set_tuning("Nope").is_err());
        assert_eq!(session.tuning_name(), "Drop D (DADGBE)");
    }

    #[test]
    fn test_tuning_change_reidentifies_selection() {
        let mut session = session();
        // Open D string, A, D, F# on the top four strings
        for (string, fret) in [(2, 0), (3, 2), (4, 3), (5, 2)] {
            session.toggle_cell(CellId::new(string, fret)).unwrap();
        }
        assert_eq!(session.view().chord.as_deref(), Some("D Major"));

        // Same frets in open D sound D, G#, C, E
        session.set_tuning("Open D (DADF#AD)").unwrap();
        assert_eq!(session.view().selected_notes, vec!["D", "G#", "C", "E"]);
        assert_eq!(session.view().chord.as_deref(), Some("E 7#5"));
    }

    #[test]
    fn test_inversion_of_library_chord() {
        let mut session = session();
        session.show_pattern(PatternKind::Chord, "A", "Maj7", 0, None).unwrap();
        assert_eq!(session.view().inversion_count, 4);

        let inverted = session.set_inversion(2).unwrap();
        assert_eq!(inverted.labels(), vec!["5", "7", "1", "3"]);
        assert_eq!(session.view().inversion, 2);
    }

    #[test]
    fn test_identified_chord_can_be_shown_and_inverted() {
        let mut session = session();
        // F# A C E across the top strings
        for (string, fret) in [(0, 2), (1, 0), (1, 3), (2, 2)] {
            session.toggle_cell(CellId::new(string, fret)).unwrap();
        }
        assert_eq!(session.view().chord.as_deref(), Some("F# m7b5"));

        let pattern = session.show_identified_chord().unwrap();
        assert_eq!(pattern.labels(), vec!["1", "b3", "b5", "b7"]);
        let inverted = session.set_inversion(1).unwrap();
        assert_eq!(inverted.labels(), vec!["b3", "b5", "b7", "1"]);
        assert_eq!(session.view().pattern.as_deref(), Some("F# m7b5"));
    }

    #[test]
    fn test_identified_chord_ignores_library_chord_of_same_name() {
        let library = PatternLibrary::from_json(r#"{ "chords": { "Major": ["1", "3", "5", "7"] } }"#).unwrap();
        let mut session = FretboardSession::new(FretboardConfig::default(), library).unwrap();
        for (string, fret) in [(1, 3), (2, 2), (3, 0)] {
            session.toggle_cell(CellId::new(string, fret)).unwrap();
        }
        session.show_identified_chord().unwrap();

        let inverted = session.set_inversion(1).unwrap();
        assert_eq!(inverted.labels(), vec!["3", "5", "1"]);

        // A library pattern of the same name still re-resolves from the library
        session.show_pattern(PatternKind::Chord, "C", "Major", 0, None).unwrap();
        let inverted = session.set_inversion(1).unwrap();
        assert_eq!(inverted.labels(), vec!["3", "5", "7", "1"]);
    }

    #[test]
    fn test_interval_and_frequency_of_cell() {
        let mut session = session();
        assert_eq!(session.interval_of(CellId::new(0, 0)), None);
        session.show_pattern(PatternKind::Scale, "C", "Major", 0, None).unwrap();
        assert_eq!(session.interval_of(CellId::new(0, 3)), Some("5"));

        let a = session.frequency_of(CellId::new(1, 0)).unwrap();
        assert!((a - 110.0).abs() < 1e-9);
        assert!(session.frequency_of(CellId::new(9, 0)).is_err());
    }

    #[test]
    fn test_reset() {
        let mut session = session();
        session.set_tuning("Open G (DGDGBD)").unwrap();
        session.show_pattern(PatternKind::Scale, "G", "Major", 0, None).unwrap();
        session.toggle_cell(CellId::new(0, 5)).unwrap();

        session.reset().unwrap();
        let view = session.view();
        assert_eq!(view.tuning, "Standard (EADGBE)");
        assert!(view.selected.is_empty());
        assert!(view.pattern.is_none());
        assert!(session.highlights().is_empty());
    }

    #[test]
    fn test_unknown_configured_tuning() {
        let config = FretboardConfig {
            tuning: "Lute".to_string(),
            ..FretboardConfig::default()
        };
        assert!(FretboardSession::new(config, library()).is_err());
    }
}
