//! Stateless WASM API
//!
//! Thin wrappers over the pure core. Arguments arrive as plain JS values
//! and results go back as plain objects; a pattern that cannot be resolved
//! comes back as `null` rather than an exception, matching the core's
//! "no condition is fatal" policy. Only malformed arguments throw.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, parse_drop, parse_kind, serialize, theory_error};
use crate::fretboard::{self, Fretboard};
use crate::models::{self, Pattern, PatternLibrary, PitchClass, Tuning, TuningTable};
use crate::theory;
use crate::{wasm_info, wasm_log, wasm_warn};

fn library_from_js(library_js: JsValue) -> Result<PatternLibrary, JsValue> {
    let value: serde_json::Value = deserialize(library_js, "Pattern library deserialization error")?;
    Ok(PatternLibrary::from_value(&value))
}

fn names_from_js(notes_js: JsValue, context: &str) -> Result<Vec<String>, JsValue> {
    deserialize(notes_js, context)
}

fn to_array<'a>(items: impl IntoIterator<Item = &'a str>) -> js_sys::Array {
    items.into_iter().map(JsValue::from_str).collect()
}

// ============================================================================
// Pitch classes and intervals
// ============================================================================

/// Integer value (0-11) of a note spelling, or `undefined` when unknown
#[wasm_bindgen(js_name = noteValue)]
pub fn note_value(spelling: &str) -> Option<u8> {
    PitchClass::from_name(spelling).ok().map(PitchClass::value)
}

/// Canonical sharp spelling of any integer, taken mod 12
#[wasm_bindgen(js_name = noteName)]
pub fn note_name(value: i32) -> String {
    PitchClass::new(value).name().to_string()
}

/// Semitone count of an interval label or alias, or `undefined` when unknown
#[wasm_bindgen(js_name = semitonesOf)]
pub fn semitones_of(label: &str) -> Option<u8> {
    models::semitones_of(label)
}

#[wasm_bindgen(js_name = canonicalLabelOf)]
pub fn canonical_label_of(semitones: u8) -> String {
    models::canonical_label_of(semitones).to_string()
}

/// Interval of `note` above `root`, both given as spellings
#[wasm_bindgen(js_name = intervalBetween)]
pub fn interval_between(root: &str, note: &str) -> Result<String, JsValue> {
    let root = PitchClass::from_name(root).map_err(theory_error)?;
    let note = PitchClass::from_name(note).map_err(theory_error)?;
    Ok(theory::interval_label(root, note).to_string())
}

// ============================================================================
// Tunings and fretboard
// ============================================================================

/// Names of the built-in tunings, in selector order
#[wasm_bindgen(js_name = listTunings)]
pub fn list_tunings() -> js_sys::Array {
    to_array(TuningTable::builtin().names())
}

/// Build the grid for a built-in tuning
#[wasm_bindgen(js_name = buildFretboard)]
pub fn build_fretboard(tuning_name: &str, num_frets: u8) -> Result<JsValue, JsValue> {
    wasm_info!("buildFretboard called: tuning={}, frets={}", tuning_name, num_frets);
    let board = fretboard::build_fretboard(&TuningTable::builtin(), tuning_name, num_frets)
        .map_err(theory_error)?;
    serialize(&board, "Fretboard serialization error")
}

/// Build the grid for an explicit list of open-string spellings
#[wasm_bindgen(js_name = buildFretboardFromNotes)]
pub fn build_fretboard_from_notes(notes_js: JsValue, num_frets: u8) -> Result<JsValue, JsValue> {
    let notes = names_from_js(notes_js, "Tuning deserialization error")?;
    let board = Fretboard::build(&Tuning::new(&notes), num_frets);
    if !board.skipped_strings.is_empty() {
        wasm_warn!("Skipped unresolvable strings: {:?}", board.skipped_strings);
    }
    serialize(&board, "Fretboard serialization error")
}

// ============================================================================
// Patterns
// ============================================================================

/// Sorted pattern names of one category of a library
#[wasm_bindgen(js_name = patternNames)]
pub fn pattern_names(library_js: JsValue, kind: &str) -> Result<js_sys::Array, JsValue> {
    let kind = parse_kind(kind)?;
    let library = library_from_js(library_js)?;
    Ok(to_array(library.names(kind)))
}

/// Resolve a library pattern on a root
///
/// `drop` is 2 or 3 for drop voicings of four-note chords. Returns `null`
/// for an unknown root or pattern, or one with no usable intervals.
#[wasm_bindgen(js_name = resolvePattern)]
pub fn resolve_pattern(
    library_js: JsValue,
    kind: &str,
    root: &str,
    name: &str,
    inversion: usize,
    drop: Option<u8>,
) -> Result<JsValue, JsValue> {
    wasm_info!(
        "resolvePattern called: kind={}, root={}, name={}, inversion={}",
        kind,
        root,
        name,
        inversion
    );
    let kind = parse_kind(kind)?;
    let drop = parse_drop(drop)?;
    let library = library_from_js(library_js)?;

    match theory::resolve_pattern(&library, kind, root, name, inversion, drop) {
        Ok(pattern) => {
            wasm_log!("  Resolved {} tones", pattern.tones.len());
            serialize(&pattern, "Pattern serialization error")
        }
        Err(e) => {
            wasm_warn!("{}", e);
            Ok(JsValue::NULL)
        }
    }
}

/// Per-cell labels for a pattern on a grid, ordered by string then fret
#[wasm_bindgen(js_name = projectHighlights)]
pub fn project_highlights(pattern_js: JsValue, board_js: JsValue) -> Result<JsValue, JsValue> {
    let pattern: Pattern = deserialize(pattern_js, "Pattern deserialization error")?;
    let board: Fretboard = deserialize(board_js, "Fretboard deserialization error")?;
    let highlights = theory::project(&pattern, &board);
    serialize(&highlights.to_vec(), "Highlight serialization error")
}

// ============================================================================
// Chords and voice leading
// ============================================================================

/// Name the chord formed by note spellings in selection order
///
/// Returns `null` when no chord matches.
#[wasm_bindgen(js_name = identifyChord)]
pub fn identify_chord(notes_js: JsValue) -> Result<JsValue, JsValue> {
    let notes = names_from_js(notes_js, "Note list deserialization error")?;
    let chord = theory::identify_chord(&notes);
    wasm_log!("identifyChord({:?}) -> {:?}", notes, chord);
    Ok(chord.map_or(JsValue::NULL, |name| JsValue::from_str(&name)))
}

/// Compare two voicings given per string ("x" for a muted string)
#[wasm_bindgen(js_name = analyzeVoiceLeading)]
pub fn analyze_voice_leading(from_js: JsValue, to_js: JsValue) -> Result<JsValue, JsValue> {
    let from = names_from_js(from_js, "Voicing deserialization error")?;
    let to = names_from_js(to_js, "Voicing deserialization error")?;
    let analysis = theory::analyze_names(&from, &to);
    serialize(&analysis, "Voice-leading serialization error")
}
