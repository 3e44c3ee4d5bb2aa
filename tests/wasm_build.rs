//! WASM build test
//!
//! Exercises the JS-facing API in a browser. Run with
//! `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use fretboard_wasm::api::{
    build_fretboard, build_fretboard_from_notes, canonical_label_of, identify_chord, interval_between,
    list_tunings, note_name, note_value, project_highlights, resolve_pattern, semitones_of, FretboardApp,
};
use serde::Serialize;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn library() -> JsValue {
    let value = serde_json::json!({
        "scales": { "Major": ["1", "2", "3", "4", "5", "6", "7"] },
        "chords": { "Maj7": ["1", "3", "5", "7"], "Minor": ["1", "b3", "5"] }
    });
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap()
}

fn notes(names: &[&str]) -> JsValue {
    serde_wasm_bindgen::to_value(names).unwrap()
}

#[wasm_bindgen_test]
fn test_identify_chord() {
    assert_eq!(identify_chord(notes(&["C", "E", "G"])).unwrap().as_string().as_deref(), Some("C Major"));
    assert!(identify_chord(notes(&["C", "D"])).unwrap().is_null());
    assert!(identify_chord(notes(&["C", "C#", "D", "D#"])).unwrap().is_null());
    assert!(identify_chord(JsValue::from_f64(3.0)).is_err());
}

#[wasm_bindgen_test]
fn test_lookups() {
    assert_eq!(note_value("Db"), Some(1));
    assert_eq!(note_value("H"), None);
    assert_eq!(note_name(-1), "B");
    assert_eq!(semitones_of("b7"), Some(10));
    assert_eq!(canonical_label_of(6), "b5");
    assert_eq!(interval_between("E", "D").unwrap(), "b7");
    assert_eq!(list_tunings().length(), 5);
}

#[wasm_bindgen_test]
fn test_resolve_and_project() {
    let pattern = resolve_pattern(library(), "chords", "A", "Maj7", 1, None).unwrap();
    assert!(!pattern.is_null());
    let board = build_fretboard("Standard (EADGBE)", 15).unwrap();
    let highlights = project_highlights(pattern, board).unwrap();
    assert!(js_sys::Array::is_array(&highlights));

    let missing = resolve_pattern(library(), "chords", "A", "Nope", 0, None).unwrap();
    assert!(missing.is_null());
    assert!(resolve_pattern(library(), "modes", "A", "Maj7", 0, None).is_err());
    assert!(resolve_pattern(library(), "chords", "A", "Maj7", 0, Some(4)).is_err());
}

#[wasm_bindgen_test]
fn test_build_from_notes() {
    let board = build_fretboard_from_notes(notes(&["D", "A", "D", "G", "A", "D"]), 12).unwrap();
    assert!(board.is_object());
    assert!(build_fretboard("Unknown", 12).is_err());
}

#[wasm_bindgen_test]
fn test_app_session() {
    let mut app = FretboardApp::new(library(), JsValue::UNDEFINED).unwrap();
    app.toggle_cell(1, 3).unwrap();
    app.toggle_cell(2, 2).unwrap();
    let chord = app.toggle_cell(3, 0).unwrap();
    assert_eq!(chord.as_deref(), Some("C Major"));

    assert!(app.show_identified_chord());
    assert_eq!(app.interval_of(3, 0).as_deref(), Some("5"));
    assert!(app.set_inversion(1));
    assert!(!app.show_pattern("scales", "C", "Missing", 0, None).unwrap());

    let a = app.frequency_of(1, 0).unwrap();
    assert!((a - 110.0).abs() < 1e-9);
    assert!(app.set_tuning("Nope").is_err());
    app.reset().unwrap();
    assert!(app.pattern().unwrap().is_null());
}

#[wasm_bindgen_test]
fn test_loading_tunings_keeps_configured_board() {
    let config = serde_json::json!({ "numFrets": 12, "a4Hz": 432.0 });
    let config = config
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap();
    let mut app = FretboardApp::new(library(), config).unwrap();

    let tunings = serde_json::json!([
        { "name": "DADGAD", "notes": ["D", "A", "D", "G", "A", "D"] }
    ]);
    let tunings = tunings
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap();
    app.load_tunings(tunings).unwrap();

    let view: serde_json::Value = serde_wasm_bindgen::from_value(app.view().unwrap()).unwrap();
    assert_eq!(view["tuning"], "DADGAD");
    assert_eq!(view["numFrets"], 12);
    assert!(app.frequency_of(0, 13).is_err());

    // Open A string of DADGAD is A2: 432 / 4
    let a = app.frequency_of(1, 0).unwrap();
    assert!((a - 108.0).abs() < 1e-9);

    app.reset().unwrap();
    let view: serde_json::Value = serde_wasm_bindgen::from_value(app.view().unwrap()).unwrap();
    assert_eq!(view["numFrets"], 12);
    assert_eq!(view["tuning"], "DADGAD");
}
