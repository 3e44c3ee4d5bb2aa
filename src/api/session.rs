//! Session-backed WASM API
//!
//! `FretboardApp` is the JS-owned handle around one [`FretboardSession`].
//! The page keeps the instance for the life of the board and re-renders
//! from `view()` and `highlights()` after every call.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, parse_drop, parse_kind, serialize, theory_error};
use crate::config::FretboardConfig;
use crate::fretboard::CellId;
use crate::models::{PatternLibrary, TuningTable};
use crate::session::FretboardSession;
use crate::{wasm_info, wasm_log, wasm_warn};

#[wasm_bindgen]
pub struct FretboardApp {
    session: FretboardSession,
}

#[wasm_bindgen]
impl FretboardApp {
    /// Create a session from a pattern library and optional settings
    ///
    /// `config_js` may be `undefined`; missing fields take their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(library_js: JsValue, config_js: JsValue) -> Result<FretboardApp, JsValue> {
        let library: serde_json::Value = deserialize(library_js, "Pattern library deserialization error")?;
        let config: FretboardConfig = if config_js.is_undefined() || config_js.is_null() {
            FretboardConfig::default()
        } else {
            deserialize(config_js, "Config deserialization error")?
        };
        wasm_info!("FretboardApp created: tuning={}, frets={}", config.tuning, config.num_frets);

        let session = FretboardSession::new(config, PatternLibrary::from_value(&library))
            .map_err(theory_error)?;
        Ok(FretboardApp { session })
    }

    /// Replace the tuning table with a custom list of `{ name, notes }`
    #[wasm_bindgen(js_name = loadTunings)]
    pub fn load_tunings(&mut self, tunings_js: JsValue) -> Result<(), JsValue> {
        let tunings: TuningTable = deserialize(tunings_js, "Tuning table deserialization error")?;
        let config = FretboardConfig {
            tuning: tunings
                .default_name()
                .unwrap_or(self.session.tuning_name())
                .to_string(),
            ..self.session.config().clone()
        };
        let library = self.session.library().clone();
        self.session = FretboardSession::with_tunings(config, library, tunings).map_err(theory_error)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = tuningNames)]
    pub fn tuning_names(&self) -> js_sys::Array {
        self.session
            .tunings()
            .names()
            .into_iter()
            .map(JsValue::from_str)
            .collect()
    }

    #[wasm_bindgen(js_name = setTuning)]
    pub fn set_tuning(&mut self, name: &str) -> Result<(), JsValue> {
        self.session.set_tuning(name).map_err(theory_error)
    }

    /// The grid for the current tuning
    pub fn board(&self) -> Result<JsValue, JsValue> {
        serialize(self.session.board(), "Fretboard serialization error")
    }

    /// Toggle a cell and return the identified chord name, if any
    #[wasm_bindgen(js_name = toggleCell)]
    pub fn toggle_cell(&mut self, string: usize, fret: u8) -> Result<Option<String>, JsValue> {
        let chord = self
            .session
            .toggle_cell(CellId::new(string, fret))
            .map_err(theory_error)?
            .map(|chord| chord.name());
        wasm_log!("toggleCell({}, {}) -> {:?}", string, fret, chord);
        Ok(chord)
    }

    #[wasm_bindgen(js_name = clearSelection)]
    pub fn clear_selection(&mut self) {
        self.session.clear_selection();
    }

    /// Display a library pattern; returns `false` when it cannot be resolved
    #[wasm_bindgen(js_name = showPattern)]
    pub fn show_pattern(
        &mut self,
        kind: &str,
        root: &str,
        name: &str,
        inversion: usize,
        drop: Option<u8>,
    ) -> Result<bool, JsValue> {
        let kind = parse_kind(kind)?;
        let drop = parse_drop(drop)?;
        match self.session.show_pattern(kind, root, name, inversion, drop) {
            Ok(_) => Ok(true),
            Err(e) => {
                wasm_warn!("{}", e);
                Ok(false)
            }
        }
    }

    /// Display the chord identified from the selection
    #[wasm_bindgen(js_name = showIdentifiedChord)]
    pub fn show_identified_chord(&mut self) -> bool {
        self.session.show_identified_chord().is_some()
    }

    #[wasm_bindgen(js_name = setInversion)]
    pub fn set_inversion(&mut self, inversion: usize) -> bool {
        self.session.set_inversion(inversion).is_some()
    }

    #[wasm_bindgen(js_name = clearPattern)]
    pub fn clear_pattern(&mut self) {
        self.session.clear_pattern();
    }

    /// Highlighted cells of the displayed pattern
    pub fn highlights(&self) -> Result<JsValue, JsValue> {
        serialize(&self.session.highlights().to_vec(), "Highlight serialization error")
    }

    /// The displayed pattern, or `null`
    pub fn pattern(&self) -> Result<JsValue, JsValue> {
        match self.session.pattern() {
            Some(pattern) => serialize(pattern, "Pattern serialization error"),
            None => Ok(JsValue::NULL),
        }
    }

    /// Interval label of a cell against the displayed pattern's root
    #[wasm_bindgen(js_name = intervalOf)]
    pub fn interval_of(&self, string: usize, fret: u8) -> Option<String> {
        self.session
            .interval_of(CellId::new(string, fret))
            .map(str::to_string)
    }

    /// Frequency in Hz of the tone a cell plays
    #[wasm_bindgen(js_name = frequencyOf)]
    pub fn frequency_of(&self, string: usize, fret: u8) -> Result<f64, JsValue> {
        self.session
            .frequency_of(CellId::new(string, fret))
            .map_err(theory_error)
    }

    pub fn view(&self) -> Result<JsValue, JsValue> {
        serialize(&self.session.view(), "Session serialization error")
    }

    pub fn reset(&mut self) -> Result<(), JsValue> {
        self.session.reset().map_err(theory_error)
    }
}
