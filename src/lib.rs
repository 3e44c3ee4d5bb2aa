//! Fretboard WASM Module
//!
//! Music-theory core of the interactive guitar fretboard: pitch-class
//! arithmetic, interval tables, tunings, the fret grid, pattern resolution
//! with inversions and drop voicings, chord identification from selected
//! notes and voice-leading analysis. The page's JavaScript calls in through
//! the `api` module; everything else is plain Rust and is tested natively.

pub mod api;
pub mod config;
pub mod error;
pub mod fretboard;
pub mod models;
pub mod session;
pub mod theory;

// Re-export commonly used types
pub use config::FretboardConfig;
pub use error::{LibraryError, TheoryError};
pub use fretboard::{CellId, FretCell, Fretboard};
pub use models::{DropVoicing, Interval, Pattern, PatternKind, PatternLibrary, PitchClass, Tuning, TuningTable};
pub use session::FretboardSession;
pub use theory::{ChordMatch, Highlights, VoiceLeadingAnalysis};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logger();
    log::info!("Fretboard WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logger() {
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        crate::wasm_warn!("Logger already initialized: {}", e);
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logger() {}
