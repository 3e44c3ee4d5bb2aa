//! Models module for the fretboard core
//!
//! Value types shared by the geometry and theory layers: pitch classes,
//! intervals, tunings, patterns and the pattern library.

pub mod interval;
pub mod library;
pub mod pattern;
pub mod pitch_class;
pub mod tuning;

// Re-export commonly used types
pub use interval::{canonical_label_of, semitones_of, Interval};
pub use library::PatternLibrary;
pub use pattern::{DropVoicing, Pattern, PatternKind, PatternTone};
pub use pitch_class::PitchClass;
pub use tuning::{NamedTuning, Tuning, TuningTable};
