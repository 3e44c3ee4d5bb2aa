//! Music-theory computations over the models
//!
//! - `resolver`: interval labels to patterns, inversions, drop voicings
//! - `chord`: chord identification from selected notes
//! - `highlight`: projection of a pattern onto the fretboard grid
//! - `voice_leading`: movement analysis between two voicings

pub mod chord;
pub mod highlight;
pub mod resolver;
pub mod voice_leading;

pub use chord::{identify, identify_chord, identify_names, ChordMatch, CHORD_FORMULAS};
pub use highlight::{interval_label, project, CellHighlight, Highlights};
pub use resolver::{drop_voicing, invert, resolve, resolve_pattern};
pub use voice_leading::{analyze, analyze_names, Direction, Recommendation, VoiceLeadingAnalysis, VoiceMovement};
