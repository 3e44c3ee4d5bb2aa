//! Fretboard geometry
//!
//! Computes the note sounding at every (string, fret) coordinate for a
//! tuning and fret count.

pub mod board;
pub mod cell;

pub use board::{build_fretboard, FretString, Fretboard};
pub use cell::{CellId, FretCell};
