//! Fretboard WASM API
//!
//! The JavaScript-facing surface of the crate.
//!
//! # Module Structure
//!
//! - `helpers`: console logging macros, serialization and argument parsing
//! - `core`: stateless functions over the pure core (resolve, identify, project)
//! - `session`: the `FretboardApp` class wrapping one interactive session

pub mod helpers;
pub mod core;
pub mod session;

pub use self::core::*;
pub use session::FretboardApp;
