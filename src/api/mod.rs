//! Chord Transposer WASM API
//!
//! JavaScript-facing functions for the chart renderer.
//!
//! - `helpers`: console logging macros, serde-wasm-bindgen helpers, error conversion
//! - `transpose`: transposition exports (`transposeNote`, `transposeChord`, ...)

pub mod helpers;
pub mod transpose;

pub use transpose::*;
