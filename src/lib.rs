//! Chord Transposer WASM Module
//!
//! Transposes chord symbols embedded in lead-sheet text (`[G]Amazing [D]grace`)
//! for the song chart renderer. The transposition core is pure and
//! synchronous; the `api` module exposes it to JavaScript.

pub mod models;
pub mod parse;
pub mod transposition;
pub mod api;

// Re-export commonly used types
pub use models::*;
pub use transposition::{
    semitones_between, transpose_chord, transpose_chord_pro, transpose_chord_pro_to_key,
    transpose_note, TransposeError, TransposeOptions,
};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Debug) {
            crate::wasm_warn!("logger already initialized: {}", e);
        }
    }

    log::info!("Chord Transposer WASM module initialized");
}
