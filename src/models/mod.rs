//! Models module for the Chord Transposer
//!
//! Pitch classes, chord symbols and keys. These are plain values
//! computed per call and owned by the caller.

pub mod chord;
pub mod pitch_class;
pub mod tonic;

// Re-export commonly used types
pub use chord::{ChordPart, ChordSymbol};
pub use pitch_class::{PitchClass, Spelling, FLAT_NAMES, SHARP_NAMES};
pub use tonic::{Key, Tonic};
