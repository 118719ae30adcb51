//! Error types for key-aware transposition
//!
//! The core note/chord/lead-sheet operations never fail; unrecognized
//! input passes through. Errors only arise when a caller names keys or
//! pitches that must be understood.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransposeError {
    /// Not a spelling from the sharp or flat table
    #[error("Unknown pitch: '{0}'")]
    UnknownPitch(String),

    #[error("Invalid key: '{0}'. Expected one of C, C#, Db, D, D#, Eb, E, F, F#, Gb, G, G#, Ab, A, A#, Bb, B, optionally followed by 'm'")]
    InvalidKey(String),

    /// Only one of `fromKey`/`toKey` was supplied
    #[error("Both fromKey and toKey are required for key transposition")]
    IncompleteKeyPair,
}
