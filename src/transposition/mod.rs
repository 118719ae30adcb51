pub mod chord_transpose;
pub mod errors;
pub mod key_transpose;

pub use chord_transpose::{transpose_chord, transpose_chord_pro, transpose_note};
pub use errors::TransposeError;
pub use key_transpose::{semitones_between, transpose_chord_pro_to_key, TransposeOptions};
