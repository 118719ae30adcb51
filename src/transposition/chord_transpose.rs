//! Semitone transposition of notes, chord symbols and lead-sheet text
//!
//! All three operations are total: anything that is not a recognized
//! note or chord root is returned unchanged.

use crate::models::chord::{ChordPart, ChordSymbol};
use crate::models::pitch_class::{PitchClass, Spelling};
use crate::parse::lead_sheet::{segments, Segment};

/// Shift a single note name by `steps` semitones.
///
/// `note` must be a spelling from the sharp or flat table ("C#", "Bb", ...);
/// anything else comes back as-is.
pub fn transpose_note(note: &str, steps: i32, use_flats: bool) -> String {
    match PitchClass::from_name(note) {
        Some(pitch) => pitch.transpose(steps).name(Spelling::from(use_flats)).to_string(),
        None => note.to_string(),
    }
}

/// Shift every root of a chord symbol, slash bass included.
///
/// ```
/// use chord_transposer_wasm::transposition::transpose_chord;
///
/// assert_eq!(transpose_chord("D/F#", 2, false), "E/G#");
/// assert_eq!(transpose_chord("Am7", -1, true), "Abm7");
/// ```
pub fn transpose_chord(chord: &str, steps: i32, use_flats: bool) -> String {
    let symbol = ChordSymbol::parse(chord);
    let mut out = String::with_capacity(chord.len() + 2);

    for (i, part) in symbol.parts.iter().enumerate() {
        if i > 0 {
            out.push('/');
        }
        match part {
            ChordPart::Rooted { root, suffix } => {
                out.push_str(&transpose_note(root, steps, use_flats));
                out.push_str(suffix);
            }
            ChordPart::Unrooted(text) => out.push_str(text),
        }
    }
    out
}

/// Transpose every `[chord]` annotation in lead-sheet text.
///
/// Text outside the brackets, and the brackets themselves, are copied
/// byte for byte.
pub fn transpose_chord_pro(content: &str, steps: i32, use_flats: bool) -> String {
    let mut out = String::with_capacity(content.len() + content.len() / 8);

    for segment in segments(content) {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Chord(chord) => {
                out.push('[');
                out.push_str(&transpose_chord(chord, steps, use_flats));
                out.push(']');
            }
        }
    }
    out
}
