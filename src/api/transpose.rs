//! WASM API for chord transposition
//!
//! These are the functions the chart renderer calls. The three core
//! exports never throw; unrecognized notes and chords come back
//! unchanged. Key-based calls throw a string when a key name is invalid.

use wasm_bindgen::prelude::*;
use js_sys::Array;

use crate::models::tonic::Key;
use crate::parse::lead_sheet::extract_chords as collect_chords;
use crate::transposition::{self, TransposeOptions};
use crate::api::helpers::{deserialize, to_js_error};

#[wasm_bindgen(js_name = transposeNote)]
pub fn transpose_note(note: &str, steps: i32, use_flats: bool) -> String {
    transposition::transpose_note(note, steps, use_flats)
}

#[wasm_bindgen(js_name = transposeChord)]
pub fn transpose_chord(chord: &str, steps: i32, use_flats: bool) -> String {
    transposition::transpose_chord(chord, steps, use_flats)
}

/// Transpose every `[chord]` in a lead sheet
#[wasm_bindgen(js_name = transposeChordPro)]
pub fn transpose_chord_pro(content: &str, steps: i32, use_flats: bool) -> String {
    log::debug!(
        "transposeChordPro: {} bytes, steps={}, useFlats={}",
        content.len(),
        steps,
        use_flats
    );
    transposition::transpose_chord_pro(content, steps, use_flats)
}

/// Transpose a lead sheet from one key to another
///
/// ## Parameters
/// - `fromKey`: current key, e.g. "G" or "Em"
/// - `toKey`: target key; also decides sharps vs flats
#[wasm_bindgen(js_name = transposeChordProToKey)]
pub fn transpose_chord_pro_to_key(
    content: &str,
    from_key: &str,
    to_key: &str,
) -> Result<String, JsValue> {
    log::debug!("transposeChordProToKey: {} -> {}", from_key, to_key);
    transposition::transpose_chord_pro_to_key(content, from_key, to_key)
        .map_err(|e| to_js_error("transposeChordProToKey failed", e))
}

/// Transpose a lead sheet using an options object
///
/// ```json
/// { "steps": 2, "useFlats": false }
/// { "fromKey": "D", "toKey": "Eb" }
/// ```
#[wasm_bindgen(js_name = transposeWithOptions)]
pub fn transpose_with_options(content: &str, options: JsValue) -> Result<String, JsValue> {
    let options: TransposeOptions = deserialize(options, "Invalid transpose options")?;
    log::debug!("transposeWithOptions: {:?}", options);

    if options.from_key.is_some() && options.to_key.is_some() && options.steps != 0 {
        crate::wasm_warn!(
            "transposeWithOptions: steps={} ignored, fromKey/toKey take precedence",
            options.steps
        );
    }

    options
        .apply(content)
        .map_err(|e| to_js_error("transposeWithOptions failed", e))
}

/// Chord annotations in a lead sheet, in order of appearance
#[wasm_bindgen(js_name = extractChords)]
pub fn extract_chords(content: &str) -> Array {
    collect_chords(content)
        .into_iter()
        .map(JsValue::from_str)
        .collect()
}

/// Semitones from `fromKey` up to `toKey` (0-11)
#[wasm_bindgen(js_name = semitonesBetween)]
pub fn semitones_between(from_key: &str, to_key: &str) -> Result<i32, JsValue> {
    let from: Key = from_key
        .parse()
        .map_err(|e| to_js_error("semitonesBetween failed", e))?;
    let to: Key = to_key
        .parse()
        .map_err(|e| to_js_error("semitonesBetween failed", e))?;

    Ok(transposition::semitones_between(&from, &to))
}
