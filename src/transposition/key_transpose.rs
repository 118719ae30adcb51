//! Key-to-key transposition and the options object passed in from JS

use serde::{Deserialize, Serialize};

use crate::models::pitch_class::Spelling;
use crate::models::tonic::Key;
use super::chord_transpose::transpose_chord_pro;
use super::errors::TransposeError;

/// Upward distance from one key's tonic to another's, in 0-11
pub fn semitones_between(from: &Key, to: &Key) -> i32 {
    let diff = i32::from(to.pitch_class().offset()) - i32::from(from.pitch_class().offset());
    diff.rem_euclid(12)
}

/// Move a chart from `from_key` to `to_key`, spelled the way the target key is written
pub fn transpose_chord_pro_to_key(
    content: &str,
    from_key: &str,
    to_key: &str,
) -> Result<String, TransposeError> {
    let from: Key = from_key.parse()?;
    let to: Key = to_key.parse()?;

    Ok(transpose_chord_pro(
        content,
        semitones_between(&from, &to),
        to.spelling() == Spelling::Flat,
    ))
}

/// Transposition settings as sent by the chart renderer
///
/// ```json
/// { "steps": -2, "useFlats": true }
/// { "fromKey": "G", "toKey": "Bb" }
/// ```
///
/// When both keys are given they take precedence over `steps`/`useFlats`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransposeOptions {
    pub steps: i32,
    pub use_flats: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_key: Option<String>,
}

impl TransposeOptions {
    pub fn by_steps(steps: i32, use_flats: bool) -> Self {
        Self {
            steps,
            use_flats,
            ..Self::default()
        }
    }

    /// Effective semitone shift and output spelling
    pub fn resolve(&self) -> Result<(i32, Spelling), TransposeError> {
        match (&self.from_key, &self.to_key) {
            (Some(from), Some(to)) => {
                let from: Key = from.parse()?;
                let to: Key = to.parse()?;
                Ok((semitones_between(&from, &to), to.spelling()))
            }
            (None, None) => Ok((self.steps, Spelling::from(self.use_flats))),
            _ => Err(TransposeError::IncompleteKeyPair),
        }
    }

    pub fn apply(&self, content: &str) -> Result<String, TransposeError> {
        let (steps, spelling) = self.resolve()?;
        Ok(transpose_chord_pro(content, steps, spelling == Spelling::Flat))
    }
}
