//! Chromatic pitch classes and their two spelling conventions
//!
//! A pitch class is one of the twelve tones of the chromatic scale,
//! independent of octave. Each one has a sharp spelling and a flat
//! spelling; naturals are spelled the same in both tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::transposition::TransposeError;

/// Sharp spellings, indexed by semitone offset from C
pub const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Flat spellings, index-aligned with [`SHARP_NAMES`]
pub const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Output spelling convention for transposed notes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spelling {
    #[default]
    Sharp,
    Flat,
}

impl Spelling {
    fn table(self) -> &'static [&'static str; 12] {
        match self {
            Spelling::Sharp => &SHARP_NAMES,
            Spelling::Flat => &FLAT_NAMES,
        }
    }
}

/// `true` selects flats, mirroring the `useFlats` flag of the JS API
impl From<bool> for Spelling {
    fn from(use_flats: bool) -> Self {
        if use_flats {
            Spelling::Flat
        } else {
            Spelling::Sharp
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PitchClass {
    C,
    Cs,
    D,
    Ds,
    E,
    F,
    Fs,
    G,
    Gs,
    A,
    As,
    B,
}

impl PitchClass {
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::Cs,
        PitchClass::D,
        PitchClass::Ds,
        PitchClass::E,
        PitchClass::F,
        PitchClass::Fs,
        PitchClass::G,
        PitchClass::Gs,
        PitchClass::A,
        PitchClass::As,
        PitchClass::B,
    ];

    /// Semitones above C (0-11)
    pub fn offset(self) -> u8 {
        self as u8
    }

    /// Wraps any integer offset into the octave
    pub fn from_offset(offset: i64) -> PitchClass {
        Self::ALL[offset.rem_euclid(12) as usize]
    }

    /// Look a spelling up in the sharp table, then the flat table.
    ///
    /// Matching is exact: `"c"`, `"Cb"` or `"E#"` are not recognized.
    pub fn from_name(name: &str) -> Option<PitchClass> {
        SHARP_NAMES
            .iter()
            .position(|&n| n == name)
            .or_else(|| FLAT_NAMES.iter().position(|&n| n == name))
            .map(|i| Self::ALL[i])
    }

    pub fn name(self, spelling: Spelling) -> &'static str {
        spelling.table()[self.offset() as usize]
    }

    pub fn transpose(self, steps: i32) -> PitchClass {
        Self::from_offset(i64::from(self.offset()) + i64::from(steps))
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name(Spelling::Sharp))
    }
}

impl FromStr for PitchClass {
    type Err = TransposeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PitchClass::from_name(s).ok_or_else(|| TransposeError::UnknownPitch(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_index_aligned() {
        for (i, pc) in PitchClass::ALL.iter().enumerate() {
            assert_eq!(pc.offset() as usize, i);
            // Naturals share one spelling
            if !SHARP_NAMES[i].contains('#') {
                assert_eq!(SHARP_NAMES[i], FLAT_NAMES[i]);
            }
        }
    }

    #[test]
    fn test_from_name_sharp_and_flat() {
        assert_eq!(PitchClass::from_name("C#"), Some(PitchClass::Cs));
        assert_eq!(PitchClass::from_name("Db"), Some(PitchClass::Cs));
        assert_eq!(PitchClass::from_name("Bb"), Some(PitchClass::As));
        assert_eq!(PitchClass::from_name("B"), Some(PitchClass::B));
    }

    #[test]
    fn test_from_name_rejects_other_spellings() {
        assert_eq!(PitchClass::from_name("c"), None);
        assert_eq!(PitchClass::from_name("Cb"), None);
        assert_eq!(PitchClass::from_name("E#"), None);
        assert_eq!(PitchClass::from_name("C##"), None);
        assert_eq!(PitchClass::from_name(""), None);
    }

    #[test]
    fn test_from_offset_wraps_negative() {
        assert_eq!(PitchClass::from_offset(-1), PitchClass::B);
        assert_eq!(PitchClass::from_offset(-13), PitchClass::B);
        assert_eq!(PitchClass::from_offset(24), PitchClass::C);
    }

    #[test]
    fn test_transpose_extreme_steps() {
        assert_eq!(PitchClass::C.transpose(i32::MAX), PitchClass::G);
        assert_eq!(PitchClass::C.transpose(i32::MIN), PitchClass::E);
    }

    #[test]
    fn test_name_by_spelling() {
        assert_eq!(PitchClass::Gs.name(Spelling::Sharp), "G#");
        assert_eq!(PitchClass::Gs.name(Spelling::Flat), "Ab");
        assert_eq!(Spelling::from(true), Spelling::Flat);
        assert_eq!(Spelling::from(false), Spelling::Sharp);
    }

    #[test]
    fn test_from_str_error() {
        let err = "H".parse::<PitchClass>().unwrap_err();
        assert_eq!(err, TransposeError::UnknownPitch("H".to_string()));
    }
}
