/// Key centers used when transposing a whole chart from one key to another
///
/// Represents the 17 commonly used tonics in Western music:
/// - 7 natural tonics (C, D, E, F, G, A, B)
/// - 5 sharp tonics (C#, D#, F#, G#, A#)
/// - 5 flat tonics (Db, Eb, Gb, Ab, Bb)
///
/// Enharmonic tonics are kept apart (C# vs Db) because they decide
/// whether the transposed chart is spelled with sharps or flats.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::pitch_class::{PitchClass, Spelling};
use crate::transposition::TransposeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tonic {
    C,
    #[serde(rename = "C#")]
    Cs,
    Db,
    D,
    #[serde(rename = "D#")]
    Ds,
    Eb,
    E,
    F,
    #[serde(rename = "F#")]
    Fs,
    Gb,
    G,
    #[serde(rename = "G#")]
    Gs,
    Ab,
    A,
    #[serde(rename = "A#")]
    As,
    Bb,
    B,
}

impl Tonic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tonic::C => "C",
            Tonic::Cs => "C#",
            Tonic::Db => "Db",
            Tonic::D => "D",
            Tonic::Ds => "D#",
            Tonic::Eb => "Eb",
            Tonic::E => "E",
            Tonic::F => "F",
            Tonic::Fs => "F#",
            Tonic::Gb => "Gb",
            Tonic::G => "G",
            Tonic::Gs => "G#",
            Tonic::Ab => "Ab",
            Tonic::A => "A",
            Tonic::As => "A#",
            Tonic::Bb => "Bb",
            Tonic::B => "B",
        }
    }

    pub fn pitch_class(&self) -> PitchClass {
        match self {
            Tonic::C => PitchClass::C,
            Tonic::Cs | Tonic::Db => PitchClass::Cs,
            Tonic::D => PitchClass::D,
            Tonic::Ds | Tonic::Eb => PitchClass::Ds,
            Tonic::E => PitchClass::E,
            Tonic::F => PitchClass::F,
            Tonic::Fs | Tonic::Gb => PitchClass::Fs,
            Tonic::G => PitchClass::G,
            Tonic::Gs | Tonic::Ab => PitchClass::Gs,
            Tonic::A => PitchClass::A,
            Tonic::As | Tonic::Bb => PitchClass::As,
            Tonic::B => PitchClass::B,
        }
    }
}

impl fmt::Display for Tonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Tonic {
    type Err = TransposeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Case-insensitive parsing
        match s.to_uppercase().as_str() {
            "C" => Ok(Tonic::C),
            "C#" | "C♯" => Ok(Tonic::Cs),
            "DB" | "D♭" => Ok(Tonic::Db),
            "D" => Ok(Tonic::D),
            "D#" | "D♯" => Ok(Tonic::Ds),
            "EB" | "E♭" => Ok(Tonic::Eb),
            "E" => Ok(Tonic::E),
            "F" => Ok(Tonic::F),
            "F#" | "F♯" => Ok(Tonic::Fs),
            "GB" | "G♭" => Ok(Tonic::Gb),
            "G" => Ok(Tonic::G),
            "G#" | "G♯" => Ok(Tonic::Gs),
            "AB" | "A♭" => Ok(Tonic::Ab),
            "A" => Ok(Tonic::A),
            "A#" | "A♯" => Ok(Tonic::As),
            "BB" | "B♭" => Ok(Tonic::Bb),
            "B" => Ok(Tonic::B),
            _ => Err(TransposeError::InvalidKey(s.to_string())),
        }
    }
}

/// A song key: tonic plus major/minor mode, written "G" or "Em"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Key {
    pub tonic: Tonic,
    #[serde(default)]
    pub minor: bool,
}

impl Key {
    pub fn major(tonic: Tonic) -> Self {
        Self { tonic, minor: false }
    }

    pub fn minor(tonic: Tonic) -> Self {
        Self { tonic, minor: true }
    }

    pub fn pitch_class(&self) -> PitchClass {
        self.tonic.pitch_class()
    }

    /// Spelling a chart in this key is written with.
    ///
    /// Flat tonics use flats and sharp tonics use sharps. Among the natural
    /// tonics only F major and D, G, C, F minor carry flats in their
    /// signature.
    pub fn spelling(&self) -> Spelling {
        match self.tonic {
            Tonic::Db | Tonic::Eb | Tonic::Gb | Tonic::Ab | Tonic::Bb => Spelling::Flat,
            Tonic::Cs | Tonic::Ds | Tonic::Fs | Tonic::Gs | Tonic::As => Spelling::Sharp,
            Tonic::F => Spelling::Flat,
            Tonic::D | Tonic::G | Tonic::C if self.minor => Spelling::Flat,
            _ => Spelling::Sharp,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.minor {
            write!(f, "{}m", self.tonic)
        } else {
            write!(f, "{}", self.tonic)
        }
    }
}

impl FromStr for Key {
    type Err = TransposeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (tonic, minor) = match trimmed.strip_suffix('m') {
            Some(rest) if !rest.is_empty() => (rest, true),
            _ => (trimmed, false),
        };

        let tonic = tonic
            .parse::<Tonic>()
            .map_err(|_| TransposeError::InvalidKey(s.to_string()))?;
        Ok(Key { tonic, minor })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_naturals() {
        assert_eq!("C".parse::<Tonic>().unwrap(), Tonic::C);
        assert_eq!("D".parse::<Tonic>().unwrap(), Tonic::D);
        assert_eq!("G".parse::<Tonic>().unwrap(), Tonic::G);
        assert_eq!("B".parse::<Tonic>().unwrap(), Tonic::B);
    }

    #[test]
    fn test_from_str_accidentals() {
        assert_eq!("F#".parse::<Tonic>().unwrap(), Tonic::Fs);
        assert_eq!("F♯".parse::<Tonic>().unwrap(), Tonic::Fs);
        assert_eq!("Bb".parse::<Tonic>().unwrap(), Tonic::Bb);
        assert_eq!("B♭".parse::<Tonic>().unwrap(), Tonic::Bb);
        assert_eq!("bb".parse::<Tonic>().unwrap(), Tonic::Bb);
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("H".parse::<Tonic>().is_err());
        assert!("C###".parse::<Tonic>().is_err());
        assert!("".parse::<Tonic>().is_err());
    }

    #[test]
    fn test_enharmonic_tonics_share_pitch_class() {
        assert_eq!(Tonic::Cs.pitch_class(), Tonic::Db.pitch_class());
        assert_eq!(Tonic::As.pitch_class(), Tonic::Bb.pitch_class());
        assert_ne!(Tonic::Cs, Tonic::Db);
    }

    #[test]
    fn test_key_parse_minor() {
        assert_eq!("Em".parse::<Key>().unwrap(), Key::minor(Tonic::E));
        assert_eq!("Bbm".parse::<Key>().unwrap(), Key::minor(Tonic::Bb));
        assert_eq!(" G ".parse::<Key>().unwrap(), Key::major(Tonic::G));
    }

    #[test]
    fn test_key_parse_invalid() {
        let err = "m".parse::<Key>().unwrap_err();
        assert_eq!(err, TransposeError::InvalidKey("m".to_string()));
        assert!("Hm".parse::<Key>().is_err());
    }

    #[test]
    fn test_key_spelling() {
        assert_eq!(Key::major(Tonic::F).spelling(), Spelling::Flat);
        assert_eq!(Key::major(Tonic::Eb).spelling(), Spelling::Flat);
        assert_eq!(Key::major(Tonic::D).spelling(), Spelling::Sharp);
        assert_eq!(Key::minor(Tonic::D).spelling(), Spelling::Flat);
        assert_eq!(Key::minor(Tonic::E).spelling(), Spelling::Sharp);
        assert_eq!(Key::minor(Tonic::Fs).spelling(), Spelling::Sharp);
    }

    #[test]
    fn test_display() {
        assert_eq!(Key::minor(Tonic::Cs).to_string(), "C#m");
        assert_eq!(Key::major(Tonic::Db).to_string(), "Db");
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&Tonic::Fs).unwrap();
        assert_eq!(json, "\"F#\"");

        let key: Key = serde_json::from_str(r#"{"tonic":"Bb"}"#).unwrap();
        assert_eq!(key, Key::major(Tonic::Bb));
    }
}
