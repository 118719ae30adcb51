//! Chord symbols as written in lead sheets
//!
//! A chord symbol is split on `/` into parts ("D/F#" has two). Each part
//! is a root (`A`-`G` plus at most one `b` or `#`) followed by a suffix
//! that is carried through untouched. Parts without a recognizable root
//! are kept verbatim.

use std::fmt;

/// One `/`-separated component of a chord symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChordPart<'a> {
    Rooted { root: &'a str, suffix: &'a str },
    Unrooted(&'a str),
}

impl<'a> ChordPart<'a> {
    pub fn parse(text: &'a str) -> ChordPart<'a> {
        let bytes = text.as_bytes();
        let root_len = match bytes {
            [b'A'..=b'G', b'b' | b'#', ..] => 2,
            [b'A'..=b'G', ..] => 1,
            _ => return ChordPart::Unrooted(text),
        };

        let suffix = &text[root_len..];
        // The root/suffix split never reaches across a line break
        if suffix.contains(&['\n', '\r', '\u{2028}', '\u{2029}'][..]) {
            return ChordPart::Unrooted(text);
        }

        ChordPart::Rooted {
            root: &text[..root_len],
            suffix,
        }
    }
}

impl fmt::Display for ChordPart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChordPart::Rooted { root, suffix } => write!(f, "{}{}", root, suffix),
            ChordPart::Unrooted(text) => f.write_str(text),
        }
    }
}

/// A full chord symbol, e.g. "Am7" or "G/B"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordSymbol<'a> {
    pub parts: Vec<ChordPart<'a>>,
}

impl<'a> ChordSymbol<'a> {
    pub fn parse(text: &'a str) -> ChordSymbol<'a> {
        ChordSymbol {
            parts: text.split('/').map(ChordPart::parse).collect(),
        }
    }

    /// Root of the first part, if it has one
    pub fn root(&self) -> Option<&'a str> {
        match self.parts.first() {
            Some(ChordPart::Rooted { root, .. }) => Some(*root),
            _ => None,
        }
    }

    /// Root of the last part when the chord has a slash bass
    pub fn bass(&self) -> Option<&'a str> {
        match self.parts.as_slice() {
            [_, .., ChordPart::Rooted { root, .. }] => Some(*root),
            _ => None,
        }
    }
}

impl fmt::Display for ChordSymbol<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{}", part)?;
        }
        Ok(())
    }
}
