//! Lead-sheet markup segmentation
//!
//! Chord annotations are written inline in square brackets:
//! `[G]Amazing [D]grace`. A chord is the non-empty text between a `[` and
//! the next `]` with no other bracket in between. Everything else,
//! including unmatched or empty brackets, is literal text.

/// A slice of annotated text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    /// Contents of a `[...]` annotation, brackets excluded
    Chord(&'a str),
}

/// Split annotated text into literal runs and chord annotations.
///
/// Writing each `Text` as-is and each `Chord` wrapped in brackets
/// reproduces the input exactly.
pub fn segments(content: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut text_start = 0;
    let mut cursor = 0;

    while let Some(open) = content[cursor..].find('[').map(|i| cursor + i) {
        let body_start = open + 1;
        let close = content[body_start..]
            .find(|c: char| c == '[' || c == ']')
            .map(|i| body_start + i);

        match close {
            Some(close) if content.as_bytes()[close] == b']' && close > body_start => {
                if open > text_start {
                    out.push(Segment::Text(&content[text_start..open]));
                }
                out.push(Segment::Chord(&content[body_start..close]));
                text_start = close + 1;
                cursor = close + 1;
            }
            // Nested `[`: retry from the inner bracket
            Some(close) if content.as_bytes()[close] == b'[' => cursor = close,
            // Empty `[]`
            Some(close) => cursor = close + 1,
            None => break,
        }
    }

    if text_start < content.len() {
        out.push(Segment::Text(&content[text_start..]));
    }
    out
}

/// Chord annotations in order of appearance
pub fn extract_chords(content: &str) -> Vec<&str> {
    segments(content)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Chord(chord) => Some(chord),
            Segment::Text(_) => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rebuild(segments: &[Segment<'_>]) -> String {
        segments
            .iter()
            .map(|s| match s {
                Segment::Text(t) => t.to_string(),
                Segment::Chord(c) => format!("[{}]", c),
            })
            .collect()
    }

    #[test]
    fn test_simple_line() {
        assert_eq!(
            segments("[C]Amazing [G]grace"),
            vec![
                Segment::Chord("C"),
                Segment::Text("Amazing "),
                Segment::Chord("G"),
                Segment::Text("grace"),
            ]
        );
    }

    #[test]
    fn test_no_brackets() {
        assert_eq!(segments("no chords here"), vec![Segment::Text("no chords here")]);
        assert!(segments("").is_empty());
    }

    #[test]
    fn test_empty_brackets_are_text() {
        assert_eq!(segments("a[]b"), vec![Segment::Text("a[]b")]);
    }

    #[test]
    fn test_unclosed_bracket_is_text() {
        assert_eq!(
            segments("[C]la [G"),
            vec![Segment::Chord("C"), Segment::Text("la [G")]
        );
    }

    #[test]
    fn test_nested_bracket_takes_inner_pair() {
        assert_eq!(
            segments("[[Am]x"),
            vec![Segment::Text("["), Segment::Chord("Am"), Segment::Text("x")]
        );
    }

    #[test]
    fn test_stray_closing_bracket() {
        assert_eq!(
            segments("x] [D]y"),
            vec![Segment::Text("x] "), Segment::Chord("D"), Segment::Text("y")]
        );
    }

    #[test]
    fn test_rebuild_is_lossless() {
        let inputs = [
            "{title: Song}\n[G]Hello [D/F#]wörld ]][[",
            "[][x[y]z]",
            "ünï[cödé]",
        ];
        for input in inputs {
            assert_eq!(rebuild(&segments(input)), input);
        }
    }

    #[test]
    fn test_extract_chords() {
        assert_eq!(
            extract_chords("[G]Amazing [D/F#]grace how [Em7]sweet"),
            vec!["G", "D/F#", "Em7"]
        );
    }
}
