use crate::types::chord::Chord;
use std::fmt;

/// A span of a line: either a recognized chord or text kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Chord { text: String, chord: Chord },
    PlainText(String),
}

impl Segment {
    /// Builds a segment from a flagged span. A chord span that does not parse
    /// is demoted to plain text so no input is ever dropped.
    pub fn from_flagged(text: &str, is_chord: bool) -> Self {
        if !is_chord {
            return Segment::PlainText(text.to_string());
        }
        match text.parse::<Chord>() {
            Ok(chord) => Segment::Chord {
                text: text.to_string(),
                chord,
            },
            Err(e) => {
                log::trace!("Demoting \"{}\" to plain text: {}", text, e);
                Segment::PlainText(text.to_string())
            }
        }
    }

    /// Text of the span as it will be displayed. For chords that came out of
    /// a transposition this is the new spelling, not the source text.
    pub fn text(&self) -> &str {
        match self {
            Segment::Chord { text, .. } | Segment::PlainText(text) => text,
        }
    }

    pub fn is_chord(&self) -> bool {
        matches!(self, Segment::Chord { .. })
    }

    pub fn chord(&self) -> Option<&Chord> {
        match self {
            Segment::Chord { chord, .. } => Some(chord),
            Segment::PlainText(_) => None,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_flagged() {
        let segment = Segment::from_flagged("G7", true);
        assert!(segment.is_chord());
        assert_eq!(segment.chord().unwrap().root.value(), 7);

        let segment = Segment::from_flagged("G7", false);
        assert_eq!(segment, Segment::PlainText("G7".to_string()));
    }

    #[test]
    fn test_unparseable_chord_is_demoted() {
        let segment = Segment::from_flagged("Cb", true);
        assert_eq!(segment, Segment::PlainText("Cb".to_string()));
        assert_eq!(segment.text(), "Cb");
    }
}
