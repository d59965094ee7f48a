use crate::types::chord::Chord;
use crate::types::segment::Segment;
use std::fmt;

/// One line of a chord sheet. Concatenating the segment texts gives back the
/// source line exactly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    pub segments: Vec<Segment>,
}

impl Line {
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    pub fn from_segments(segments: Vec<Segment>) -> Self {
        let mut line = Self::new();
        for segment in segments {
            line.push(segment);
        }
        line
    }

    /// Appends a segment, merging adjacent plain text.
    pub fn push(&mut self, segment: Segment) {
        if let Segment::PlainText(text) = &segment {
            if text.is_empty() {
                return;
            }
            if let Some(Segment::PlainText(last)) = self.segments.last_mut() {
                last.push_str(text);
                return;
            }
        }
        self.segments.push(segment);
    }

    pub fn chords(&self) -> impl Iterator<Item = &Chord> {
        self.segments.iter().filter_map(Segment::chord)
    }

    pub fn has_chords(&self) -> bool {
        self.segments.iter().any(Segment::is_chord)
    }

    /// A line made only of chords and whitespace, e.g. `C   G   Am`.
    pub fn is_chord_line(&self) -> bool {
        self.has_chords()
            && self.segments.iter().all(|segment| match segment {
                Segment::Chord { .. } => true,
                Segment::PlainText(text) => text.trim().is_empty(),
            })
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_segments_merges_plain_text() {
        let chord: Chord = "G".parse().unwrap();
        let line = Line::from_segments(vec![
            Segment::PlainText("Cb".to_string()),
            Segment::PlainText(String::new()),
            Segment::PlainText("  ".to_string()),
            Segment::Chord {
                text: "G".to_string(),
                chord,
            },
            Segment::PlainText(" la".to_string()),
        ]);
        assert_eq!(line.segments.len(), 3);
        assert_eq!(line.segments[0], Segment::PlainText("Cb  ".to_string()));
        assert_eq!(line.to_string(), "Cb  G la");
        assert!(line.has_chords());
        assert!(!line.is_chord_line());
    }
}
