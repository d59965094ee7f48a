use crate::types::segment::Segment;
use std::fmt;

#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

/// Presentation view of a segment: the text to show and whether to style it
/// as a chord.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "camelCase"))]
pub struct RenderedSegment {
    pub text: String,
    pub is_chord: bool,
}

impl RenderedSegment {
    pub fn chord(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_chord: true,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_chord: false,
        }
    }
}

impl From<&Segment> for RenderedSegment {
    fn from(segment: &Segment) -> Self {
        match segment {
            Segment::Chord { text, .. } => Self::chord(text.as_str()),
            Segment::PlainText(text) => Self::plain(text.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "json", serde(transparent))]
pub struct RenderedLine {
    pub segments: Vec<RenderedSegment>,
}

impl fmt::Display for RenderedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "{}", segment.text)?;
        }
        Ok(())
    }
}

pub struct RenderedSheetFormatter<'a> {
    sheet: &'a RenderedSheet,
    mark_chords: bool,
}

impl<'a> fmt::Display for RenderedSheetFormatter<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, line) in self.sheet.lines.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            for segment in &line.segments {
                if self.mark_chords && segment.is_chord {
                    write!(f, "[{}]", segment.text)?;
                } else {
                    write!(f, "{}", segment.text)?;
                }
            }
        }
        Ok(())
    }
}

/// A whole sheet ready for display, one entry per source line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "json", serde(transparent))]
pub struct RenderedSheet {
    pub lines: Vec<RenderedLine>,
}

impl RenderedSheet {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Formats the sheet, optionally wrapping chords in brackets so they stand
    /// out in a plain terminal.
    pub fn display_with_formatting(&self, mark_chords: bool) -> RenderedSheetFormatter<'_> {
        RenderedSheetFormatter {
            sheet: self,
            mark_chords,
        }
    }
}

impl fmt::Display for RenderedSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_with_formatting(false))
    }
}
