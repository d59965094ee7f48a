use crate::render::render_sheet;
use crate::transpose;
use crate::types::chord::Chord;
use crate::types::line::Line;
use crate::types::rendered::RenderedSheet;
use std::fmt;

/// A parsed chord sheet body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordSheet {
    pub lines: Vec<Line>,
}

impl Default for ChordSheet {
    fn default() -> Self {
        Self::new()
    }
}

impl ChordSheet {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn from_lines(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Every recognized chord, in reading order.
    pub fn chords(&self) -> impl Iterator<Item = &Chord> {
        self.lines.iter().flat_map(Line::chords)
    }

    /// `(root, bass)` pitch classes of every chord, in reading order.
    pub fn pitch_classes(&self) -> Vec<(u8, Option<u8>)> {
        self.chords().map(Chord::pitch_classes).collect()
    }

    pub fn is_chord_line(&self, line_idx: usize) -> bool {
        self.lines.get(line_idx).is_some_and(Line::is_chord_line)
    }

    pub fn transposed(&self, steps: i32) -> ChordSheet {
        ChordSheet::from_lines(transpose::transform(&self.lines, steps))
    }

    pub fn render(&self, steps: i32) -> RenderedSheet {
        render_sheet(self, steps)
    }
}

impl fmt::Display for ChordSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, line) in self.lines.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}
