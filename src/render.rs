//! Turns parsed lines into `{text, is_chord}` pairs for display.
//!
//! Rendering is a pure function of `(sheet, steps)`: callers may cache the
//! result under that key. A transposed chord can be longer or shorter than
//! its source text (`C` becomes `C#`), so chords written above lyrics may
//! drift by a column.

use crate::parser::parse_sheet;
use crate::sheet::ChordSheet;
use crate::transpose::transform_line;
use crate::types::line::Line;
use crate::types::rendered::{RenderedLine, RenderedSegment, RenderedSheet};
use crate::types::segment::Segment;

pub fn render_line(line: &Line, steps: i32) -> RenderedLine {
    RenderedLine {
        segments: transform_line(line, steps)
            .segments
            .iter()
            .map(RenderedSegment::from)
            .collect(),
    }
}

pub fn render_sheet(sheet: &ChordSheet, steps: i32) -> RenderedSheet {
    RenderedSheet {
        lines: sheet
            .lines
            .iter()
            .map(|line| render_line(line, steps))
            .collect(),
    }
}

/// Parses and renders a sheet body in one call.
pub fn render_text(content: &str, steps: i32) -> RenderedSheet {
    render_sheet(&parse_sheet(content), steps)
}

/// Renders segments flagged by another producer. Chord-flagged text is parsed
/// again; if that fails the text is passed through unchanged as plain text.
pub fn render_flagged(segments: &[RenderedSegment], steps: i32) -> RenderedLine {
    RenderedLine {
        segments: segments
            .iter()
            .map(|segment| {
                if !segment.is_chord {
                    return segment.clone();
                }
                let parsed = Segment::from_flagged(&segment.text, true);
                match parsed.chord() {
                    Some(chord) => RenderedSegment::chord(chord.transpose(steps).to_string()),
                    None => RenderedSegment::plain(segment.text.as_str()),
                }
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::transpose_state::TransposeState;
    use crate::util::assert_eq_render;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_untransposed_chords() {
        let rendered = render_text("C G Am F", 0);
        assert_eq!(
            rendered.lines[0].segments,
            vec![
                RenderedSegment::chord("C"),
                RenderedSegment::plain(" "),
                RenderedSegment::chord("G"),
                RenderedSegment::plain(" "),
                RenderedSegment::chord("Am"),
                RenderedSegment::plain(" "),
                RenderedSegment::chord("F"),
            ]
        );
        assert_eq!(rendered.to_string(), "C G Am F");
    }

    #[test]
    fn test_transposed_chords() {
        assert_eq_render("C G Am F", 2, "D A Bm G");
        assert_eq_render("Dm7/F", -2, "Cm7/D#");
    }

    #[test]
    fn test_lyric_line_is_untouched() {
        for steps in [-13, -1, 0, 5, 11, 24] {
            assert_eq_render("And I love you", steps, "And I love you");
            assert_eq_render("  Eu sei, que vou te amar...  ", steps, "  Eu sei, que vou te amar...  ");
        }
        let rendered = render_text("And I love you", 5);
        assert!(rendered.lines[0].segments.iter().all(|s| !s.is_chord));
    }

    #[test]
    fn test_twelve_steps_up_return_home() {
        let sheet = parse_sheet("C");
        let mut state = TransposeState::new();
        let mut seen = Vec::new();
        for _ in 0..12 {
            state.step_up();
            seen.push(sheet.render(state.steps()).to_string());
        }
        assert_eq!(seen.last().map(String::as_str), Some("C"));
        assert_eq!(seen[0], "C#");
        assert_eq!(seen[10], "B");
    }

    #[test]
    fn test_empty_sheet() {
        let rendered = render_text("", 3);
        assert!(rendered.is_empty());
        assert_eq!(rendered.to_string(), "");
    }

    #[test]
    fn test_render_is_deterministic() {
        let sheet = parse_sheet("G/B  C  D\nla la la");
        assert_eq!(sheet.render(4), sheet.render(4));
        assert_eq!(sheet.render(4), sheet.render(16));
    }

    #[test]
    fn test_demoted_spans_are_plain() {
        let rendered = render_text("Cb G", 1);
        assert_eq!(
            rendered.lines[0].segments,
            vec![RenderedSegment::plain("Cb "), RenderedSegment::chord("G#")]
        );
    }

    #[test]
    fn test_render_flagged_falls_back() {
        let line = render_flagged(
            &[
                RenderedSegment::chord("Am"),
                RenderedSegment::plain(" x "),
                RenderedSegment::chord("Hm7"),
                RenderedSegment::chord("Cb"),
            ],
            3,
        );
        assert_eq!(
            line.segments,
            vec![
                RenderedSegment::chord("Cm"),
                RenderedSegment::plain(" x "),
                RenderedSegment::plain("Hm7"),
                RenderedSegment::plain("Cb"),
            ]
        );
    }

    #[test]
    fn test_decomposed_lyric_is_untouched() {
        assert_eq_render("A\u{301}gua de beber", 2, "A\u{301}gua de beber");
    }
}
