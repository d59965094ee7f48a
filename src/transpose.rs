use crate::types::line::Line;
use crate::types::segment::Segment;

fn transpose_segment(segment: &Segment, amount: i32) -> Segment {
    match segment {
        Segment::Chord { chord, .. } => {
            let chord = chord.transpose(amount);
            Segment::Chord {
                text: chord.to_string(),
                chord,
            }
        }
        Segment::PlainText(text) => Segment::PlainText(text.clone()),
    }
}

pub fn transform_line(line: &Line, amount: i32) -> Line {
    Line {
        segments: line
            .segments
            .iter()
            .map(|segment| transpose_segment(segment, amount))
            .collect(),
    }
}

/// Shifts every chord by `amount` semitones and re-spells it from the sharp
/// table. Chords are re-spelled even for `amount == 0`, so `Bb` comes back
/// as `A#`; plain text is untouched.
pub fn transform(lines: &[Line], amount: i32) -> Vec<Line> {
    lines
        .iter()
        .map(|line| transform_line(line, amount))
        .collect()
}
