use crate::parse_sheet;
use crate::sheet::ChordSheet;
use crate::types::line::Line;
use pretty_assertions::assert_eq;

pub fn assert_eq_transposed(input: &str, transform: fn(&[Line]) -> Vec<Line>, expected: &str) {
    let input_parsed = parse_sheet(input);
    let transformed = ChordSheet::from_lines(transform(&input_parsed.lines));
    assert_eq!(
        transformed.len(),
        input_parsed.len(),
        "line count changed, output={:?}",
        transformed.to_string().split('\n').collect::<Vec<_>>(),
    );
    assert_eq!(transformed.to_string(), expected);
}

pub fn assert_eq_render(input: &str, steps: i32, expected: &str) {
    let rendered = parse_sheet(input).render(steps);
    assert_eq!(rendered.to_string(), expected);
}
