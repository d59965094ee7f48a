use crate::tokenizer::{TokenKind, tokenize_line};
use crate::types::line::Line;
use crate::types::segment::Segment;

/// Tokenizes one line and reads every candidate as a chord. Candidates that
/// fail to parse fall back to plain text.
pub fn parse_line(line: &str) -> Line {
    let mut parsed = Line::new();
    for token in tokenize_line(line) {
        let is_chord = token.kind == TokenKind::ChordCandidate;
        parsed.push(Segment::from_flagged(token.text, is_chord));
    }
    parsed
}
