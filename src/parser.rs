use crate::line_parser::parse_line;
use crate::sheet::ChordSheet;

/// Parses a sheet body. Lines are split on `\n` only, so a `\r` stays in the
/// text of its line and the body can be rebuilt byte for byte.
pub fn parse_sheet(content: &str) -> ChordSheet {
    let mut sheet = ChordSheet::new();
    if content.is_empty() {
        return sheet;
    }

    for (line_idx, line) in content.split('\n').enumerate() {
        let parsed = parse_line(line);
        log::trace!(
            "Line #{}: {} chord(s) in {} segment(s)",
            line_idx + 1,
            parsed.chords().count(),
            parsed.segments.len()
        );
        sheet.lines.push(parsed);
    }

    sheet
}
