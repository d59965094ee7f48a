//! Line scanner that splits text into chord candidates and plain spans.
//!
//! A candidate is `[A-G][#b]?(maj|min|dim|aug|sus|add|m)?[0-9]*` optionally
//! followed by `/` and a bass note. It must start and end on a word boundary,
//! so the `A` in `And` is never a candidate while a lone `A` always is.

use crate::types::pitch::spelling_len;

/// Longer markers first so `maj` wins over `m`.
const QUALITIES: [&str; 7] = ["maj", "min", "dim", "aug", "sus", "add", "m"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    ChordCandidate,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    const fn candidate(text: &'a str) -> Self {
        Self {
            kind: TokenKind::ChordCandidate,
            text,
        }
    }

    const fn text(text: &'a str) -> Self {
        Self {
            kind: TokenKind::Text,
            text,
        }
    }
}

// Combining marks belong to the letter before them, so a decomposed `Á`
// (`A` + U+0301) is still part of its word.
fn is_combining_mark(c: char) -> bool {
    matches!(
        c,
        '\u{0300}'..='\u{036F}'
            | '\u{1AB0}'..='\u{1AFF}'
            | '\u{1DC0}'..='\u{1DFF}'
            | '\u{20D0}'..='\u{20FF}'
            | '\u{FE20}'..='\u{FE2F}'
    )
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || is_combining_mark(c)
}

fn ends_at_boundary(s: &str, end: usize) -> bool {
    s[end..].chars().next().is_none_or(|c| !is_word_char(c))
}

fn digit_run(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

// `/` followed by a bass note, or failing that the literal run after it.
// An empty run leaves the slash out of the candidate.
fn match_slash(s: &str, at: usize) -> Option<usize> {
    let after = s[at..].strip_prefix('/')?;
    let start = at + 1;

    if let Some(len) = spelling_len(after) {
        if ends_at_boundary(s, start + len) {
            return Some(start + len);
        }
    }

    let remainder: usize = after
        .chars()
        .take_while(|c| is_word_char(*c) || *c == '#')
        .map(char::len_utf8)
        .sum();
    (remainder > 0).then_some(start + remainder)
}

/// Byte length of the chord candidate at the start of `s`, if any.
///
/// The caller is responsible for the boundary before `s`.
fn match_chord(s: &str) -> Option<usize> {
    let mut end = spelling_len(s)?;

    if let Some(quality) = QUALITIES.iter().find(|q| s[end..].starts_with(**q)) {
        end += quality.len();
    }
    end += digit_run(&s[end..]);

    if let Some(slash_end) = match_slash(s, end) {
        return Some(slash_end);
    }

    ends_at_boundary(s, end).then_some(end)
}

/// Splits one line into ordered tokens. Concatenating the token texts gives
/// back `line` exactly.
pub fn tokenize_line(line: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut text_start = 0;
    let mut pos = 0;
    let mut prev: Option<char> = None;

    while let Some(c) = line[pos..].chars().next() {
        if prev.is_none_or(|p| !is_word_char(p)) {
            if let Some(len) = match_chord(&line[pos..]) {
                if text_start < pos {
                    tokens.push(Token::text(&line[text_start..pos]));
                }
                let candidate = &line[pos..pos + len];
                tokens.push(Token::candidate(candidate));
                prev = candidate.chars().next_back();
                pos += len;
                text_start = pos;
                continue;
            }
        }
        prev = Some(c);
        pos += c.len_utf8();
    }

    if text_start < line.len() {
        tokens.push(Token::text(&line[text_start..]));
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn candidates(line: &str) -> Vec<&str> {
        tokenize_line(line)
            .into_iter()
            .filter(|t| t.kind == TokenKind::ChordCandidate)
            .map(|t| t.text)
            .collect()
    }

    fn joined(line: &str) -> String {
        tokenize_line(line).iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_chord_line() {
        assert_eq!(
            tokenize_line("C G Am F"),
            vec![
                Token::candidate("C"),
                Token::text(" "),
                Token::candidate("G"),
                Token::text(" "),
                Token::candidate("Am"),
                Token::text(" "),
                Token::candidate("F"),
            ]
        );
    }

    #[test]
    fn test_qualities_and_extensions() {
        assert_eq!(
            candidates("Cmaj7 Dmin Edim Faug Gsus4 Aadd9 Bm7 C7 F#m Bb"),
            vec!["Cmaj7", "Dmin", "Edim", "Faug", "Gsus4", "Aadd9", "Bm7", "C7", "F#m", "Bb"]
        );
    }

    #[test]
    fn test_word_boundaries() {
        assert!(candidates("And I love you").is_empty());
        assert!(candidates("Because Every Good Boy").is_empty());
        assert!(candidates("Cmajor Amy Bbb Ebony").is_empty());
        assert!(candidates("xC C_ 2G").is_empty());
        assert!(candidates("C#x").is_empty());
        assert_eq!(candidates("(Am) [G]"), vec!["Am", "G"]);
    }

    #[test]
    fn test_lone_letter_is_a_chord() {
        assert_eq!(candidates("I saw A bird"), vec!["A"]);
        assert_eq!(candidates("Em casa"), vec!["Em"]);
    }

    #[test]
    fn test_unicode_letters_block_chords() {
        assert!(candidates("Dó Ré Água").is_empty());
        assert_eq!(candidates("Coração C"), vec!["C"]);
    }

    #[test]
    fn test_decomposed_accents_block_chords() {
        assert!(candidates("A\u{301}gua de beber").is_empty());
        assert!(candidates("E\u{301} o amor").is_empty());
        assert!(candidates("Do\u{301} C\u{327}").is_empty());
        assert_eq!(joined("A\u{301}gua G"), "A\u{301}gua G");
        assert_eq!(candidates("A\u{301}gua G"), vec!["G"]);
    }

    #[test]
    fn test_slash_bass() {
        assert_eq!(candidates("Dm7/F G/F#"), vec!["Dm7/F", "G/F#"]);
    }

    #[test]
    fn test_slash_remainder_is_kept() {
        assert_eq!(candidates("C/9 Am/Fm D/x"), vec!["C/9", "Am/Fm", "D/x"]);
    }

    #[test]
    fn test_empty_slash_remainder() {
        assert_eq!(
            tokenize_line("C/ G"),
            vec![Token::candidate("C"), Token::text("/ "), Token::candidate("G")]
        );
    }

    #[test]
    fn test_flat_like_spellings_are_candidates() {
        assert_eq!(candidates("Cb Fbm"), vec!["Cb", "Fbm"]);
    }

    #[test]
    fn test_round_trip() {
        for line in [
            "",
            "   ",
            "C G Am F",
            "  Intro: Dm7/F  G/B  C/9 (x2)",
            "And I love you, A-ha!\r",
            "Tom: Eb   Capo 3ª casa",
            "Cmajor//G#//",
        ] {
            assert_eq!(joined(line), line);
        }
    }
}
