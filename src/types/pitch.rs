use crate::error::ChordError;
use std::fmt;
use std::str::FromStr;

/// Sharp-preferred spelling of every pitch class, indexed by value.
pub const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Flat spellings accepted on input and their sharp equivalents.
pub const FLAT_TO_SHARP: [(&str, &str); 5] = [
    ("Db", "C#"),
    ("Eb", "D#"),
    ("Gb", "F#"),
    ("Ab", "G#"),
    ("Bb", "A#"),
];

/// One of the twelve equal-tempered notes, independent of octave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: PitchClass = PitchClass(0);

    pub const fn new(value: u8) -> Option<Self> {
        if value < 12 { Some(Self(value)) } else { None }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// Shifts by `steps` semitones, wrapping into 0..12 for any sign or magnitude.
    pub fn transpose(self, steps: i32) -> Self {
        let shift = steps.rem_euclid(12) as u8;
        Self((self.0 + shift) % 12)
    }

    pub fn name(self) -> &'static str {
        SHARP_NAMES[self.0 as usize]
    }
}

/// Length in bytes of the `[A-G][#b]?` spelling at the start of `s`.
pub(crate) fn spelling_len(s: &str) -> Option<usize> {
    let mut chars = s.chars();
    match chars.next() {
        Some('A'..='G') => {}
        _ => return None,
    }
    match chars.next() {
        Some('#' | 'b') => Some(2),
        _ => Some(1),
    }
}

impl FromStr for PitchClass {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let first = s.chars().next().ok_or(ChordError::Empty)?;
        if !('A'..='G').contains(&first) {
            return Err(ChordError::InvalidRoot(first));
        }

        let sharp = FLAT_TO_SHARP
            .iter()
            .find(|(flat, _)| *flat == s)
            .map_or(s, |(_, sharp)| sharp);

        SHARP_NAMES
            .iter()
            .position(|name| *name == sharp)
            .map(|idx| Self(idx as u8))
            .ok_or_else(|| ChordError::UnknownSpelling(s.to_string()))
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
