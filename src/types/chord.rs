use crate::error::ChordError;
use crate::types::pitch::{PitchClass, spelling_len};
use std::fmt;
use std::str::FromStr;

/// A chord symbol read from a sheet, e.g. `Dm7/F`.
///
/// `suffix` holds the quality/extension text verbatim and is never altered by
/// transposition. A slash remainder that is not a note spelling lives in
/// `suffix` too, so `C/9` keeps its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chord {
    pub root: PitchClass,
    pub original_spelling: String,
    pub suffix: String,
    pub bass: Option<PitchClass>,
}

impl Chord {
    /// Returns the chord shifted by `steps` semitones. Root and bass move
    /// together; `original_spelling` keeps the spelling found in the source.
    pub fn transpose(&self, steps: i32) -> Chord {
        Chord {
            root: self.root.transpose(steps),
            original_spelling: self.original_spelling.clone(),
            suffix: self.suffix.clone(),
            bass: self.bass.map(|bass| bass.transpose(steps)),
        }
    }

    pub fn pitch_classes(&self) -> (u8, Option<u8>) {
        (self.root.value(), self.bass.map(PitchClass::value))
    }
}

impl FromStr for Chord {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let first = s.chars().next().ok_or(ChordError::Empty)?;
        let root_len = spelling_len(s).ok_or(ChordError::InvalidRoot(first))?;
        let (spelling, rest) = s.split_at(root_len);
        let root: PitchClass = spelling.parse()?;

        let (suffix, bass) = match rest.split_once('/') {
            Some((quality, bass_text)) => match bass_text.parse::<PitchClass>() {
                Ok(bass) => (quality.to_string(), Some(bass)),
                Err(_) => (rest.to_string(), None),
            },
            None => (rest.to_string(), None),
        };

        Ok(Chord {
            root,
            original_spelling: spelling.to_string(),
            suffix,
            bass,
        })
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.suffix)?;
        if let Some(bass) = self.bass {
            write!(f, "/{}", bass)?;
        }
        Ok(())
    }
}
