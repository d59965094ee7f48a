use thiserror::Error;

/// Why a chord-candidate span could not be read as a chord.
///
/// Never surfaced by rendering: a span that fails here is demoted to plain text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChordError {
    #[error("Empty chord symbol")]
    Empty,

    #[error("Chord must start with a root A-G, got '{0}'")]
    InvalidRoot(char),

    #[error("Unknown root spelling \"{0}\"")]
    UnknownSpelling(String),
}
