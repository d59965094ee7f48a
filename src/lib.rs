//! Cifra - chord sheet transposition library
//!
//! Reads plain-text chord sheets, where chord symbols such as `C G Am F` are
//! interleaved with lyrics, and shifts every chord by a number of semitones
//! while leaving all other text byte-for-byte intact.

pub mod document;
pub mod error;
pub mod line_parser;
pub mod parser;
pub mod render;
pub mod sheet;
pub mod tokenizer;
pub mod transpose;
pub mod types;

#[cfg(feature = "python")]
pub mod python;

#[cfg(test)]
mod util;

// Re-export commonly used types
pub use document::{SongDocument, parse_document};
pub use error::ChordError;
pub use line_parser::parse_line;
pub use parser::parse_sheet;
pub use render::{render_flagged, render_line, render_sheet, render_text};
pub use sheet::ChordSheet;
pub use types::chord::Chord;
pub use types::line::Line;
pub use types::pitch::PitchClass;
pub use types::rendered::{RenderedLine, RenderedSegment, RenderedSheet};
pub use types::segment::Segment;
pub use types::transpose_state::TransposeState;
