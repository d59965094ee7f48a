//! Song documents: a sheet body plus the metadata stored next to it.
//!
//! Text documents may open with a header block:
//!
//! ```text
//! ---
//! title: Garota de Ipanema
//! artist: Tom Jobim
//! genre: Bossa Nova
//! ---
//! Fmaj7          G7
//! Olha que coisa mais linda
//! ```
//!
//! The engine never looks at the metadata; it only travels with the body.

use crate::parser::parse_sheet;
use crate::sheet::ChordSheet;
use anyhow::{Result, bail};
use std::fmt;

#[cfg(feature = "json")]
use serde::Deserialize;

const HEADER_MARKER: &str = "---";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SongDocument {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub genre: Option<String>,
    pub views: Option<u64>,
    pub body: String,
}

/// Field names used by the document store.
#[cfg(feature = "json")]
#[derive(Debug, Deserialize)]
struct StoredSong {
    #[serde(default, rename = "musica")]
    title: Option<String>,
    #[serde(default, rename = "artista")]
    artist: Option<String>,
    #[serde(default, rename = "genero")]
    genre: Option<String>,
    #[serde(default)]
    views: Option<u64>,
    #[serde(default, rename = "cifra")]
    body: Option<String>,
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

pub fn parse_document(content: &str) -> Result<SongDocument> {
    let mut doc = SongDocument::default();

    let (first, rest) = content.split_once('\n').unwrap_or((content, ""));
    if first.trim() != HEADER_MARKER {
        doc.body = content.to_string();
        return Ok(doc);
    }

    let mut offset = 0;
    let mut split = None;
    for raw in rest.split_inclusive('\n') {
        if raw.trim() == HEADER_MARKER {
            split = Some((&rest[..offset], &rest[offset + raw.len()..]));
            break;
        }
        offset += raw.len();
    }

    let Some((header, body)) = split else {
        log::debug!("No closing header marker, reading the whole document as a sheet");
        doc.body = content.to_string();
        return Ok(doc);
    };

    for (line_idx, line) in header.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // header starts on the second line of the file
        let line_no = line_idx + 2;
        let Some((key, value)) = line.split_once(':') else {
            bail!("Line #{}: expected \"key: value\", got \"{}\"", line_no, line);
        };
        match key.trim() {
            "title" => doc.title = non_empty(value),
            "artist" => doc.artist = non_empty(value),
            "genre" => doc.genre = non_empty(value),
            "views" => {
                let views: u64 = value
                    .trim()
                    .parse()
                    .map_err(|_| anyhow::anyhow!("Line #{}: invalid views count", line_no))?;
                doc.views = Some(views);
            }
            other => bail!("Line #{}: unknown header key \"{}\"", line_no, other),
        }
    }

    doc.body = body.to_string();
    Ok(doc)
}

impl SongDocument {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            ..Self::default()
        }
    }

    #[cfg(feature = "json")]
    pub fn from_json(content: &str) -> Result<Self> {
        let stored: StoredSong = serde_json::from_str(content)?;
        Ok(Self {
            title: stored.title.as_deref().and_then(non_empty),
            artist: stored.artist.as_deref().and_then(non_empty),
            genre: stored.genre.as_deref().and_then(non_empty),
            views: stored.views,
            body: stored.body.unwrap_or_default(),
        })
    }

    pub fn sheet(&self) -> ChordSheet {
        parse_sheet(&self.body)
    }

    fn has_header(&self) -> bool {
        self.title.is_some() || self.artist.is_some() || self.genre.is_some() || self.views.is_some()
    }

    /// `Title - Artist`, or whichever of the two is known.
    pub fn heading(&self) -> Option<String> {
        match (&self.title, &self.artist) {
            (Some(title), Some(artist)) => Some(format!("{} - {}", title, artist)),
            (Some(only), None) | (None, Some(only)) => Some(only.clone()),
            (None, None) => None,
        }
    }
}

impl fmt::Display for SongDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_header() {
            writeln!(f, "{}", HEADER_MARKER)?;
            if let Some(title) = &self.title {
                writeln!(f, "title: {}", title)?;
            }
            if let Some(artist) = &self.artist {
                writeln!(f, "artist: {}", artist)?;
            }
            if let Some(genre) = &self.genre {
                writeln!(f, "genre: {}", genre)?;
            }
            if let Some(views) = self.views {
                writeln!(f, "views: {}", views)?;
            }
            writeln!(f, "{}", HEADER_MARKER)?;
        }
        write!(f, "{}", self.body)
    }
}
