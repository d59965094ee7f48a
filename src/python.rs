//! Python bindings for the cifra library using PyO3

use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;

use crate::document::{SongDocument, parse_document};
use crate::render::render_text;
use crate::sheet::ChordSheet as RustChordSheet;
use crate::types::transpose_state::TransposeState;

pyo3::create_exception!(cifra, ParseError, PyValueError);

/// Chord sheet with its own transpose counter
#[pyclass(name = "ChordSheet")]
#[derive(Clone)]
pub struct PyChordSheet {
    doc: SongDocument,
    sheet: RustChordSheet,
    state: TransposeState,
}

impl PyChordSheet {
    fn from_document(doc: SongDocument) -> Self {
        let sheet = doc.sheet();
        PyChordSheet {
            doc,
            sheet,
            state: TransposeState::new(),
        }
    }
}

#[pymethods]
impl PyChordSheet {
    #[new]
    #[pyo3(signature = (text=""))]
    fn new(text: &str) -> Self {
        Self::from_document(SongDocument::new(text))
    }

    #[staticmethod]
    fn parse(content: &str) -> PyResult<Self> {
        match parse_document(content) {
            Ok(doc) => Ok(Self::from_document(doc)),
            Err(e) => Err(ParseError::new_err(format!("Failed to parse chord sheet: {}", e))),
        }
    }

    #[staticmethod]
    fn from_file(path: &str) -> PyResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PyIOError::new_err(format!("Failed to read file '{}': {}", path, e)))?;
        Self::parse(&content)
    }

    #[getter]
    fn title(&self) -> Option<String> {
        self.doc.title.clone()
    }

    #[getter]
    fn artist(&self) -> Option<String> {
        self.doc.artist.clone()
    }

    #[getter]
    fn steps(&self) -> i32 {
        self.state.steps()
    }

    fn step_up(&mut self) {
        self.state.step_up();
    }

    fn step_down(&mut self) {
        self.state.step_down();
    }

    fn reset(&mut self) {
        self.state.reset();
    }

    /// Rendered lines as lists of `(text, is_chord)` tuples
    fn segments(&self) -> Vec<Vec<(String, bool)>> {
        self.sheet
            .render(self.state.steps())
            .lines
            .into_iter()
            .map(|line| {
                line.segments
                    .into_iter()
                    .map(|segment| (segment.text, segment.is_chord))
                    .collect()
            })
            .collect()
    }

    /// Sheet text transposed by `steps`, ignoring the counter
    fn transpose(&self, steps: i32) -> String {
        self.sheet.render(steps).to_string()
    }

    fn pitch_classes(&self) -> Vec<(u8, Option<u8>)> {
        self.sheet.pitch_classes()
    }

    fn __len__(&self) -> usize {
        self.sheet.len()
    }

    fn __str__(&self) -> String {
        self.sheet.render(self.state.steps()).to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "ChordSheet(title={:?}, lines={}, steps={})",
            self.doc.title,
            self.sheet.len(),
            self.state.steps()
        )
    }
}

/// Parse a chord sheet document
///
/// Raises ParseError if the header block is invalid.
#[pyfunction]
fn parse(content: &str) -> PyResult<PyChordSheet> {
    PyChordSheet::parse(content)
}

/// Transpose a chord sheet body by `steps` semitones
///
/// Example:
///     cifra.render("C G Am F", 2)  # "D A Bm G"
#[pyfunction]
fn render(content: &str, steps: i32) -> String {
    render_text(content, steps).to_string()
}

/// Chord sheet tokenizer and transposer
#[pymodule]
fn cifra(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyChordSheet>()?;
    m.add_function(wrap_pyfunction!(parse, m)?)?;
    m.add_function(wrap_pyfunction!(render, m)?)?;

    m.add("ParseError", m.py().get_type::<ParseError>())?;

    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
