//! JSONL format document converter.
//!
//! Converts JSONL (JSON Lines) files into Documents.
//! Each line in the file should be a single JSON object:
//! ```jsonl
//! {"indexName": "Paris", "geonameID": 2988507, "population": 2148327}
//! {"indexName": "Lyon", "geonameID": 2996944, "parentID": 11071625}
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::document::converter::DocumentConverter;
use crate::document::converter::json::JsonDocumentConverter;
use crate::document::document::Document;
use crate::error::{GazetteerError, Result};

/// A document converter for JSONL format.
#[derive(Debug, Clone, Default)]
pub struct JsonlDocumentConverter {
    json: JsonDocumentConverter,
}

impl JsonlDocumentConverter {
    /// Create a new JSONL converter.
    pub fn new() -> Self {
        JsonlDocumentConverter {
            json: JsonDocumentConverter::new(),
        }
    }
}

/// Iterator over JSONL documents.
pub struct JsonlDocumentIterator {
    reader: BufReader<File>,
    converter: JsonDocumentConverter,
    line_number: usize,
}

impl JsonlDocumentIterator {
    /// One-based number of the line that produced the last item.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl Iterator for JsonlDocumentIterator {
    type Item = Result<Document>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();
        loop {
            line.clear();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None, // EOF
                Ok(_) => {
                    self.line_number += 1;
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let line_number = self.line_number;
                    return Some(
                        self.converter
                            .convert(line)
                            .map_err(|e| at_line(line_number, e)),
                    );
                }
                Err(e) => {
                    // read_line consumes the bad line before failing
                    self.line_number += 1;
                    return Some(Err(at_line(self.line_number, e.into())));
                }
            }
        }
    }
}

/// Prefix an error with the line it came from, keeping its variant.
fn at_line(line_number: usize, error: GazetteerError) -> GazetteerError {
    match error {
        GazetteerError::Parse(msg) => GazetteerError::parse(format!("line {line_number}: {msg}")),
        GazetteerError::Io(e) => {
            GazetteerError::Io(io::Error::new(e.kind(), format!("line {line_number}: {e}")))
        }
        other => other,
    }
}

impl DocumentConverter for JsonlDocumentConverter {
    type Iter = JsonlDocumentIterator;

    fn convert<P: AsRef<Path>>(&self, path: P) -> Result<Self::Iter> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| io::Error::new(e.kind(), format!("{}: {e}", path.display())))?;

        Ok(JsonlDocumentIterator {
            reader: BufReader::new(file),
            converter: self.json.clone(),
            line_number: 0,
        })
    }
}
