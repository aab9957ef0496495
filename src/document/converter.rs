//! Document converters for creating documents from files.
//!
//! The index loader is an external collaborator; these converters exist so
//! that tooling and tests can materialise gazetteer documents from JSON.

use std::path::Path;

use crate::document::document::Document;
use crate::error::Result;

pub mod json;
pub mod jsonl;

/// A trait for converting a file into an iterator of documents.
///
/// # Example
///
/// ```no_run
/// use gazetteer_index::document::converter::DocumentConverter;
/// use gazetteer_index::document::converter::jsonl::JsonlDocumentConverter;
///
/// let converter = JsonlDocumentConverter::new();
/// for doc in converter.convert("places.jsonl").unwrap() {
///     let doc = doc.unwrap();
///     println!("Document: {:?}", doc);
/// }
/// ```
pub trait DocumentConverter {
    /// The iterator type that yields documents.
    type Iter: Iterator<Item = Result<Document>>;

    /// Convert a file into an iterator of Documents.
    fn convert<P: AsRef<Path>>(&self, path: P) -> Result<Self::Iter>;
}
