//! # gazetteer-index
//!
//! Typed field schema for a gazetteer search index.
//!
//! ## Features
//!
//! - A closed set of field descriptors binding stable keys to value kinds
//! - Total, non-panicking retrieval of typed values from indexed documents
//! - Boolean encoding helpers matching the index's numeric convention
//! - JSON / JSONL document conversion for tooling and tests

pub mod cli;
pub mod document;
pub mod error;
pub mod schema;

pub mod prelude {
    pub use crate::document::{Document, DocumentBuilder, DocumentStore, FieldValue};
    pub use crate::error::{GazetteerError, Result};
    pub use crate::schema::{
        FieldDescriptor, FieldLookup, GazetteerSchema, IndexField, IndexValue, ValueKind,
        boolean_index_value, decode_boolean_index_value,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
