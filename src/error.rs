//! Error types for the gazetteer index library.
//!
//! Field retrieval never fails; it reports problems through
//! [`FieldLookup`](crate::schema::FieldLookup) outcomes and diagnostics. The
//! fallible surfaces (document conversion, schema validation, the CLI) return
//! [`GazetteerError`].
//!
//! # Examples
//!
//! ```
//! use gazetteer_index::error::{GazetteerError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(GazetteerError::field("unknown key: population2"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for gazetteer index operations.
#[derive(Error, Debug)]
pub enum GazetteerError {
    /// I/O errors (reading document files, writing output)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input that could not be turned into a document
    #[error("Parse error: {0}")]
    Parse(String),

    /// Schema table violations
    #[error("Schema error: {0}")]
    Schema(String),

    /// Field-related errors
    #[error("Field error: {0}")]
    Field(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with GazetteerError.
pub type Result<T> = std::result::Result<T, GazetteerError>;

impl GazetteerError {
    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        GazetteerError::Parse(msg.into())
    }

    /// Create a new schema error.
    pub fn schema<S: Into<String>>(msg: S) -> Self {
        GazetteerError::Schema(msg.into())
    }

    /// Create a new field error.
    pub fn field<S: Into<String>>(msg: S) -> Self {
        GazetteerError::Field(msg.into())
    }
}
