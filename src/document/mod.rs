//! Document module.
//!
//! This module provides the document side of the schema contract: the raw
//! [`FieldValue`] payloads, the [`DocumentStore`] lookup the schema reads
//! through, and an in-memory [`Document`] implementation.

pub mod converter;
#[allow(clippy::module_inception)]
pub mod document;
pub mod field_value;
pub mod store;

// Re-export commonly used types
pub use document::{Document, DocumentBuilder};
pub use field_value::FieldValue;
pub use store::DocumentStore;
