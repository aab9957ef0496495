//! Schema module for the gazetteer index.
//!
//! This module defines the closed set of index fields, how each one is
//! decoded from a retrieved document, and the boolean encoding convention
//! shared with index writers.

pub mod field;
pub mod flag;
#[allow(clippy::module_inception)]
pub mod schema;
pub mod value;

// Re-export commonly used types
pub use field::{FieldDescriptor, IndexField, ValueKind};
pub use flag::{boolean_index_value, decode_boolean_index_value};
pub use schema::{GazetteerSchema, SchemaViolation};
pub use value::{FieldLookup, FromIndexValue, IndexValue};
