//! Raw field values as held by an indexed document.
//!
//! A [`FieldValue`] is what the underlying engine hands back for a key: either
//! a string payload or a numeric payload. Interpreting it as a typed value is
//! the job of [`IndexField`](crate::schema::IndexField).
//!
//! ```
//! use gazetteer_index::document::field_value::FieldValue;
//!
//! let name = FieldValue::Text("Paris".to_string());
//! assert_eq!(name.as_text(), Some("Paris"));
//!
//! let population = FieldValue::Integer(2_148_327);
//! assert_eq!(population.as_i64(), Some(2_148_327));
//! assert_eq!(population.as_text(), None);
//! ```

use serde::{Deserialize, Serialize};

/// Represents a raw value for a field in a document.
///
/// Booleans have no variant of their own: the index persists them as
/// `Integer(0)` / `Integer(1)` (see
/// [`boolean_index_value`](crate::schema::boolean_index_value)).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// String payload
    Text(String),
    /// Integral numeric payload
    Integer(i64),
    /// Floating point numeric payload
    Float(f64),
}

impl FieldValue {
    /// Get the string payload, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the integer payload, if this is an integer value.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the numeric payload widened to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(i) => Some(*i as f64),
            FieldValue::Float(f) => Some(*f),
            FieldValue::Text(_) => None,
        }
    }

    /// Check whether this value carries a numeric payload.
    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldValue::Integer(_) | FieldValue::Float(_))
    }

    /// Short name of the payload type, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Integer(_) => "integer",
            FieldValue::Float(_) => "float",
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}
