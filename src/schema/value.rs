//! Decoded field values and retrieval outcomes.

use std::fmt;

use serde::Serialize;

use crate::schema::field::ValueKind;

/// A field value decoded according to its [`ValueKind`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum IndexValue {
    Text(String),
    Int32(i32),
    Int64(i64),
}

impl IndexValue {
    /// Get the kind this value was decoded as.
    pub fn kind(&self) -> ValueKind {
        match self {
            IndexValue::Text(_) => ValueKind::Text,
            IndexValue::Int32(_) => ValueKind::Int32,
            IndexValue::Int64(_) => ValueKind::Int64,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            IndexValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            IndexValue::Int32(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            IndexValue::Int64(i) => Some(*i),
            _ => None,
        }
    }
}

impl fmt::Display for IndexValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexValue::Text(s) => f.write_str(s),
            IndexValue::Int32(i) => write!(f, "{i}"),
            IndexValue::Int64(i) => write!(f, "{i}"),
        }
    }
}

/// Outcome of reading one field from one document.
///
/// Only [`FieldLookup::Present`] carries a value. The other variants are the
/// ways a read can come back empty, kept apart so callers and tests can tell
/// a missing field from a misused or misconfigured one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldLookup {
    /// The field is set and decoded cleanly.
    Present(IndexValue),
    /// The document has no value under the field's key.
    Absent,
    /// The field is not stored, so it can never be read back.
    Unstored,
    /// The field has no value kind mapped.
    Unconfigured,
    /// The stored payload does not fit the field's kind.
    Mismatch {
        expected: ValueKind,
        found: &'static str,
    },
}

impl FieldLookup {
    /// Get the value if present.
    pub fn value(&self) -> Option<&IndexValue> {
        match self {
            FieldLookup::Present(value) => Some(value),
            _ => None,
        }
    }

    /// Convert into the value if present.
    pub fn into_value(self) -> Option<IndexValue> {
        match self {
            FieldLookup::Present(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, FieldLookup::Present(_))
    }

    /// Short status label: `present`, `absent`, `unstored`, `unconfigured`
    /// or `mismatch`.
    pub fn status(&self) -> &'static str {
        match self {
            FieldLookup::Present(_) => "present",
            FieldLookup::Absent => "absent",
            FieldLookup::Unstored => "unstored",
            FieldLookup::Unconfigured => "unconfigured",
            FieldLookup::Mismatch { .. } => "mismatch",
        }
    }
}

/// Rust types a decoded [`IndexValue`] can be extracted as.
pub trait FromIndexValue: Sized {
    /// The field kind this type corresponds to.
    const KIND: ValueKind;

    /// Extract `Self`, or `None` if the value has a different kind.
    fn from_index_value(value: IndexValue) -> Option<Self>;
}

impl FromIndexValue for String {
    const KIND: ValueKind = ValueKind::Text;

    fn from_index_value(value: IndexValue) -> Option<Self> {
        match value {
            IndexValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl FromIndexValue for i32 {
    const KIND: ValueKind = ValueKind::Int32;

    fn from_index_value(value: IndexValue) -> Option<Self> {
        value.as_i32()
    }
}

impl FromIndexValue for i64 {
    const KIND: ValueKind = ValueKind::Int64;

    fn from_index_value(value: IndexValue) -> Option<Self> {
        value.as_i64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_accessors() {
        let present = FieldLookup::Present(IndexValue::Int64(2_148_327));
        assert!(present.is_present());
        assert_eq!(present.value().and_then(IndexValue::as_i64), Some(2_148_327));
        assert_eq!(present.status(), "present");
        assert_eq!(present.into_value(), Some(IndexValue::Int64(2_148_327)));

        for empty in [
            FieldLookup::Absent,
            FieldLookup::Unstored,
            FieldLookup::Unconfigured,
            FieldLookup::Mismatch {
                expected: ValueKind::Int32,
                found: "text",
            },
        ] {
            assert!(!empty.is_present());
            assert_eq!(empty.value(), None);
        }
    }

    #[test]
    fn test_from_index_value_checks_kind() {
        assert_eq!(
            String::from_index_value(IndexValue::Text("Paris".to_string())),
            Some("Paris".to_string())
        );
        assert_eq!(String::from_index_value(IndexValue::Int32(1)), None);
        assert_eq!(i32::from_index_value(IndexValue::Int32(-4)), Some(-4));
        assert_eq!(i32::from_index_value(IndexValue::Int64(4)), None);
        assert_eq!(i64::from_index_value(IndexValue::Int64(9)), Some(9));
    }

    #[test]
    fn test_display_and_kind() {
        assert_eq!(IndexValue::Text("Nice".to_string()).to_string(), "Nice");
        assert_eq!(IndexValue::Int32(-1).to_string(), "-1");
        assert_eq!(IndexValue::Int64(7).kind(), ValueKind::Int64);
    }
}
