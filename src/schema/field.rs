//! Field descriptors of the gazetteer index.
//!
//! Every field the index knows about is an [`IndexField`] variant. The
//! variant carries no behaviour of its own: it points at a constant
//! [`FieldDescriptor`] holding the stable key, the [`ValueKind`] and the
//! stored flag, and retrieval dispatches on the kind.
//!
//! | Variant       | Key           | Kind       | Stored |
//! |---------------|---------------|------------|--------|
//! | `IndexName`   | `indexName`   | `Text`     | yes    |
//! | `Geoname`     | `geoname`     | `Text`     | yes    |
//! | `GeonameID`   | `geonameID`   | `Int32`    | yes    |
//! | `ParentID`    | `parentID`    | `Int32`    | yes    |
//! | `Population`  | `population`  | `Int64`    | yes    |
//! | `Historical`  | `historical`  | `Unstored` | no     |
//! | `FeatureCode` | `featureCode` | `Unstored` | no     |
//!
//! # Retrieval
//!
//! ```
//! use gazetteer_index::document::Document;
//! use gazetteer_index::schema::{FieldLookup, IndexField, IndexValue};
//!
//! let doc = Document::builder()
//!     .set(IndexField::IndexName, "Paris")
//!     .set(IndexField::GeonameID, 2_988_507)
//!     .build();
//!
//! assert_eq!(
//!     IndexField::IndexName.get_value(&doc),
//!     FieldLookup::Present(IndexValue::Text("Paris".to_string()))
//! );
//! assert_eq!(IndexField::GeonameID.get::<i32, _>(&doc), Some(2_988_507));
//! assert_eq!(IndexField::ParentID.get_value(&doc), FieldLookup::Absent);
//! ```

use std::fmt;
use std::str::FromStr;

use ahash::AHashMap;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::document::field_value::FieldValue;
use crate::document::store::DocumentStore;
use crate::error::{GazetteerError, Result};
use crate::schema::value::{FieldLookup, FromIndexValue, IndexValue};

/// How the raw value of a field is coerced on retrieval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// String payload, returned verbatim.
    Text,
    /// Numeric payload narrowed to a 32-bit signed integer.
    Int32,
    /// Numeric payload as a 64-bit signed integer.
    Int64,
    /// Indexed for filtering and scoring only; never retrievable.
    Unstored,
}

impl ValueKind {
    /// Get the name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Text => "text",
            ValueKind::Int32 => "int32",
            ValueKind::Int64 => "int64",
            ValueKind::Unstored => "unstored",
        }
    }

    /// Check whether values of this kind can be read back from a document.
    pub fn is_retrievable(&self) -> bool {
        !matches!(self, ValueKind::Unstored)
    }

    /// Check whether a raw payload can be decoded as this kind.
    pub fn accepts(&self, raw: &FieldValue) -> bool {
        match self {
            ValueKind::Text => matches!(raw, FieldValue::Text(_)),
            ValueKind::Int32 | ValueKind::Int64 => raw.is_numeric(),
            ValueKind::Unstored => false,
        }
    }

    /// Decode a raw payload as this kind.
    ///
    /// Integer payloads narrowed to `Int32` keep their low 32 bits. Float
    /// payloads truncate toward zero and saturate at the target bounds, with
    /// NaN mapping to zero. Returns `None` when the payload type does not fit.
    pub fn decode(&self, raw: &FieldValue) -> Option<IndexValue> {
        match (self, raw) {
            (ValueKind::Text, FieldValue::Text(s)) => Some(IndexValue::Text(s.clone())),
            (ValueKind::Int32, FieldValue::Integer(i)) => Some(IndexValue::Int32(*i as i32)),
            (ValueKind::Int32, FieldValue::Float(f)) => Some(IndexValue::Int32(*f as i32)),
            (ValueKind::Int64, FieldValue::Integer(i)) => Some(IndexValue::Int64(*i)),
            (ValueKind::Int64, FieldValue::Float(f)) => Some(IndexValue::Int64(*f as i64)),
            _ => None,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named, typed slot definition for one field of the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    /// Name used in diagnostics
    name: &'static str,
    /// Lookup key in a document
    key: &'static str,
    /// Value kind; `None` when no kind is mapped
    kind: Option<ValueKind>,
    /// Whether the engine persists a retrievable value
    stored: bool,
}

impl FieldDescriptor {
    /// Create a descriptor with a value kind.
    ///
    /// The stored flag follows the kind: every kind except
    /// [`ValueKind::Unstored`] is stored.
    pub const fn new(name: &'static str, key: &'static str, kind: ValueKind) -> Self {
        FieldDescriptor {
            name,
            key,
            kind: Some(kind),
            stored: !matches!(kind, ValueKind::Unstored),
        }
    }

    /// Create a descriptor with no value kind mapped.
    ///
    /// Reading such a field is a schema defect and is reported as
    /// [`FieldLookup::Unconfigured`].
    pub const fn unconfigured(name: &'static str, key: &'static str) -> Self {
        FieldDescriptor {
            name,
            key,
            kind: None,
            stored: false,
        }
    }

    /// Get the diagnostic name of this field.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Get the document key of this field.
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Get the value kind, if one is mapped.
    pub fn kind(&self) -> Option<ValueKind> {
        self.kind
    }

    /// Check if this field is stored (retrievable from documents).
    pub fn is_stored(&self) -> bool {
        self.stored
    }

    /// Retrieve and decode this field's value from a document.
    ///
    /// This never fails. Unstored fields yield [`FieldLookup::Unstored`]
    /// and log a warning; descriptors without a kind yield
    /// [`FieldLookup::Unconfigured`] and log an error; payloads that do not
    /// fit the kind yield [`FieldLookup::Mismatch`] and log an error.
    pub fn get_value<D: DocumentStore + ?Sized>(&self, document: &D) -> FieldLookup {
        let kind = match self.kind {
            Some(ValueKind::Unstored) => {
                warn!(
                    field = self.name,
                    key = self.key,
                    "Attempting to retrieve value for an unstored field: [{}]",
                    self.name
                );
                return FieldLookup::Unstored;
            }
            Some(kind) => kind,
            None => {
                error!(
                    field = self.name,
                    key = self.key,
                    "Attempting to retrieve value for an unconfigured field: [{}]",
                    self.name
                );
                return FieldLookup::Unconfigured;
            }
        };

        let Some(raw) = document.lookup(self.key) else {
            return FieldLookup::Absent;
        };

        match kind.decode(raw) {
            Some(value) => FieldLookup::Present(value),
            None => {
                error!(
                    field = self.name,
                    key = self.key,
                    expected = kind.name(),
                    found = raw.type_name(),
                    "Stored value does not match the field kind: [{}]",
                    self.name
                );
                FieldLookup::Mismatch {
                    expected: kind,
                    found: raw.type_name(),
                }
            }
        }
    }
}

/// The fields of the gazetteer index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IndexField {
    #[serde(rename = "indexName")]
    IndexName,
    #[serde(rename = "geoname")]
    Geoname,
    #[serde(rename = "geonameID")]
    GeonameID,
    #[serde(rename = "parentID")]
    ParentID,
    #[serde(rename = "population")]
    Population,
    #[serde(rename = "historical")]
    Historical,
    #[serde(rename = "featureCode")]
    FeatureCode,
}

/// Descriptor table, indexed by `IndexField as usize`.
static DESCRIPTORS: [FieldDescriptor; 7] = [
    FieldDescriptor::new("IndexName", "indexName", ValueKind::Text),
    FieldDescriptor::new("Geoname", "geoname", ValueKind::Text),
    FieldDescriptor::new("GeonameID", "geonameID", ValueKind::Int32),
    FieldDescriptor::new("ParentID", "parentID", ValueKind::Int32),
    FieldDescriptor::new("Population", "population", ValueKind::Int64),
    FieldDescriptor::new("Historical", "historical", ValueKind::Unstored),
    FieldDescriptor::new("FeatureCode", "featureCode", ValueKind::Unstored),
];

lazy_static! {
    static ref KEY_INDEX: AHashMap<&'static str, IndexField> = IndexField::ALL
        .iter()
        .map(|field| (field.key(), *field))
        .collect();
}

impl IndexField {
    /// All fields, in declaration order.
    pub const ALL: [IndexField; 7] = [
        IndexField::IndexName,
        IndexField::Geoname,
        IndexField::GeonameID,
        IndexField::ParentID,
        IndexField::Population,
        IndexField::Historical,
        IndexField::FeatureCode,
    ];

    /// Get the descriptor of this field.
    pub fn descriptor(self) -> &'static FieldDescriptor {
        &DESCRIPTORS[self as usize]
    }

    /// Get the key of this field in the index.
    pub fn key(self) -> &'static str {
        self.descriptor().key()
    }

    /// Get the variant name used in diagnostics.
    pub fn name(self) -> &'static str {
        self.descriptor().name()
    }

    /// Get the value kind of this field.
    pub fn kind(self) -> Option<ValueKind> {
        self.descriptor().kind()
    }

    /// Check if this field is stored.
    pub fn is_stored(self) -> bool {
        self.descriptor().is_stored()
    }

    /// Find the field registered under `key`.
    pub fn from_key(key: &str) -> Option<IndexField> {
        KEY_INDEX.get(key).copied()
    }

    /// Get the value of this field as set in the given document.
    ///
    /// See [`FieldDescriptor::get_value`].
    pub fn get_value<D: DocumentStore + ?Sized>(self, document: &D) -> FieldLookup {
        self.descriptor().get_value(document)
    }

    /// Get the value of this field as a caller-chosen Rust type.
    ///
    /// Returns `None` when the value is absent or not retrievable. Asking
    /// for a type that does not match the field's kind (for example `i64`
    /// from an `Int32` field) also returns `None` and logs an error without
    /// reading the document.
    pub fn get<T, D>(self, document: &D) -> Option<T>
    where
        T: FromIndexValue,
        D: DocumentStore + ?Sized,
    {
        let descriptor = self.descriptor();
        if let Some(kind) = descriptor.kind()
            && kind.is_retrievable()
            && kind != T::KIND
        {
            error!(
                field = descriptor.name(),
                expected = kind.name(),
                requested = T::KIND.name(),
                "Requested type does not match the field kind: [{}]",
                descriptor.name()
            );
            return None;
        }

        descriptor
            .get_value(document)
            .into_value()
            .and_then(T::from_index_value)
    }

    /// Gets the integer value representing `flag` in the index.
    pub const fn boolean_index_value(flag: bool) -> i32 {
        crate::schema::flag::boolean_index_value(flag)
    }
}

impl fmt::Display for IndexField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IndexField {
    type Err = GazetteerError;

    fn from_str(s: &str) -> Result<Self> {
        IndexField::from_key(s)
            .ok_or_else(|| GazetteerError::field(format!("Unknown field key: '{s}'")))
    }
}
