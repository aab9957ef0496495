//! The gazetteer schema as a value.
//!
//! [`IndexField`] is the compile-time view of the schema. [`GazetteerSchema`]
//! is the same table as data, for code that iterates fields, validates the
//! table, or checks a document before it is handed to the index writer.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::document::document::Document;
use crate::error::{GazetteerError, Result};
use crate::schema::field::{FieldDescriptor, IndexField, ValueKind};

/// A problem found by [`GazetteerSchema::check_document`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "violation", rename_all = "snake_case")]
pub enum SchemaViolation {
    /// The document carries a key the schema does not define.
    UnknownKey { key: String },
    /// A stored field holds a payload its kind cannot decode.
    KindMismatch {
        key: &'static str,
        expected: ValueKind,
        found: &'static str,
    },
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaViolation::UnknownKey { key } => write!(f, "unknown key '{key}'"),
            SchemaViolation::KindMismatch {
                key,
                expected,
                found,
            } => write!(f, "field '{key}' expects {expected}, found {found}"),
        }
    }
}

/// An ordered table of field descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GazetteerSchema {
    descriptors: Vec<FieldDescriptor>,
}

impl GazetteerSchema {
    /// The canonical seven-field gazetteer schema.
    pub fn canonical() -> Self {
        GazetteerSchema {
            descriptors: IndexField::ALL
                .iter()
                .map(|field| *field.descriptor())
                .collect(),
        }
    }

    /// Build a schema from an arbitrary descriptor list.
    ///
    /// The list is not checked; call [`validate`](Self::validate).
    pub fn from_descriptors(descriptors: Vec<FieldDescriptor>) -> Self {
        GazetteerSchema { descriptors }
    }

    /// Get all descriptors in declaration order.
    pub fn descriptors(&self) -> &[FieldDescriptor] {
        &self.descriptors
    }

    /// Get the descriptor registered under `key`.
    pub fn get(&self, key: &str) -> Option<&FieldDescriptor> {
        self.descriptors.iter().find(|d| d.key() == key)
    }

    /// Check if a key is defined.
    pub fn has_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Get the descriptors of stored fields.
    pub fn stored_fields(&self) -> Vec<&FieldDescriptor> {
        self.descriptors.iter().filter(|d| d.is_stored()).collect()
    }

    /// Get the descriptors of unstored fields.
    pub fn unstored_fields(&self) -> Vec<&FieldDescriptor> {
        self.descriptors.iter().filter(|d| !d.is_stored()).collect()
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Check if the schema is empty.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Validate the table: keys must be non-empty and unique, and every
    /// field must have a value kind.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.descriptors.len());

        for descriptor in &self.descriptors {
            if descriptor.key().is_empty() {
                return Err(GazetteerError::schema(format!(
                    "Field '{}' has an empty key",
                    descriptor.name()
                )));
            }
            if !seen.insert(descriptor.key()) {
                return Err(GazetteerError::schema(format!(
                    "Key '{}' is used by more than one field",
                    descriptor.key()
                )));
            }
            if descriptor.kind().is_none() {
                return Err(GazetteerError::schema(format!(
                    "Field '{}' has no value kind",
                    descriptor.name()
                )));
            }
        }

        Ok(())
    }

    /// Check a document against the schema without logging.
    ///
    /// Reports keys the schema does not define and stored fields whose
    /// payload their kind cannot decode. Violations are sorted by key.
    pub fn check_document(&self, document: &Document) -> Vec<SchemaViolation> {
        let mut violations = Vec::new();

        for (key, raw) in document.fields() {
            match self.get(key) {
                None => violations.push(SchemaViolation::UnknownKey { key: key.clone() }),
                Some(descriptor) => {
                    if let Some(kind) = descriptor.kind()
                        && kind.is_retrievable()
                        && !kind.accepts(raw)
                    {
                        violations.push(SchemaViolation::KindMismatch {
                            key: descriptor.key(),
                            expected: kind,
                            found: raw.type_name(),
                        });
                    }
                }
            }
        }

        violations.sort_by(|a, b| violation_key(a).cmp(violation_key(b)));
        violations
    }
}

impl Default for GazetteerSchema {
    fn default() -> Self {
        Self::canonical()
    }
}

fn violation_key(violation: &SchemaViolation) -> &str {
    match violation {
        SchemaViolation::UnknownKey { key } => key.as_str(),
        SchemaViolation::KindMismatch { key, .. } => *key,
    }
}
