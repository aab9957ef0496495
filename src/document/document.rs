//! In-memory document keyed by field name.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::document::field_value::FieldValue;
use crate::document::store::DocumentStore;
use crate::schema::{IndexField, boolean_index_value};

/// A document represents a single indexed gazetteer record.
///
/// Each key holds at most one value. Keys outside the gazetteer schema are
/// allowed; they are simply never read by [`IndexField`].
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct Document {
    /// The field values for this document
    fields: HashMap<String, FieldValue>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Document {
            fields: HashMap::new(),
        }
    }

    /// Add a field value to the document, replacing any previous value.
    pub fn add_field<S: Into<String>>(&mut self, name: S, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }

    /// Get a field value from the document.
    pub fn get_field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Check if the document has a field.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Remove a field from the document.
    pub fn remove_field(&mut self, name: &str) -> Option<FieldValue> {
        self.fields.remove(name)
    }

    /// Get all field names.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.keys().map(|s| s.as_str()).collect()
    }

    /// Get all field values.
    pub fn fields(&self) -> &HashMap<String, FieldValue> {
        &self.fields
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Create a builder for constructing documents.
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::new()
    }
}

impl DocumentStore for Document {
    fn lookup(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }
}

/// A builder for constructing documents in a fluent manner.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    document: Document,
}

impl DocumentBuilder {
    /// Create a new document builder.
    pub fn new() -> Self {
        DocumentBuilder {
            document: Document::new(),
        }
    }

    /// Add a text field to the document.
    pub fn add_text<S: Into<String>, T: Into<String>>(mut self, name: S, value: T) -> Self {
        self.document
            .add_field(name, FieldValue::Text(value.into()));
        self
    }

    /// Add an integer field to the document.
    pub fn add_integer<S: Into<String>>(mut self, name: S, value: i64) -> Self {
        self.document.add_field(name, FieldValue::Integer(value));
        self
    }

    /// Add a float field to the document.
    pub fn add_float<S: Into<String>>(mut self, name: S, value: f64) -> Self {
        self.document.add_field(name, FieldValue::Float(value));
        self
    }

    /// Add a boolean field, persisted as the numeric flag `0` or `1`.
    pub fn add_boolean<S: Into<String>>(mut self, name: S, value: bool) -> Self {
        self.document.add_field(
            name,
            FieldValue::Integer(i64::from(boolean_index_value(value))),
        );
        self
    }

    /// Set a gazetteer field under its schema key.
    ///
    /// ```
    /// use gazetteer_index::document::Document;
    /// use gazetteer_index::schema::IndexField;
    ///
    /// let doc = Document::builder()
    ///     .set(IndexField::IndexName, "Paris")
    ///     .set(IndexField::GeonameID, 2_988_507)
    ///     .build();
    /// assert!(doc.has_field("geonameID"));
    /// ```
    pub fn set<V: Into<FieldValue>>(mut self, field: IndexField, value: V) -> Self {
        self.document.add_field(field.key(), value.into());
        self
    }

    /// Add a field with a generic value.
    pub fn add_field<S: Into<String>>(mut self, name: S, value: FieldValue) -> Self {
        self.document.add_field(name, value);
        self
    }

    /// Build the final document.
    pub fn build(self) -> Document {
        self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_field_operations() {
        let mut doc = Document::new();
        assert!(doc.is_empty());

        doc.add_field("indexName", FieldValue::Text("Lyon".to_string()));
        doc.add_field("population", FieldValue::Integer(513_275));
        assert_eq!(doc.len(), 2);
        assert!(doc.has_field("indexName"));
        assert_eq!(doc.get_field("population"), Some(&FieldValue::Integer(513_275)));

        doc.add_field("population", FieldValue::Integer(516_092));
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.lookup("population"), Some(&FieldValue::Integer(516_092)));

        assert_eq!(
            doc.remove_field("indexName"),
            Some(FieldValue::Text("Lyon".to_string()))
        );
        assert!(!doc.has_field("indexName"));
        assert_eq!(doc.field_names(), vec!["population"]);
    }

    #[test]
    fn test_builder_boolean_encoding() {
        let doc = Document::builder()
            .add_boolean("historical", true)
            .add_boolean("preferred", false)
            .build();

        assert_eq!(doc.get_field("historical"), Some(&FieldValue::Integer(1)));
        assert_eq!(doc.get_field("preferred"), Some(&FieldValue::Integer(0)));
    }

    #[test]
    fn test_builder_set_uses_schema_keys() {
        let doc = Document::builder()
            .set(IndexField::Geoname, "Paris")
            .set(IndexField::ParentID, 3_012_874)
            .set(IndexField::Population, 2_148_327i64)
            .build();

        assert_eq!(doc.lookup("geoname"), Some(&FieldValue::Text("Paris".to_string())));
        assert_eq!(doc.lookup("parentID"), Some(&FieldValue::Integer(3_012_874)));
        assert_eq!(doc.lookup("population"), Some(&FieldValue::Integer(2_148_327)));
    }
}
