//! JSON format document converter.
//!
//! Converts a single JSON object into a Document:
//! ```json
//! {
//!   "indexName": "Paris",
//!   "geonameID": 2988507,
//!   "population": 2148327,
//!   "historical": false
//! }
//! ```
//!
//! Strings stay text, integers become [`FieldValue::Integer`], other numbers
//! become [`FieldValue::Float`] and booleans are persisted as `0` / `1`.
//! `null` leaves the field unset.

use serde_json::{Map, Value};

use crate::document::document::Document;
use crate::document::field_value::FieldValue;
use crate::error::{GazetteerError, Result};
use crate::schema::boolean_index_value;

/// A document converter for JSON objects.
#[derive(Debug, Clone, Default)]
pub struct JsonDocumentConverter;

impl JsonDocumentConverter {
    /// Create a new JSON converter.
    pub fn new() -> Self {
        JsonDocumentConverter
    }

    /// Parse a JSON object into a Document.
    pub fn convert(&self, input: &str) -> Result<Document> {
        let value: Value = serde_json::from_str(input)
            .map_err(|e| GazetteerError::parse(format!("Failed to parse JSON: {e}")))?;

        match value {
            Value::Object(map) => self.convert_object(map),
            other => Err(GazetteerError::parse(format!(
                "Expected a JSON object, found {}",
                json_type_name(&other)
            ))),
        }
    }

    /// Convert an already parsed JSON object into a Document.
    pub fn convert_object(&self, map: Map<String, Value>) -> Result<Document> {
        let mut doc = Document::new();

        for (key, val) in map {
            let field_value = match val {
                Value::Null => continue,
                Value::String(s) => FieldValue::Text(s),
                Value::Number(n) => {
                    if let Some(i) = n.as_i64() {
                        FieldValue::Integer(i)
                    } else if let Some(f) = n.as_f64() {
                        FieldValue::Float(f)
                    } else {
                        return Err(GazetteerError::parse(format!(
                            "Field '{key}': number {n} is out of range"
                        )));
                    }
                }
                Value::Bool(b) => FieldValue::Integer(i64::from(boolean_index_value(b))),
                other => {
                    return Err(GazetteerError::parse(format!(
                        "Field '{key}': unsupported {} value",
                        json_type_name(&other)
                    )));
                }
            };
            doc.add_field(key, field_value);
        }

        Ok(doc)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_parsing() {
        let converter = JsonDocumentConverter::new();
        let json = r#"{"indexName": "Paris", "geonameID": 2988507}"#;
        let doc = converter.convert(json).unwrap();

        assert!(doc.has_field("indexName"));
        assert!(doc.has_field("geonameID"));
    }

    #[test]
    fn test_json_value_mapping() {
        let converter = JsonDocumentConverter::new();
        let json = r#"{"geoname": "1", "population": 2148327, "score": 0.5, "historical": true, "parentID": null}"#;
        let doc = converter.convert(json).unwrap();

        assert_eq!(
            doc.get_field("geoname"),
            Some(&FieldValue::Text("1".to_string()))
        );
        assert_eq!(
            doc.get_field("population"),
            Some(&FieldValue::Integer(2_148_327))
        );
        assert!(matches!(doc.get_field("score"), Some(FieldValue::Float(_))));
        assert_eq!(doc.get_field("historical"), Some(&FieldValue::Integer(1)));
        assert!(!doc.has_field("parentID"));
    }

    #[test]
    fn test_json_rejects_nested_values() {
        let converter = JsonDocumentConverter::new();

        let err = converter
            .convert(r#"{"geoname": ["Paris", "Lutetia"]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("'geoname'"));
        assert!(err.to_string().contains("array"));

        let err = converter.convert(r#"{"loc": {"lat": 1.0}}"#).unwrap_err();
        assert!(err.to_string().contains("object"));
    }

    #[test]
    fn test_json_rejects_non_objects() {
        let converter = JsonDocumentConverter::new();
        assert!(matches!(
            converter.convert("[1, 2]"),
            Err(GazetteerError::Parse(_))
        ));
        assert!(matches!(
            converter.convert("{broken"),
            Err(GazetteerError::Parse(_))
        ));
    }
}
