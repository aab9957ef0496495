//! Read-only field lookup on a stored document.

use std::collections::HashMap;

use crate::document::field_value::FieldValue;

/// Read access to the fields of one retrieved document.
///
/// This is the only capability the schema needs from the search engine:
/// given a key, return the raw value stored under it, if any. Implementations
/// must be safe to read from several threads at once.
pub trait DocumentStore {
    /// Look up the raw value stored under `key`.
    fn lookup(&self, key: &str) -> Option<&FieldValue>;
}

impl DocumentStore for HashMap<String, FieldValue> {
    fn lookup(&self, key: &str) -> Option<&FieldValue> {
        self.get(key)
    }
}

impl<T: DocumentStore + ?Sized> DocumentStore for &T {
    fn lookup(&self, key: &str) -> Option<&FieldValue> {
        (**self).lookup(key)
    }
}
