//! Generic string attributes shared by graph entities.
//!
//! Nodes, edges, and the graph itself all carry a mapping from attribute
//! name to attribute value. Keys are unique; insertion order is preserved
//! only so exports iterate deterministically.

use indexmap::IndexMap;

/// A string-key to string-value attribute map.
///
/// `set` overwrites an existing value, `append` inserts only when the key
/// is not yet present and reports whether it did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    values: IndexMap<String, String>,
}

impl Attributes {
    /// Creates an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value for the given attribute name, if set.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Sets an attribute, overwriting any existing value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Inserts an attribute only if the name is not yet present.
    ///
    /// Returns `true` if the value was inserted.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) -> bool {
        let name = name.into();
        if self.values.contains_key(&name) {
            return false;
        }
        self.values.insert(name, value.into());
        true
    }

    /// Iterates all attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The number of attributes.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
