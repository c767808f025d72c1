//! Format-agnostic types shared by the loaders and the generator.

use std::collections::HashMap;

use serde::Serialize;

/// Key/value pairs of one resource file in first-seen key order.
///
/// Inserting a key that is already present keeps its original position and
/// replaces its value, the way a later line overrides an earlier one in a
/// `.properties` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderedProperties {
    keys: Vec<String>,
    values: HashMap<String, String>,
}

impl OrderedProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a value. Returns the previous value, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let previous = self.values.insert(key.clone(), value.into());
        if previous.is_none() {
            self.keys.push(key);
        }
        previous
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// `(key, value)` pairs in first-seen key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.keys
            .iter()
            .map(|key| (key.as_str(), self.values[key].as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for OrderedProperties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = OrderedProperties::new();
        for (key, value) in iter {
            props.insert(key, value);
        }
        props
    }
}
