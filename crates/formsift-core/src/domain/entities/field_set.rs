//! Caller-supplied field values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Field name → raw value, as submitted by a caller.
///
/// Built per request and never persisted. Keys are unique; inserting a key
/// twice keeps the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSet(BTreeMap<String, String>);

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for FieldSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_insert_wins() {
        let fields = FieldSet::new().with("login", "a@b.ru").with("login", "c@d.ru");
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get("login"), Some("c@d.ru"));
    }

    #[test]
    fn keys_are_sorted() {
        let fields: FieldSet = [("tel", "1"), ("login", "2")].into_iter().collect();
        assert_eq!(fields.keys().collect::<Vec<_>>(), vec!["login", "tel"]);
    }

    #[test]
    fn empty_set() {
        let fields = FieldSet::new();
        assert!(fields.is_empty());
        assert_eq!(fields.get("anything"), None);
    }
}
