//! Ordered map type for category bodies.
//!
//! This module provides [`Map`], a wrapper around [`IndexMap`] holding the
//! keys of one Indental category in insertion order. Key order matters:
//! downstream renderers reproduce the source document's ordering, and the
//! parser's duplicate detection preserves the first occurrence of a key.
//!
//! ## Examples
//!
//! ```rust
//! use textdb::{Map, Value};
//!
//! let mut map = Map::new();
//! map.insert("KEY".to_string(), Value::from("VALUE"));
//!
//! assert_eq!(map.len(), 1);
//! assert_eq!(map.get("KEY").and_then(Value::as_str), Some("VALUE"));
//! ```

use crate::Value;
use indexmap::IndexMap;
use serde::Serialize;

/// An insertion-ordered map of normalized key names to [`Value`]s.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Map(IndexMap<String, Value>);

impl Map {
    /// Creates an empty `Map`.
    #[must_use]
    pub fn new() -> Self {
        Map(IndexMap::new())
    }

    /// Inserts a key-value pair, returning the previous value if the key
    /// was already present.
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// The scalar text stored under `key`, if the key holds a scalar.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use textdb::parse_indental;
    ///
    /// let doc = parse_indental("NAME\n  KEY : VALUE\n");
    /// let category = doc.get("NAME").unwrap();
    /// assert_eq!(category.get_str("KEY"), Some("VALUE"));
    /// ```
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// The list stored under `key`, if the key holds a list.
    #[must_use]
    pub fn get_list(&self, key: &str) -> Option<&[String]> {
        self.get(key).and_then(Value::as_list)
    }

    /// The number of keys in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// The values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// The key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }

    /// Mutable access to the value for `key`. Used by the parser to append
    /// to the open list.
    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Map {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, Value)> for Map {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Map(IndexMap::from_iter(iter))
    }
}

impl From<Map> for IndexMap<String, Value> {
    fn from(map: Map) -> Self {
        map.0
    }
}
