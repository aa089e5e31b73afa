//! Dotted key-value store
//!
//! A flattened tree whose keys use `.` as the only separator
//! (`cars.0.models.1`). Lookups are exact-key; there is no decoding back to
//! a tree since numeric segments are indistinguishable from mapping keys.

use serde_json::Value;

use super::flattener::{EmptyContainers, Flattener};
use super::FlatMap;
use crate::path::KeyStyle;

/// Key-value view of a tree
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KvStore {
    entries: FlatMap,
}

impl KvStore {
    /// Builds a store from `tree`, dropping empty containers
    pub fn from_tree(tree: &Value) -> Self {
        Self::from_tree_with(tree, EmptyContainers::Drop)
    }

    /// Builds a store from `tree` with the given empty-container policy
    pub fn from_tree_with(tree: &Value, empty_containers: EmptyContainers) -> Self {
        let flattener = Flattener::new(KeyStyle::Dotted, empty_containers);
        Self {
            entries: flattener.flatten(tree, ""),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in traversal order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn into_map(self) -> FlatMap {
        self.entries
    }

    /// The store as a single-level JSON object
    pub fn to_value(&self) -> Value {
        Value::Object(self.entries.clone())
    }
}
