//! Tree to flat mapping
//!
//! Depth-first walk in source order. Sequences extend the key with an index
//! step, mappings with a key step, and every leaf emits one entry.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::FlatMap;
use crate::path::{KeyStyle, PathCodec};

/// What to do with empty sequences and mappings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyContainers {
    /// Emit nothing; empty containers do not survive a round trip
    #[default]
    Drop,
    /// Emit the empty container itself as the entry value
    Preserve,
}

/// Flattens trees into `FlatMap`s
#[derive(Debug, Clone, Copy, Default)]
pub struct Flattener {
    style: KeyStyle,
    empty_containers: EmptyContainers,
}

impl Flattener {
    /// Creates a flattener
    pub fn new(style: KeyStyle, empty_containers: EmptyContainers) -> Self {
        Self {
            style,
            empty_containers,
        }
    }

    /// Flattens `tree`. Keys start with `prefix`, the already-rendered key of
    /// the sub-tree's location (empty for a whole tree).
    pub fn flatten(&self, tree: &Value, prefix: &str) -> FlatMap {
        let mut out = FlatMap::new();
        let mut key = String::from(prefix);
        self.walk(tree, &mut key, prefix.is_empty(), &mut out);
        out
    }

    fn walk(&self, node: &Value, key: &mut String, leading: bool, out: &mut FlatMap) {
        match node {
            Value::Array(items) if !items.is_empty() => {
                for (index, item) in items.iter().enumerate() {
                    let mark = key.len();
                    PathCodec::append_index(key, index, leading, self.style);
                    self.walk(item, key, false, out);
                    key.truncate(mark);
                }
            }
            Value::Object(map) if !map.is_empty() => {
                for (name, child) in map {
                    let mark = key.len();
                    PathCodec::append_key(key, name, leading);
                    self.walk(child, key, false, out);
                    key.truncate(mark);
                }
            }
            Value::Array(_) | Value::Object(_) => {
                if self.empty_containers == EmptyContainers::Preserve {
                    out.insert(key.clone(), node.clone());
                }
            }
            leaf => {
                out.insert(key.clone(), leaf.clone());
            }
        }
    }
}
