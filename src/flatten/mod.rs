//! Flatten / unflatten
//!
//! Converts between nested trees and single-level mappings keyed by flat
//! keys (`cars[0].name`). Keys are rendered and parsed by `crate::path`.
//!
//! Round trip: for a mapping-rooted tree with no empty sequences or mappings,
//! `unflatten(&flatten(&t, ""))` returns `t`. Empty containers are dropped by
//! default; `EmptyContainers::Preserve` keeps them as entry values so they
//! survive the trip as well. A root sequence flattens to keys that start with
//! `[`, and those rebuild under an empty field name: `[1]` comes back as
//! `{"": [1]}`.

mod errors;
mod flattener;
mod kv;
mod unflattener;

use serde_json::Value;

use crate::observability::Logger;

pub use errors::{UnflattenError, UnflattenResult};
pub use flattener::{EmptyContainers, Flattener};
pub use kv::KvStore;
pub use unflattener::{ConflictPolicy, Unflattener};

/// Flat key to leaf value, in traversal order
pub type FlatMap = serde_json::Map<String, Value>;

/// Flattens `tree` with default settings.
pub fn flatten(tree: &Value, prefix: &str) -> FlatMap {
    Flattener::default().flatten(tree, prefix)
}

/// Rebuilds a tree, rejecting conflicting keys.
pub fn unflatten(flat: &FlatMap) -> UnflattenResult<Value> {
    let logger = Logger::disabled();
    Unflattener::new(ConflictPolicy::Reject, &logger).unflatten(flat)
}

/// Flattens `tree` into a dotted key-value store.
pub fn to_kv(tree: &Value) -> KvStore {
    KvStore::from_tree(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_round_trip() {
        let tree = json!({"name": "John", "cars": [{"name": "Ford", "models": ["Fiesta", "Focus"]}]});
        let flat = flatten(&tree, "");
        assert_eq!(unflatten(&flat).unwrap(), tree);
    }

    #[test]
    fn test_round_trip_with_preserved_empties() {
        let tree = json!({"a": [], "b": {"c": {}, "d": [1, []]}});
        let flattener = Flattener::new(Default::default(), EmptyContainers::Preserve);
        let flat = flattener.flatten(&tree, "");
        assert_eq!(unflatten(&flat).unwrap(), tree);
    }

    #[test]
    fn test_empty_containers_lost_by_default() {
        let tree = json!({"a": [], "b": 1});
        assert_eq!(unflatten(&flatten(&tree, "")).unwrap(), json!({"b": 1}));
    }

    #[test]
    fn test_to_kv_uses_dots() {
        let store = to_kv(&json!({"cars": [{"name": "Ford"}]}));
        assert_eq!(store.get("cars.0.name"), Some(&json!("Ford")));
    }
}
