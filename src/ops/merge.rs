//! Deep merge of mappings

use serde_json::{Map, Value};

/// Deep-merges mappings left to right.
///
/// Later scalars and sequences replace earlier values; mappings present on
/// both sides merge recursively. Arguments that are not mappings are
/// skipped, so the result is always a mapping.
pub fn merge(trees: &[Value]) -> Value {
    let mut result = Map::new();
    for tree in trees {
        if let Value::Object(map) = tree {
            merge_into(&mut result, map);
        }
    }
    Value::Object(result)
}

fn merge_into(target: &mut Map<String, Value>, source: &Map<String, Value>) {
    for (key, value) in source {
        match value {
            Value::Object(nested) => {
                let slot = target
                    .entry(key.clone())
                    .or_insert_with(|| Value::Object(Map::new()));
                if !slot.is_object() {
                    *slot = Value::Object(Map::new());
                }
                if let Value::Object(existing) = slot {
                    merge_into(existing, nested);
                }
            }
            other => {
                target.insert(key.clone(), other.clone());
            }
        }
    }
}
