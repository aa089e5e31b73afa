//! Recursive filtering of mapping entries

use serde_json::{Map, Value};

/// Keeps the fields of a mapping whose values satisfy `predicate`.
///
/// Nested mappings are filtered recursively and kept only when something
/// survives. Sequences are not entered; the predicate sees them whole.
/// A non-mapping input yields an empty mapping.
pub fn filter<F>(tree: &Value, predicate: F) -> Value
where
    F: Fn(&Value) -> bool,
{
    match tree {
        Value::Object(map) => Value::Object(filter_map(map, &predicate)),
        _ => Value::Object(Map::new()),
    }
}

fn filter_map<F>(map: &Map<String, Value>, predicate: &F) -> Map<String, Value>
where
    F: Fn(&Value) -> bool,
{
    let mut result = Map::new();
    for (key, value) in map {
        match value {
            Value::Object(nested) => {
                let kept = filter_map(nested, predicate);
                if !kept.is_empty() {
                    result.insert(key.clone(), Value::Object(kept));
                }
            }
            other if predicate(other) => {
                result.insert(key.clone(), other.clone());
            }
            _ => {}
        }
    }
    result
}
