//! Field extraction across a sequence of mappings

use serde_json::Value;

/// Collects `item[key]` for every element of a sequence, or every value of
/// a mapping, in order. Missing fields and non-mapping items give `Null`.
/// Any other input gives an empty vector.
pub fn pluck(items: &Value, key: &str) -> Vec<Value> {
    let field = |item: &Value| item.get(key).cloned().unwrap_or(Value::Null);

    match items {
        Value::Array(items) => items.iter().map(field).collect(),
        Value::Object(map) => map.values().map(field).collect(),
        _ => Vec::new(),
    }
}
