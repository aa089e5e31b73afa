//! Helpers over `serde_json::Value` shared by the traversal modules

use serde_json::Value;

/// Returns the kind name used in diagnostics.
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Returns true for an empty mapping or an empty sequence.
///
/// Vacant nodes carry no information and may be replaced by a container of
/// either kind while rebuilding a tree.
pub fn is_vacant(value: &Value) -> bool {
    match value {
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// Counts leaf values reachable from `value`.
pub fn leaf_count(value: &Value) -> usize {
    match value {
        Value::Array(items) => items.iter().map(leaf_count).sum(),
        Value::Object(map) => map.values().map(leaf_count).sum(),
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_names() {
        assert_eq!(kind_name(&json!(null)), "null");
        assert_eq!(kind_name(&json!(true)), "boolean");
        assert_eq!(kind_name(&json!(1.5)), "number");
        assert_eq!(kind_name(&json!("x")), "string");
        assert_eq!(kind_name(&json!([])), "array");
        assert_eq!(kind_name(&json!({})), "object");
    }

    #[test]
    fn test_vacancy() {
        assert!(is_vacant(&json!({})));
        assert!(is_vacant(&json!([])));
        assert!(!is_vacant(&json!({"a": 1})));
        assert!(!is_vacant(&json!(null)));
    }

    #[test]
    fn test_leaf_count_ignores_empty_containers() {
        let tree = json!({"a": [1, 2, {"b": null}], "c": {}, "d": []});
        assert_eq!(leaf_count(&tree), 3);
    }
}
