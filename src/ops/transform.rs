//! Key renaming

use std::collections::HashMap;

use serde_json::Value;

/// Renames mapping keys per `mapping`; unmapped keys pass through.
///
/// Only the top-level mapping is renamed unless `nested` is set, in which
/// case mappings at every depth are, including those inside sequences.
/// Sequences are always traversed. If two keys end up with the same name
/// the later one wins. A non-mapping input is returned unchanged.
pub fn transform(tree: &Value, mapping: &HashMap<String, String>, nested: bool) -> Value {
    match tree {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, value)| {
                    let renamed = mapping.get(key).unwrap_or(key).clone();
                    (renamed, transform_child(value, mapping, nested))
                })
                .collect(),
        ),
        other => other.clone(),
    }
}

fn transform_child(value: &Value, mapping: &HashMap<String, String>, nested: bool) -> Value {
    match value {
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| transform_child(item, mapping, nested))
                .collect(),
        ),
        Value::Object(_) if nested => transform(value, mapping, true),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mapping(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(from, to)| (from.to_string(), to.to_string()))
            .collect()
    }

    fn garage() -> Value {
        json!({
            "name": "John",
            "age": 30,
            "cars": [{"name": "Ford", "models": ["Fiesta"]}]
        })
    }

    #[test]
    fn test_top_level_rename() {
        let renamed = transform(&garage(), &mapping(&[("name", "firstName"), ("age", "ageInYears")]), false);
        assert_eq!(
            renamed,
            json!({
                "firstName": "John",
                "ageInYears": 30,
                "cars": [{"name": "Ford", "models": ["Fiesta"]}]
            })
        );
    }

    #[test]
    fn test_nested_rename() {
        let renamed = transform(&garage(), &mapping(&[("name", "label")]), true);
        assert_eq!(
            renamed,
            json!({
                "label": "John",
                "age": 30,
                "cars": [{"label": "Ford", "models": ["Fiesta"]}]
            })
        );
    }

    #[test]
    fn test_nested_inside_sequences_of_sequences() {
        let tree = json!({"grid": [[{"a": 1}]], "o": {"a": 2}});
        let renamed = transform(&tree, &mapping(&[("a", "b")]), true);
        assert_eq!(renamed, json!({"grid": [[{"b": 1}]], "o": {"b": 2}}));
    }

    #[test]
    fn test_keeps_key_order() {
        let tree = json!({"z": 1, "a": 2});
        let renamed = transform(&tree, &mapping(&[("z", "y")]), false);
        let keys: Vec<_> = renamed.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["y", "a"]);
    }

    #[test]
    fn test_non_mapping_unchanged() {
        assert_eq!(transform(&json!([1, 2]), &HashMap::new(), true), json!([1, 2]));
    }
}
