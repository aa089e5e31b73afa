//! Flat mapping to tree
//!
//! Each key is decoded into steps and written into a tree that starts as an
//! empty mapping; the root stays a mapping. Intermediate containers are created on demand, their kind
//! dictated by the step that enters them. Sequences grow to the needed length
//! with empty-mapping placeholders.
//!
//! Vacant nodes (empty mappings or sequences, including placeholders and the
//! initial root) can become whatever container a later key needs, so the
//! final tree does not depend on entry order unless two keys conflict. An
//! empty-container entry never displaces a filled container of either kind.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::errors::{UnflattenError, UnflattenResult};
use super::FlatMap;
use crate::observability::{Event, Logger};
use crate::path::{PathCodec, Step};
use crate::value::{is_vacant, kind_name};

/// How to handle keys that disagree about a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    /// Fail with `ContainerKindConflict`
    #[default]
    Reject,
    /// Last write wins; the overwrite is logged as a warning
    Overwrite,
}

/// Container kind demanded by a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContainerKind {
    Object,
    Array,
}

impl ContainerKind {
    fn for_step(step: &Step) -> Self {
        match step {
            Step::Key(_) => ContainerKind::Object,
            Step::Index(_) => ContainerKind::Array,
        }
    }

    fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Object(_) => Some(ContainerKind::Object),
            Value::Array(_) => Some(ContainerKind::Array),
            _ => None,
        }
    }

    fn empty(&self) -> Value {
        match self {
            ContainerKind::Object => Value::Object(Map::new()),
            ContainerKind::Array => Value::Array(Vec::new()),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ContainerKind::Object => "object",
            ContainerKind::Array => "array",
        }
    }
}

fn placeholder() -> Value {
    Value::Object(Map::new())
}

/// Rebuilds trees from `FlatMap`s
pub struct Unflattener<'a> {
    conflicts: ConflictPolicy,
    logger: &'a Logger,
}

impl<'a> Unflattener<'a> {
    /// Creates an unflattener reporting overwritten conflicts to `logger`
    pub fn new(conflicts: ConflictPolicy, logger: &'a Logger) -> Self {
        Self { conflicts, logger }
    }

    /// Rebuilds a tree from `flat`. The input is never modified.
    ///
    /// # Errors
    ///
    /// - `MalformedKey` if a key fails to decode
    /// - `ContainerKindConflict` if two keys disagree about a node and the
    ///   policy is `Reject`
    pub fn unflatten(&self, flat: &FlatMap) -> UnflattenResult<Value> {
        let mut root = Value::Object(Map::new());

        for (key, leaf) in flat {
            let path = PathCodec::decode(key).map_err(|source| UnflattenError::MalformedKey {
                key: key.clone(),
                source,
            })?;
            self.insert(&mut root, key, path.steps(), leaf)?;
        }

        Ok(root)
    }

    fn insert(&self, root: &mut Value, key: &str, steps: &[Step], leaf: &Value) -> UnflattenResult<()> {
        let mut node = root;

        for (depth, step) in steps.iter().enumerate() {
            self.prepare(node, step, key, &steps[..depth])?;

            node = match (node, step) {
                (Value::Object(map), Step::Key(name)) => {
                    map.entry(name.clone()).or_insert_with(placeholder)
                }
                (Value::Array(items), Step::Index(index)) => {
                    if items.len() <= *index {
                        items.resize_with(index + 1, placeholder);
                    }
                    &mut items[*index]
                }
                (other, _) => {
                    return Err(UnflattenError::ContainerKindConflict {
                        key: key.to_string(),
                        at: location(&steps[..depth]),
                        expected: ContainerKind::for_step(step).name(),
                        found: kind_name(other),
                    })
                }
            };
        }

        self.store(node, key, steps, leaf)
    }

    /// Makes `node` the container kind `step` needs.
    fn prepare(&self, node: &mut Value, step: &Step, key: &str, at: &[Step]) -> UnflattenResult<()> {
        let wanted = ContainerKind::for_step(step);
        if ContainerKind::of(node) == Some(wanted) {
            return Ok(());
        }

        if !is_vacant(node) {
            self.conflict(key, at, wanted.name(), kind_name(node))?;
        }
        *node = wanted.empty();
        Ok(())
    }

    /// Writes the leaf at the end of a key's path.
    fn store(&self, slot: &mut Value, key: &str, steps: &[Step], leaf: &Value) -> UnflattenResult<()> {
        if slot == leaf {
            return Ok(());
        }

        // An empty container entry adds nothing to a filled container of either kind.
        if is_vacant(leaf) && ContainerKind::of(slot).is_some() && !is_vacant(slot) {
            return Ok(());
        }

        if !is_vacant(slot) {
            self.conflict(key, steps, kind_name(leaf), kind_name(slot))?;
        }
        *slot = leaf.clone();
        Ok(())
    }

    /// Applies the conflict policy. Returns `Ok` when the caller may overwrite.
    fn conflict(
        &self,
        key: &str,
        at: &[Step],
        expected: &'static str,
        found: &'static str,
    ) -> UnflattenResult<()> {
        let at = location(at);
        match self.conflicts {
            ConflictPolicy::Reject => Err(UnflattenError::ContainerKindConflict {
                key: key.to_string(),
                at,
                expected,
                found,
            }),
            ConflictPolicy::Overwrite => {
                self.logger.log_event(
                    Event::UnflattenConflictOverwritten,
                    &[("key", key), ("at", at.as_str()), ("expected", expected), ("found", found)],
                );
                Ok(())
            }
        }
    }
}

fn location(steps: &[Step]) -> String {
    if steps.is_empty() {
        "$".to_string()
    } else {
        PathCodec::encode(steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn flat(value: Value) -> FlatMap {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    fn unflatten(value: Value) -> UnflattenResult<Value> {
        let logger = Logger::disabled();
        Unflattener::new(ConflictPolicy::Reject, &logger).unflatten(&flat(value))
    }

    fn unflatten_overwriting(value: Value) -> UnflattenResult<Value> {
        let logger = Logger::disabled();
        Unflattener::new(ConflictPolicy::Overwrite, &logger).unflatten(&flat(value))
    }

    #[test]
    fn test_unflatten_nested_keys() {
        let tree = unflatten(json!({"name": "John", "cars[0].name": "Ford"})).unwrap();
        assert_eq!(tree, json!({"name": "John", "cars": [{"name": "Ford"}]}));
    }

    #[test]
    fn test_unflatten_empty_input_is_empty_object() {
        assert_eq!(unflatten(json!({})).unwrap(), json!({}));
    }

    #[test]
    fn test_gaps_filled_with_placeholders() {
        let tree = unflatten(json!({"a[2]": 1})).unwrap();
        assert_eq!(tree, json!({"a": [{}, {}, 1]}));
    }

    #[test]
    fn test_placeholder_replaced_by_sequence() {
        let tree = unflatten(json!({"a[1]": 1, "a[0][0]": 2})).unwrap();
        assert_eq!(tree, json!({"a": [[2], 1]}));
    }

    #[test]
    fn test_multi_dimensional_index() {
        let tree = unflatten(json!({"m[1][1]": 4, "m[0][0]": 1, "m[1][0]": 3, "m[0][1]": 2})).unwrap();
        assert_eq!(tree, json!({"m": [[1, 2], [3, 4]]}));
    }

    #[test]
    fn test_leading_index_keeps_mapping_root() {
        let tree = unflatten(json!({"[0].a": 1, "[1]": 2})).unwrap();
        assert_eq!(tree, json!({"": [{"a": 1}, 2]}));
    }

    #[test]
    fn test_leaf_then_container_conflict() {
        let err = unflatten(json!({"a": 1, "a.b": 2})).unwrap_err();
        assert_eq!(
            err,
            UnflattenError::ContainerKindConflict {
                key: "a.b".into(),
                at: "a".into(),
                expected: "object",
                found: "number",
            }
        );
    }

    #[test]
    fn test_container_then_leaf_conflict() {
        let err = unflatten(json!({"a.b": 2, "a": 1})).unwrap_err();
        assert_eq!(err.code(), "TREEPATH_CONTAINER_CONFLICT");
        assert_eq!(err.key(), "a");
    }

    #[test]
    fn test_sequence_vs_mapping_conflict() {
        let err = unflatten(json!({"a[0]": 1, "a.x": 2})).unwrap_err();
        assert!(matches!(
            err,
            UnflattenError::ContainerKindConflict { expected: "object", found: "array", .. }
        ));
    }

    #[test]
    fn test_overwrite_policy_last_write_wins() {
        let tree = unflatten_overwriting(json!({"a[0]": 1, "a.x": 2})).unwrap();
        assert_eq!(tree, json!({"a": {"x": 2}}));

        let tree = unflatten_overwriting(json!({"a.b": 2, "a": 1})).unwrap();
        assert_eq!(tree, json!({"a": 1}));
    }

    #[test]
    fn test_malformed_key() {
        let err = unflatten(json!({"a[x]": 1})).unwrap_err();
        assert!(matches!(err, UnflattenError::MalformedKey { ref key, .. } if key == "a[x]"));
        assert_eq!(err.code(), "TREEPATH_MALFORMED_PATH");
    }

    #[test]
    fn test_empty_container_entries() {
        let tree = unflatten(json!({"a": [], "b.c": {}})).unwrap();
        assert_eq!(tree, json!({"a": [], "b": {"c": {}}}));

        let tree = unflatten(json!({"a[0]": 1, "a": []})).unwrap();
        assert_eq!(tree, json!({"a": [1]}));
    }

    #[test]
    fn test_empty_marker_of_other_kind_ignores_order() {
        let tree = unflatten(json!({"a": {}, "a[0]": 1})).unwrap();
        assert_eq!(tree, json!({"a": [1]}));

        let tree = unflatten(json!({"a[0]": 1, "a": {}})).unwrap();
        assert_eq!(tree, json!({"a": [1]}));

        let tree = unflatten(json!({"a.b": 1, "a": []})).unwrap();
        assert_eq!(tree, json!({"a": {"b": 1}}));
    }

    #[test]
    fn test_empty_marker_replaces_placeholder() {
        let tree = unflatten(json!({"a[1]": 1, "a[0]": []})).unwrap();
        assert_eq!(tree, json!({"a": [[], 1]}));

        let tree = unflatten(json!({"a[0]": [], "a[1]": 1})).unwrap();
        assert_eq!(tree, json!({"a": [[], 1]}));
    }

    #[test]
    fn test_input_not_modified() {
        let input = flat(json!({"x[0].y": true}));
        let before = input.clone();
        let logger = Logger::disabled();
        Unflattener::new(ConflictPolicy::Reject, &logger).unflatten(&input).unwrap();
        assert_eq!(input, before);
    }
}
