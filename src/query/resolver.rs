use serde_json::Value;

use crate::path::{PathCodec, PathResult};

/// Looks up a dot-separated chain of mapping keys.
///
/// Returns `None` as soon as a node is not a mapping or lacks the next
/// segment; later segments are not examined. An empty path is a single
/// empty-string key.
pub fn query<'a>(tree: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(tree, |node, segment| node.as_object()?.get(segment))
}

/// Resolves a flat key (`cars[0].name`) against `tree`.
///
/// # Errors
///
/// Returns `PathError` if `key` fails to decode.
pub fn resolve<'a>(tree: &'a Value, key: &str) -> PathResult<Option<&'a Value>> {
    let path = PathCodec::decode(key)?;
    Ok(path.resolve(tree))
}
