//! Read-only path resolution over a decoded JSON document.

use crate::error::{value_type_name, TreeqError, TreeqResult};
use crate::path::{Path, Seg};
use serde_json::Value;

/// Resolve a path against a document, returning the terminal value.
///
/// Starting from `root`, each segment is applied to the current value in
/// order: index segments require an array and an in-bounds index, key
/// segments require an object containing the key. The walk stops at the
/// first failure. A walk that consumes every segment but lands on
/// `Value::Null` fails with [`TreeqError::NullValue`]; a null terminal is
/// never a success.
///
/// The returned reference borrows from `root`; resolution never clones or
/// mutates the document.
///
/// # Examples
///
/// ```
/// use treeq::{path, resolve};
/// use serde_json::json;
///
/// let doc = json!({"subobj": {"subarray": [1, 2, 3]}});
/// let value = resolve(&doc, &path!("subobj", "subarray", 1)).unwrap();
/// assert_eq!(value, &json!(2));
/// ```
pub fn resolve<'a>(root: &'a Value, path: &Path) -> TreeqResult<&'a Value> {
    let mut current = root;
    for (depth, seg) in path.iter().enumerate() {
        current = step(current, seg, || path.prefix(depth + 1))?;
    }
    if current.is_null() {
        return Err(TreeqError::null_value(path.clone()));
    }
    Ok(current)
}

/// Apply a single segment to the current value.
///
/// `at` lazily builds the error path (the query-path prefix up to and
/// including this segment), so the success path allocates nothing.
fn step<'a>(
    current: &'a Value,
    seg: &Seg,
    at: impl Fn() -> Path,
) -> TreeqResult<&'a Value> {
    match seg {
        Seg::Index(idx) => match current {
            Value::Array(items) => items
                .get(*idx)
                .ok_or_else(|| TreeqError::index_out_of_bounds(at(), *idx, items.len())),
            other => Err(TreeqError::index_on_non_array(at(), value_type_name(other))),
        },
        Seg::Key(key) => match current {
            Value::Object(map) => map
                .get(key)
                .ok_or_else(|| TreeqError::key_not_found(at(), key.clone())),
            other => Err(TreeqError::key_on_non_object(at(), value_type_name(other))),
        },
    }
}
