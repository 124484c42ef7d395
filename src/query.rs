//! The query façade: typed accessors over a borrowed document.

use crate::coerce;
use crate::error::{value_type_name, ArrayError, ArrayResult, TreeqError, TreeqResult};
use crate::path::{IntoPath, Path, Seg};
use crate::resolve::resolve;
use serde_json::{Map, Value};
use std::fmt;

static NULL: Value = Value::Null;

/// A typed query handle over a borrowed, decoded JSON document.
///
/// `Query` binds to the root of a document (which must be an object) and
/// exposes one accessor pair per supported type: a fallible `get_*` method
/// returning [`TreeqResult`], and a `must_*` convenience twin whose behavior
/// is governed by the fail-fast flag. With fail-fast enabled (the default) a
/// failing `must_*` call panics with the underlying error; with it disabled
/// the call returns the type's zero value and discards the error detail.
///
/// The document is only borrowed, never copied; every accessor is a pure
/// function of `(document, path)`.
///
/// # Examples
///
/// ```
/// use treeq::Query;
/// use serde_json::json;
///
/// let doc = json!({
///     "test": "Hello, world!",
///     "subobj": {"subarray": [1, 2, 3]}
/// });
/// let q = Query::new(&doc).unwrap();
///
/// assert_eq!(q.get_string("test").unwrap(), "Hello, world!");
///
/// // path string and explicit segment list are equivalent
/// assert_eq!(q.get_i64("subobj.subarray[1]").unwrap(), 2);
/// assert_eq!(q.get_i64(["subobj", "subarray", "1"]).unwrap(), 2);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Query<'a> {
    root: &'a Value,
    fail_fast: bool,
}

impl<'a> Query<'a> {
    /// Create a query over a decoded document.
    ///
    /// The root must be an object; anything else is rejected immediately
    /// with a [`TypeMismatch`](TreeqError::TypeMismatch) at the root path.
    pub fn new(root: &'a Value) -> TreeqResult<Self> {
        match root {
            Value::Object(_) => Ok(Self {
                root,
                fail_fast: true,
            }),
            other => Err(TreeqError::type_mismatch(
                Path::root(),
                "object",
                value_type_name(other),
            )),
        }
    }

    /// Set whether `must_*` accessors panic on failure (builder pattern).
    ///
    /// Defaults to `true`. With fail-fast disabled, a failing `must_*` call
    /// returns the target type's zero value instead.
    #[inline]
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Whether `must_*` accessors panic on failure.
    #[inline]
    pub fn fail_fast(&self) -> bool {
        self.fail_fast
    }

    /// The root document this query reads from.
    #[inline]
    pub fn root(&self) -> &'a Value {
        self.root
    }

    // ------------------------------------------------------------------
    // Untyped access
    // ------------------------------------------------------------------

    /// Resolve a path to its raw value.
    pub fn get(&self, path: impl IntoPath) -> TreeqResult<&'a Value> {
        resolve(self.root, &path.into_path())
    }

    /// Resolve a path to its raw value, or panic / return `Value::Null` per
    /// the fail-fast flag.
    pub fn must_get(&self, path: impl IntoPath) -> &'a Value {
        self.settle(self.get(path), || &NULL)
    }

    /// Whether a path resolves to a non-null value.
    ///
    /// True exactly when [`get`](Self::get) would succeed; the error kind is
    /// not revealed.
    pub fn exists(&self, path: impl IntoPath) -> bool {
        self.get(path).is_ok()
    }

    // ------------------------------------------------------------------
    // Scalar and composite accessors
    // ------------------------------------------------------------------

    /// Extract a boolean.
    pub fn get_bool(&self, path: impl IntoPath) -> TreeqResult<bool> {
        self.typed(path, coerce::to_bool)
    }

    /// Extract a boolean, or panic / return `false` per the fail-fast flag.
    pub fn must_bool(&self, path: impl IntoPath) -> bool {
        self.settle(self.get_bool(path), || false)
    }

    /// Extract an integer. Numbers are truncated toward zero; numeric
    /// strings are accepted.
    pub fn get_i64(&self, path: impl IntoPath) -> TreeqResult<i64> {
        self.typed(path, coerce::to_i64)
    }

    /// Extract an integer, or panic / return `0` per the fail-fast flag.
    pub fn must_i64(&self, path: impl IntoPath) -> i64 {
        self.settle(self.get_i64(path), || 0)
    }

    /// Extract a float. Numeric strings are accepted.
    pub fn get_f64(&self, path: impl IntoPath) -> TreeqResult<f64> {
        self.typed(path, coerce::to_f64)
    }

    /// Extract a float, or panic / return `0.0` per the fail-fast flag.
    pub fn must_f64(&self, path: impl IntoPath) -> f64 {
        self.settle(self.get_f64(path), || 0.0)
    }

    /// Extract a string.
    pub fn get_string(&self, path: impl IntoPath) -> TreeqResult<String> {
        self.typed(path, coerce::to_string)
    }

    /// Extract a string, or panic / return `""` per the fail-fast flag.
    pub fn must_string(&self, path: impl IntoPath) -> String {
        self.settle(self.get_string(path), String::new)
    }

    /// Extract an object.
    pub fn get_object(&self, path: impl IntoPath) -> TreeqResult<Map<String, Value>> {
        self.typed(path, coerce::to_object)
    }

    /// Extract an object, or panic / return an empty map per the fail-fast
    /// flag.
    pub fn must_object(&self, path: impl IntoPath) -> Map<String, Value> {
        self.settle(self.get_object(path), Map::new)
    }

    /// Extract an array of raw values.
    pub fn get_array(&self, path: impl IntoPath) -> TreeqResult<Vec<Value>> {
        self.typed(path, coerce::to_array)
    }

    /// Extract an array of raw values, or panic / return an empty vec per
    /// the fail-fast flag.
    pub fn must_array(&self, path: impl IntoPath) -> Vec<Value> {
        self.settle(self.get_array(path), Vec::new)
    }

    // ------------------------------------------------------------------
    // Homogeneous array extractors
    // ------------------------------------------------------------------
    //
    // Each extractor resolves the path to an array and coerces every
    // element in index order, stopping at the first mismatch. The elements
    // converted before the failure ride along in the error.

    /// Extract an array of integers.
    pub fn get_ints(&self, path: impl IntoPath) -> ArrayResult<i64> {
        self.extract(path, coerce::to_i64)
    }

    /// Extract an array of integers, or panic / return an empty vec per the
    /// fail-fast flag.
    pub fn must_ints(&self, path: impl IntoPath) -> Vec<i64> {
        self.settle(self.get_ints(path), Vec::new)
    }

    /// Extract an array of floats.
    pub fn get_floats(&self, path: impl IntoPath) -> ArrayResult<f64> {
        self.extract(path, coerce::to_f64)
    }

    /// Extract an array of floats, or panic / return an empty vec per the
    /// fail-fast flag.
    pub fn must_floats(&self, path: impl IntoPath) -> Vec<f64> {
        self.settle(self.get_floats(path), Vec::new)
    }

    /// Extract an array of strings.
    pub fn get_strings(&self, path: impl IntoPath) -> ArrayResult<String> {
        self.extract(path, coerce::to_string)
    }

    /// Extract an array of strings, or panic / return an empty vec per the
    /// fail-fast flag.
    pub fn must_strings(&self, path: impl IntoPath) -> Vec<String> {
        self.settle(self.get_strings(path), Vec::new)
    }

    /// Extract an array of booleans.
    pub fn get_bools(&self, path: impl IntoPath) -> ArrayResult<bool> {
        self.extract(path, coerce::to_bool)
    }

    /// Extract an array of booleans, or panic / return an empty vec per the
    /// fail-fast flag.
    pub fn must_bools(&self, path: impl IntoPath) -> Vec<bool> {
        self.settle(self.get_bools(path), Vec::new)
    }

    /// Extract an array of objects.
    pub fn get_objects(&self, path: impl IntoPath) -> ArrayResult<Map<String, Value>> {
        self.extract(path, coerce::to_object)
    }

    /// Extract an array of objects, or panic / return an empty vec per the
    /// fail-fast flag.
    pub fn must_objects(&self, path: impl IntoPath) -> Vec<Map<String, Value>> {
        self.settle(self.get_objects(path), Vec::new)
    }

    /// Extract an array of sub-arrays.
    pub fn get_arrays(&self, path: impl IntoPath) -> ArrayResult<Vec<Value>> {
        self.extract(path, coerce::to_array)
    }

    /// Extract an array of sub-arrays, or panic / return an empty vec per
    /// the fail-fast flag.
    pub fn must_arrays(&self, path: impl IntoPath) -> Vec<Vec<Value>> {
        self.settle(self.get_arrays(path), Vec::new)
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    /// Resolve, then coerce the terminal value.
    fn typed<T>(
        &self,
        path: impl IntoPath,
        conv: impl Fn(&Value, &Path) -> TreeqResult<T>,
    ) -> TreeqResult<T> {
        let path = path.into_path();
        let value = resolve(self.root, &path)?;
        conv(value, &path)
    }

    /// Resolve to an array, then coerce every element in index order.
    fn extract<T: fmt::Debug>(
        &self,
        path: impl IntoPath,
        conv: impl Fn(&Value, &Path) -> TreeqResult<T>,
    ) -> ArrayResult<T> {
        let path = path.into_path();
        let items = resolve(self.root, &path)
            .and_then(|value| match value {
                Value::Array(items) => Ok(items),
                other => Err(TreeqError::type_mismatch(
                    path.clone(),
                    "array",
                    value_type_name(other),
                )),
            })
            .map_err(|source| ArrayError {
                partial: Vec::new(),
                source,
            })?;

        let mut out = Vec::with_capacity(items.len());
        for (idx, item) in items.iter().enumerate() {
            let elem_path = path.with_segment(Seg::Index(idx));
            match conv(item, &elem_path) {
                Ok(value) => out.push(value),
                Err(source) => {
                    return Err(ArrayError {
                        partial: out,
                        source,
                    })
                }
            }
        }
        Ok(out)
    }

    /// Apply the fail-fast policy to a result.
    fn settle<T, E: fmt::Display>(&self, result: Result<T, E>, zero: impl FnOnce() -> T) -> T {
        match result {
            Ok(value) => value,
            Err(err) if self.fail_fast => panic!("treeq: {err}"),
            Err(_) => zero(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_rejects_non_object_root() {
        let doc = json!([1, 2, 3]);
        let err = Query::new(&doc).unwrap_err();
        match err {
            TreeqError::TypeMismatch {
                path,
                expected,
                found,
            } => {
                assert!(path.is_empty());
                assert_eq!(expected, "object");
                assert_eq!(found, "array");
            }
            other => panic!("expected TypeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_typed_accessor_coerces_terminal() {
        let doc = json!({"numstring": "42"});
        let q = Query::new(&doc).unwrap();
        assert_eq!(q.get_i64("numstring").unwrap(), 42);
        // the untyped accessor leaves the raw form alone
        assert_eq!(q.get("numstring").unwrap(), &json!("42"));
    }

    #[test]
    fn test_extract_element_error_carries_index() {
        let doc = json!({"nums": [1, 2, "x"]});
        let q = Query::new(&doc).unwrap();
        let err = q.get_ints("nums").unwrap_err();
        assert_eq!(err.partial, vec![1, 2]);
        match err.source {
            TreeqError::TypeMismatch { path, .. } => {
                assert_eq!(path.to_string(), "$.nums[2]");
            }
            other => panic!("expected TypeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_extract_resolution_error_has_empty_partial() {
        let doc = json!({"nums": [1, 2]});
        let q = Query::new(&doc).unwrap();
        let err = q.get_ints("missing").unwrap_err();
        assert!(err.partial.is_empty());
        assert!(matches!(err.source, TreeqError::KeyNotFound { .. }));
    }

    #[test]
    fn test_extract_non_array_target() {
        let doc = json!({"nums": {"a": 1}});
        let q = Query::new(&doc).unwrap();
        let err = q.get_ints("nums").unwrap_err();
        assert!(err.partial.is_empty());
        assert!(matches!(err.source, TreeqError::TypeMismatch { .. }));
    }

    #[test]
    #[should_panic(expected = "treeq: key \"missing\" not found")]
    fn test_must_panics_when_fail_fast() {
        let doc = json!({"foo": 1});
        let q = Query::new(&doc).unwrap();
        q.must_i64("missing");
    }

    #[test]
    fn test_must_returns_zero_when_lenient() {
        let doc = json!({"foo": 1});
        let q = Query::new(&doc).unwrap().with_fail_fast(false);
        assert_eq!(q.must_i64("missing"), 0);
        assert_eq!(q.must_string("missing"), "");
        assert!(!q.must_bool("missing"));
        assert_eq!(q.must_f64("missing"), 0.0);
        assert!(q.must_object("missing").is_empty());
        assert!(q.must_array("missing").is_empty());
        assert!(q.must_get("missing").is_null());
        assert!(q.must_ints("missing").is_empty());
    }

    #[test]
    fn test_exists() {
        let doc = json!({"foo": 1, "maybe": null});
        let q = Query::new(&doc).unwrap();
        assert!(q.exists("foo"));
        assert!(!q.exists("missing"));
        // a resolved-but-null terminal does not exist
        assert!(!q.exists("maybe"));
    }
}
