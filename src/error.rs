//! Error types for treeq operations.

use crate::Path;
use thiserror::Error;

/// Result type alias for treeq operations.
pub type TreeqResult<T> = Result<T, TreeqError>;

/// Errors that can occur while resolving a path or coercing a value.
///
/// Resolver errors carry the prefix of the query path up to and including
/// the segment that failed, so callers can report exactly where a walk
/// stopped.
#[derive(Debug, Error)]
pub enum TreeqError {
    /// An index segment was applied to a value that is not an array.
    #[error("cannot index into {found} at {path}")]
    IndexOnNonArray {
        /// Path up to and including the failing index segment.
        path: Path,
        /// The actual type found.
        found: &'static str,
    },

    /// A key segment was applied to a value that is not an object.
    #[error("cannot look up key in {found} at {path}")]
    KeyOnNonObject {
        /// Path up to and including the failing key segment.
        path: Path,
        /// The actual type found.
        found: &'static str,
    },

    /// Array index is out of bounds.
    #[error("index {index} out of bounds (len: {len}) at {path}")]
    IndexOutOfBounds {
        /// Path up to and including the failing index segment.
        path: Path,
        /// The index that was accessed.
        index: usize,
        /// The actual length of the array.
        len: usize,
    },

    /// Object lacks the requested key.
    #[error("key \"{key}\" not found at {path}")]
    KeyNotFound {
        /// Path up to and including the missing key segment.
        path: Path,
        /// The key that was looked up.
        key: String,
    },

    /// The full path resolved, but the terminal value is null.
    #[error("null value at {path}")]
    NullValue {
        /// The fully resolved path.
        path: Path,
    },

    /// The resolved value's type is incompatible with the requested target.
    #[error("type mismatch at {path}: expected {expected}, found {found}")]
    TypeMismatch {
        /// The path where the mismatch occurred.
        path: Path,
        /// The expected type.
        expected: &'static str,
        /// The actual type found.
        found: &'static str,
    },
}

impl TreeqError {
    /// Create an index-on-non-array error.
    #[inline]
    pub fn index_on_non_array(path: Path, found: &'static str) -> Self {
        TreeqError::IndexOnNonArray { path, found }
    }

    /// Create a key-on-non-object error.
    #[inline]
    pub fn key_on_non_object(path: Path, found: &'static str) -> Self {
        TreeqError::KeyOnNonObject { path, found }
    }

    /// Create an index out of bounds error.
    #[inline]
    pub fn index_out_of_bounds(path: Path, index: usize, len: usize) -> Self {
        TreeqError::IndexOutOfBounds { path, index, len }
    }

    /// Create a key not found error.
    #[inline]
    pub fn key_not_found(path: Path, key: impl Into<String>) -> Self {
        TreeqError::KeyNotFound {
            path,
            key: key.into(),
        }
    }

    /// Create a null value error.
    #[inline]
    pub fn null_value(path: Path) -> Self {
        TreeqError::NullValue { path }
    }

    /// Create a type mismatch error.
    #[inline]
    pub fn type_mismatch(path: Path, expected: &'static str, found: &'static str) -> Self {
        TreeqError::TypeMismatch {
            path,
            expected,
            found,
        }
    }
}

/// Error from a homogeneous array extraction.
///
/// Extraction stops at the first element that fails to coerce; the elements
/// converted before that point are observable here, in document order. When
/// the path itself fails to resolve, `partial` is empty.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct ArrayError<T: std::fmt::Debug> {
    /// Elements successfully converted before the failure.
    pub partial: Vec<T>,
    /// The underlying resolution or element coercion error.
    #[source]
    pub source: TreeqError,
}

/// Result type alias for homogeneous array extraction.
pub type ArrayResult<T> = Result<Vec<T>, ArrayError<T>>;

/// Get the type name of a JSON value.
#[inline]
pub fn value_type_name(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path;

    #[test]
    fn test_error_display() {
        let err = TreeqError::key_not_found(path!("users", 0, "name"), "name");
        assert_eq!(err.to_string(), "key \"name\" not found at $.users[0].name");

        let err = TreeqError::index_out_of_bounds(path!("items", 5), 5, 3);
        assert_eq!(err.to_string(), "index 5 out of bounds (len: 3) at $.items[5]");

        let err = TreeqError::null_value(path!("a", "b"));
        assert_eq!(err.to_string(), "null value at $.a.b");
    }

    #[test]
    fn test_array_error_display_and_partial() {
        let err = ArrayError {
            partial: vec![1i64, 2],
            source: TreeqError::type_mismatch(path!("nums", 2), "number", "string"),
        };
        assert_eq!(err.partial, vec![1, 2]);
        assert_eq!(
            err.to_string(),
            "type mismatch at $.nums[2]: expected number, found string"
        );
    }

    #[test]
    fn test_value_type_name() {
        use serde_json::json;

        assert_eq!(value_type_name(&json!(null)), "null");
        assert_eq!(value_type_name(&json!(true)), "boolean");
        assert_eq!(value_type_name(&json!(42)), "number");
        assert_eq!(value_type_name(&json!("hello")), "string");
        assert_eq!(value_type_name(&json!([1, 2, 3])), "array");
        assert_eq!(value_type_name(&json!({"a": 1})), "object");
    }
}
