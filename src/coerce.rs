//! Coercion of resolved values into concrete Rust types.
//!
//! Each coercer takes a resolved value plus the path it came from (for error
//! context) and either produces the target type or a
//! [`TypeMismatch`](crate::TreeqError::TypeMismatch).
//!
//! The two numeric targets are deliberately lenient: they also accept
//! numeric strings, to tolerate loosely-typed source documents. Every other
//! coercion is strict.

use crate::error::{value_type_name, TreeqError, TreeqResult};
use crate::path::Path;
use serde_json::{Map, Value};

/// Coerce to a boolean. Only `Value::Bool` is accepted.
pub fn to_bool(value: &Value, path: &Path) -> TreeqResult<bool> {
    match value {
        Value::Bool(b) => Ok(*b),
        other => Err(mismatch(path, "boolean", other)),
    }
}

/// Coerce to a float. Accepts a number or a string parseable as a decimal
/// float.
pub fn to_f64(value: &Value, path: &Path) -> TreeqResult<f64> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| mismatch(path, "number", value)),
        Value::String(s) => s
            .parse::<f64>()
            .map_err(|_| mismatch(path, "number", value)),
        other => Err(mismatch(path, "number", other)),
    }
}

/// Coerce to an integer. Accepts a number or a numeric string; fractional
/// values are truncated toward zero.
pub fn to_i64(value: &Value, path: &Path) -> TreeqResult<i64> {
    match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => Ok(i),
            None => n
                .as_f64()
                .map(|f| f as i64)
                .ok_or_else(|| mismatch(path, "number", value)),
        },
        Value::String(s) => s
            .parse::<f64>()
            .map(|f| f as i64)
            .map_err(|_| mismatch(path, "number", value)),
        other => Err(mismatch(path, "number", other)),
    }
}

/// Coerce to a string. Only `Value::String` is accepted.
pub fn to_string(value: &Value, path: &Path) -> TreeqResult<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(mismatch(path, "string", other)),
    }
}

/// Coerce to an object. Only `Value::Object` is accepted.
pub fn to_object(value: &Value, path: &Path) -> TreeqResult<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map.clone()),
        other => Err(mismatch(path, "object", other)),
    }
}

/// Coerce to an array. Only `Value::Array` is accepted.
pub fn to_array(value: &Value, path: &Path) -> TreeqResult<Vec<Value>> {
    match value {
        Value::Array(items) => Ok(items.clone()),
        other => Err(mismatch(path, "array", other)),
    }
}

fn mismatch(path: &Path, expected: &'static str, found: &Value) -> TreeqError {
    TreeqError::type_mismatch(path.clone(), expected, value_type_name(found))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path;
    use serde_json::json;

    #[test]
    fn test_to_bool() {
        let p = path!("b");
        assert!(to_bool(&json!(true), &p).unwrap());
        assert!(!to_bool(&json!(false), &p).unwrap());
        assert!(to_bool(&json!(1), &p).is_err());
        assert!(to_bool(&json!("true"), &p).is_err());
    }

    #[test]
    fn test_to_f64() {
        let p = path!("f");
        assert_eq!(to_f64(&json!(123.1), &p).unwrap(), 123.1);
        assert_eq!(to_f64(&json!(2), &p).unwrap(), 2.0);
        assert_eq!(to_f64(&json!("42.1"), &p).unwrap(), 42.1);
        assert!(to_f64(&json!("not a number"), &p).is_err());
        assert!(to_f64(&json!(true), &p).is_err());
    }

    #[test]
    fn test_to_i64() {
        let p = path!("i");
        assert_eq!(to_i64(&json!(42), &p).unwrap(), 42);
        // truncation toward zero
        assert_eq!(to_i64(&json!(42.9), &p).unwrap(), 42);
        assert_eq!(to_i64(&json!(-42.9), &p).unwrap(), -42);
        // numeric strings parse as float, then truncate
        assert_eq!(to_i64(&json!("42"), &p).unwrap(), 42);
        assert_eq!(to_i64(&json!("42.1"), &p).unwrap(), 42);
        assert!(to_i64(&json!("x42"), &p).is_err());
    }

    #[test]
    fn test_to_string_strict() {
        let p = path!("s");
        assert_eq!(to_string(&json!("hello"), &p).unwrap(), "hello");
        // no number-to-string leniency
        assert!(to_string(&json!(42), &p).is_err());
    }

    #[test]
    fn test_to_object_and_array() {
        let p = path!("x");
        assert_eq!(to_object(&json!({"a": 1}), &p).unwrap().len(), 1);
        assert!(to_object(&json!([1]), &p).is_err());
        assert_eq!(to_array(&json!([1, 2]), &p).unwrap().len(), 2);
        assert!(to_array(&json!({"a": 1}), &p).is_err());
    }

    #[test]
    fn test_mismatch_context() {
        let err = to_i64(&json!("nope"), &path!("nums", 2)).unwrap_err();
        match err {
            TreeqError::TypeMismatch {
                path,
                expected,
                found,
            } => {
                assert_eq!(path, path!("nums", 2));
                assert_eq!(expected, "number");
                assert_eq!(found, "string");
            }
            other => panic!("expected TypeMismatch, got {other:?}"),
        }
    }
}
