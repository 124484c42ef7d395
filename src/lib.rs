//! Typed, path-based queries over decoded JSON documents.
//!
//! `treeq` pulls scalar and composite values out of an already-decoded
//! [`serde_json::Value`] tree without a static schema and without manual
//! type assertions at every step. A query walks the tree along a path of
//! keys and indices, then coerces the terminal value into the requested
//! type, failing with a structured error when the path or the type does not
//! line up.
//!
//! # Core Concepts
//!
//! - **[`Path`] / [`Seg`]**: a walk from the root, as object keys and array
//!   indices. On the string surface a token that parses as a non-negative
//!   integer is *always* an index, so object keys that look like integers
//!   are unreachable by design.
//! - **[`resolve`]**: the read-only walk itself, returning the terminal
//!   value or the first failure.
//! - **[`Query`]**: the typed façade; one fallible `get_*` / convenience
//!   `must_*` pair per supported type, plus homogeneous array extractors
//!   and an existence check.
//! - **[`TreeqError`]**: a closed error taxonomy carrying the failing path
//!   prefix and expected/actual type names, so callers branch on kind
//!   instead of parsing messages.
//!
//! # Quick Start
//!
//! ```
//! use treeq::Query;
//! use serde_json::json;
//!
//! let doc = json!({
//!     "foo": 1,
//!     "test": "Hello, world!",
//!     "subobj": {
//!         "subarray": [1, 2, 3],
//!         "subsubobj": {"array": ["hello", "world"]}
//!     }
//! });
//!
//! let q = Query::new(&doc).unwrap();
//!
//! // dotted path string and explicit segments are equivalent
//! assert_eq!(q.get_i64("subobj.subarray[1]").unwrap(), 2);
//! assert_eq!(q.get_i64(["subobj", "subarray", "1"]).unwrap(), 2);
//!
//! assert_eq!(q.get_string("subobj.subsubobj.array[0]").unwrap(), "hello");
//! assert!(q.exists("foo"));
//!
//! // numeric coercion tolerates numeric strings
//! let doc = json!({"answer": "42"});
//! let q = Query::new(&doc).unwrap();
//! assert_eq!(q.get_i64("answer").unwrap(), 42);
//! ```
//!
//! # Fail-fast vs. lenient
//!
//! `must_*` accessors panic with the underlying error by default. Disable
//! fail-fast to get the type's zero value instead:
//!
//! ```
//! use treeq::Query;
//! use serde_json::json;
//!
//! let doc = json!({"foo": 1});
//! let q = Query::new(&doc).unwrap().with_fail_fast(false);
//! assert_eq!(q.must_i64("missing"), 0);
//! ```
//!
//! The crate never mutates the tree it reads; every accessor is a pure
//! function of `(document, path)`.

mod coerce;
mod error;
mod path;
mod query;
mod resolve;

pub use error::{value_type_name, ArrayError, ArrayResult, TreeqError, TreeqResult};
pub use path::{IntoPath, Path, Seg};
pub use query::Query;
pub use resolve::resolve;

// Re-export the document types for convenience
pub use serde_json::{Map, Value};
