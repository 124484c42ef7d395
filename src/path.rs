//! Path representation for navigating a decoded JSON document.
//!
//! Paths are sequences of segments that describe a walk from the root of a
//! document to a target node. Each segment is either a key (for objects) or
//! an index (for arrays).
//!
//! On the string surface, a token that parses as a non-negative decimal
//! integer is always an index: `"items"` names an object key, `"2"` names
//! array position 2, and an object key that happens to look like `"2"` is
//! unreachable. This is deliberate and matches the documented query surface.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single segment in a path.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seg {
    /// Object key access: `{"key": value}`
    Key(String),
    /// Array index access: `[index]`
    Index(usize),
}

impl Seg {
    /// Create a key segment.
    ///
    /// Unlike the `From<&str>` conversion this never reclassifies: the
    /// argument becomes a key even if it is all digits. Paths built this way
    /// sit outside the string query surface.
    #[inline]
    pub fn key(k: impl Into<String>) -> Self {
        Seg::Key(k.into())
    }

    /// Create an index segment.
    #[inline]
    pub fn index(i: usize) -> Self {
        Seg::Index(i)
    }

    /// Returns true if this is a key segment.
    #[inline]
    pub fn is_key(&self) -> bool {
        matches!(self, Seg::Key(_))
    }

    /// Returns true if this is an index segment.
    #[inline]
    pub fn is_index(&self) -> bool {
        matches!(self, Seg::Index(_))
    }

    /// Get the key if this is a key segment.
    #[inline]
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Seg::Key(k) => Some(k),
            Seg::Index(_) => None,
        }
    }

    /// Get the index if this is an index segment.
    #[inline]
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Seg::Key(_) => None,
            Seg::Index(i) => Some(*i),
        }
    }
}

impl fmt::Display for Seg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seg::Key(k) => write!(f, ".{}", k),
            Seg::Index(i) => write!(f, "[{}]", i),
        }
    }
}

impl From<&str> for Seg {
    /// Classify a raw token: a non-negative decimal integer becomes an
    /// index, anything else a key.
    fn from(s: &str) -> Self {
        match s.parse::<usize>() {
            Ok(i) => Seg::Index(i),
            Err(_) => Seg::Key(s.to_owned()),
        }
    }
}

impl From<String> for Seg {
    fn from(s: String) -> Self {
        match s.parse::<usize>() {
            Ok(i) => Seg::Index(i),
            Err(_) => Seg::Key(s),
        }
    }
}

impl From<usize> for Seg {
    fn from(i: usize) -> Self {
        Seg::Index(i)
    }
}

/// A complete path into a JSON structure.
///
/// Paths are immutable sequences of segments. Use builder methods to
/// construct paths incrementally, or [`Path::parse`] for the dotted string
/// form.
///
/// # Examples
///
/// ```
/// use treeq::Path;
///
/// let path = Path::root().key("users").index(0).key("name");
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.to_string(), "$.users[0].name");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Path(Vec<Seg>);

impl Path {
    /// Create an empty path (root).
    #[inline]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Create an empty path (alias for `new`).
    #[inline]
    pub fn root() -> Self {
        Self::new()
    }

    /// Create a path from a vector of segments.
    #[inline]
    pub fn from_segments(segments: Vec<Seg>) -> Self {
        Self(segments)
    }

    /// Parse a dotted/bracketed path string.
    ///
    /// The string is split on runs of `.`, `[`, and `]`; empty tokens from
    /// adjacent delimiters are discarded, and each surviving token is
    /// classified (`"2"` is an index, `"name"` a key).
    ///
    /// # Examples
    ///
    /// ```
    /// use treeq::{path, Path};
    ///
    /// assert_eq!(Path::parse("subobj.subarray[1]"), path!("subobj", "subarray", 1));
    /// assert_eq!(Path::parse("a..b[0]"), path!("a", "b", 0));
    /// ```
    pub fn parse(raw: &str) -> Self {
        raw.split(['.', '[', ']'])
            .filter(|token| !token.is_empty())
            .map(Seg::from)
            .collect()
    }

    /// Append a key segment and return self (builder pattern).
    #[inline]
    pub fn key(mut self, k: impl Into<String>) -> Self {
        self.0.push(Seg::Key(k.into()));
        self
    }

    /// Append an index segment and return self (builder pattern).
    #[inline]
    pub fn index(mut self, i: usize) -> Self {
        self.0.push(Seg::Index(i));
        self
    }

    /// Push a segment onto the path (mutating).
    #[inline]
    pub fn push(&mut self, seg: Seg) {
        self.0.push(seg);
    }

    /// Append a segment and return a new path (non-mutating builder).
    #[inline]
    pub fn with_segment(&self, seg: Seg) -> Path {
        let mut result = self.clone();
        result.0.push(seg);
        result
    }

    /// Get the segments of this path.
    #[inline]
    pub fn segments(&self) -> &[Seg] {
        &self.0
    }

    /// Check if this path is empty (root).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of segments in this path.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get the first segment.
    #[inline]
    pub fn first(&self) -> Option<&Seg> {
        self.0.first()
    }

    /// Get the last segment.
    #[inline]
    pub fn last(&self) -> Option<&Seg> {
        self.0.last()
    }

    /// The prefix of this path covering the first `n` segments.
    ///
    /// Used for error reporting: a failure at segment `i` carries the prefix
    /// up to and including `i`.
    #[inline]
    pub fn prefix(&self, n: usize) -> Path {
        Path(self.0[..n].to_vec())
    }

    /// Iterate over the segments.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Seg> {
        self.0.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$")?;
        for seg in &self.0 {
            write!(f, "{}", seg)?;
        }
        Ok(())
    }
}

impl FromIterator<Seg> for Path {
    fn from_iter<I: IntoIterator<Item = Seg>>(iter: I) -> Self {
        Path(iter.into_iter().collect())
    }
}

impl IntoIterator for Path {
    type Item = Seg;
    type IntoIter = std::vec::IntoIter<Seg>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Seg;
    type IntoIter = std::slice::Iter<'a, Seg>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::ops::Index<usize> for Path {
    type Output = Seg;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

/// Conversion into a [`Path`] at the query surface.
///
/// Two equivalent surface forms are accepted:
///
/// - a single string: split with [`Path::parse`] when it contains any of
///   `.`, `[`, `]`, otherwise taken as one bare classified token;
/// - an explicit segment list (slice, array, or `Vec` of tokens): each token
///   is classified but never split — unless the list has exactly one
///   element, in which case the single-string rule applies.
///
/// In every form, a token that parses as a non-negative integer is an array
/// index, never an object key.
pub trait IntoPath {
    /// Convert into a path.
    fn into_path(self) -> Path;
}

impl IntoPath for Path {
    #[inline]
    fn into_path(self) -> Path {
        self
    }
}

impl IntoPath for &Path {
    #[inline]
    fn into_path(self) -> Path {
        self.clone()
    }
}

impl IntoPath for &str {
    fn into_path(self) -> Path {
        if self.contains(['.', '[', ']']) {
            Path::parse(self)
        } else {
            Path::from_segments(vec![Seg::from(self)])
        }
    }
}

impl IntoPath for &String {
    #[inline]
    fn into_path(self) -> Path {
        self.as_str().into_path()
    }
}

impl IntoPath for String {
    #[inline]
    fn into_path(self) -> Path {
        self.as_str().into_path()
    }
}

impl IntoPath for &[&str] {
    fn into_path(self) -> Path {
        match self {
            [single] => single.into_path(),
            tokens => tokens.iter().map(|t| Seg::from(*t)).collect(),
        }
    }
}

impl<const N: usize> IntoPath for [&str; N] {
    #[inline]
    fn into_path(self) -> Path {
        self.as_slice().into_path()
    }
}

impl<const N: usize> IntoPath for &[&str; N] {
    #[inline]
    fn into_path(self) -> Path {
        self.as_slice().into_path()
    }
}

impl IntoPath for Vec<&str> {
    #[inline]
    fn into_path(self) -> Path {
        self.as_slice().into_path()
    }
}

/// Construct a [`Path`] from a sequence of segments.
///
/// String expressions are classified (digit-only strings become indices),
/// integer expressions become indices.
///
/// # Examples
///
/// ```
/// use treeq::path;
///
/// let p = path!("users", 0, "name");
/// assert_eq!(p.to_string(), "$.users[0].name");
///
/// // "1" classifies as an index, same as the literal 1
/// assert_eq!(path!("subarray", "1"), path!("subarray", 1));
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::Path::root()
    };
    ($($seg:expr),+ $(,)?) => {{
        let mut p = $crate::Path::root();
        $(
            p.push($crate::Seg::from($seg));
        )+
        p
    }};
}
