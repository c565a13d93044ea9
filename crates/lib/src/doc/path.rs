//! Path types for hierarchical document access.
//!
//! This module provides type-safe path construction and validation for
//! addressing nested structures in documents. The Path/PathBuf types follow
//! the same borrowed/owned pattern as std::path::Path/PathBuf.
//!
//! # Core Types
//!
//! - [`Path`] - An unsized borrowed path type (always behind a reference)
//! - [`PathBuf`] - An owned path type that can be constructed and modified
//! - [`Component`] - A single validated path segment
//! - [`Segment`] - A raw address element before normalization
//!
//! # Usage
//!
//! ```rust
//! use trellis::doc::{Path, PathBuf};
//! use std::str::FromStr;
//!
//! // Construct from string (automatically normalized)
//! let path = PathBuf::from_str("user.profile.name")?;
//!
//! // Build incrementally (infallible)
//! let path = PathBuf::new()
//!     .push("user")
//!     .push("profile")
//!     .push("name");
//! # Ok::<(), std::convert::Infallible>(())
//! ```

use std::{borrow::Borrow, fmt, ops::Deref, str::FromStr};

use percent_encoding::{NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use thiserror::Error;

use super::Doc;

/// The delimiter separating path components in string form.
pub const DELIMITER: char = '.';

/// Error type for path validation and segment decoding failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    /// Invalid component: components cannot contain the delimiter.
    #[error("Invalid component '{component}': {reason}")]
    InvalidComponent { component: String, reason: String },

    /// A segment kind that cannot form a path component.
    #[error("Segment of kind '{kind}' cannot be used as a path component")]
    UnaddressableSegment { kind: &'static str },

    /// Malformed percent-encoded segment during URI decode.
    #[error("Failed to decode segment '{segment}': {reason}")]
    DecodingError { segment: String, reason: String },
}

impl From<PathError> for crate::Error {
    fn from(err: PathError) -> Self {
        crate::Error::Path(err)
    }
}

/// Normalizes a path string by cleaning up delimiters and empty components.
///
/// - Empty string "" → empty string (refers to the root)
/// - Leading dots ".user" → "user"
/// - Trailing dots "user." → "user"
/// - Consecutive dots "user..profile" → "user.profile"
/// - Pure dots "..." → empty string
///
/// # Examples
///
/// ```rust
/// # use trellis::doc::path::normalize_path;
/// assert_eq!(normalize_path(""), "");
/// assert_eq!(normalize_path(".user"), "user");
/// assert_eq!(normalize_path("user..profile"), "user.profile");
/// assert_eq!(normalize_path("..."), "");
/// ```
pub fn normalize_path(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    input
        .split(DELIMITER)
        .filter(|component| !component.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}

/// A raw address element before normalization.
///
/// Addresses arrive as sequences of heterogeneous values. Normalization maps
/// the primitive kinds (`Text`, `Int`, `Bool`) to their string form, while
/// `Composite` and `Absent` elements pass through unchanged. Only normalized
/// `Text` segments can become path components; the other kinds are reported
/// as [`PathError::UnaddressableSegment`] when used for addressing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A string segment, usable as a path component once normalized.
    Text(String),
    /// An integer segment; normalizes to its decimal string form.
    Int(i64),
    /// A boolean segment; normalizes to "true"/"false".
    Bool(bool),
    /// A composite (non-primitive) value; passes through normalization unchanged.
    Composite(Doc),
    /// The absent-value marker; passes through normalization unchanged.
    Absent,
}

impl Segment {
    /// Normalizes this segment: primitives are stringified, composite and
    /// absent values are returned unchanged.
    pub fn normalize(self) -> Segment {
        match self {
            Segment::Int(n) => Segment::Text(n.to_string()),
            Segment::Bool(b) => Segment::Text(b.to_string()),
            other => other,
        }
    }

    /// Returns the kind name of this segment.
    pub fn kind(&self) -> &'static str {
        match self {
            Segment::Text(_) => "text",
            Segment::Int(_) => "int",
            Segment::Bool(_) => "bool",
            Segment::Composite(_) => "composite",
            Segment::Absent => "absent",
        }
    }

    /// Returns the segment text if this is a `Text` segment.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Segment::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for Segment {
    fn from(value: &str) -> Self {
        Segment::Text(value.to_string())
    }
}

impl From<String> for Segment {
    fn from(value: String) -> Self {
        Segment::Text(value)
    }
}

impl From<i64> for Segment {
    fn from(value: i64) -> Self {
        Segment::Int(value)
    }
}

impl From<bool> for Segment {
    fn from(value: bool) -> Self {
        Segment::Bool(value)
    }
}

/// Normalizes a sequence of raw segments.
///
/// Primitive segments are converted to their string form; composite and
/// absent segments pass through unchanged. Order and count are preserved.
///
/// # Examples
///
/// ```rust
/// # use trellis::doc::path::Segment;
/// # use trellis::doc::path::normalize_segments;
/// let raw = vec![Segment::from("foo"), Segment::from(5), Segment::from(true)];
/// let normalized = normalize_segments(raw);
/// assert_eq!(
///     normalized,
///     vec![
///         Segment::Text("foo".into()),
///         Segment::Text("5".into()),
///         Segment::Text("true".into()),
///     ]
/// );
/// ```
pub fn normalize_segments(segments: impl IntoIterator<Item = Segment>) -> Vec<Segment> {
    segments.into_iter().map(Segment::normalize).collect()
}

/// Percent-encodes each raw string segment independently.
///
/// Used when segments may contain the delimiter or other reserved characters.
/// Order and count of segments are preserved.
pub fn encode_segments<S: AsRef<str>>(segments: &[S]) -> Vec<String> {
    segments
        .iter()
        .map(|s| utf8_percent_encode(s.as_ref(), NON_ALPHANUMERIC).to_string())
        .collect()
}

/// Percent-decodes each string segment independently.
///
/// Order and count of segments are preserved. Malformed or non-reversible
/// percent-sequences fail with [`PathError::DecodingError`].
pub fn decode_segments<S: AsRef<str>>(segments: &[S]) -> Result<Vec<String>, PathError> {
    segments.iter().map(|s| decode_segment(s.as_ref())).collect()
}

fn decode_segment(segment: &str) -> Result<String, PathError> {
    // percent_decode passes malformed sequences through untouched, so every
    // '%' must be checked for two trailing hex digits up front.
    let bytes = segment.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = matches!(
                (bytes.get(i + 1), bytes.get(i + 2)),
                (Some(hi), Some(lo)) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit()
            );
            if !valid {
                return Err(PathError::DecodingError {
                    segment: segment.to_string(),
                    reason: "malformed percent-encoded sequence".to_string(),
                });
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    percent_decode_str(segment)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|e| PathError::DecodingError {
            segment: segment.to_string(),
            reason: e.to_string(),
        })
}

/// A validated component of a path.
///
/// Components are individual parts of a path, separated by dots. They cannot
/// contain dots themselves. Empty components are allowed but will be filtered
/// during path normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Component {
    inner: String,
}

impl Component {
    /// Creates a new component from a string.
    ///
    /// # Errors
    /// Returns an error only if the component contains a dot. Empty components
    /// are allowed and will be filtered during path normalization.
    pub fn new(s: impl Into<String>) -> Result<Self, PathError> {
        let s = s.into();

        if s.contains(DELIMITER) {
            return Err(PathError::InvalidComponent {
                component: s.clone(),
                reason: "components cannot contain dots".to_string(),
            });
        }

        Ok(Component { inner: s })
    }

    /// Returns the component as a string slice.
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl AsRef<str> for Component {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl FromStr for Component {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Component::new(s)
    }
}

impl TryFrom<String> for Component {
    type Error = PathError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Component::new(s)
    }
}

impl TryFrom<&str> for Component {
    type Error = PathError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Component::new(s)
    }
}

impl serde::Serialize for Component {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.inner)
    }
}

impl<'de> serde::Deserialize<'de> for Component {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Component::new(s).map_err(serde::de::Error::custom)
    }
}

/// An owned, normalized path for hierarchical document access.
///
/// `PathBuf` provides a type-safe way to construct and manipulate paths for
/// addressing nested structures. Paths are immutable once built; every
/// mutating-looking operation consumes and returns the buffer.
///
/// # Examples
///
/// ```rust
/// # use trellis::doc::PathBuf;
/// # use std::str::FromStr;
/// // Create from string (automatically normalized)
/// let path = PathBuf::from_str("user.profile.name")?;
///
/// // Get components
/// let components: Vec<&str> = path.components().collect();
/// assert_eq!(components, vec!["user", "profile", "name"]);
/// # Ok::<(), std::convert::Infallible>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PathBuf {
    inner: String,
}

/// A borrowed, normalized path for hierarchical document access.
///
/// `Path` is the borrowed counterpart to `PathBuf`, similar to how `&str`
/// relates to `String`. It provides read-only access to path components
/// without allocation.
///
/// This type is unsized and must always be used behind a reference.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Path {
    inner: str,
}

impl PathBuf {
    /// Creates a new empty path.
    pub fn new() -> Self {
        Self {
            inner: String::new(),
        }
    }

    /// Creates a path from a single component.
    pub fn from_component(component: Component) -> Self {
        Self {
            inner: component.inner,
        }
    }

    /// Creates a PathBuf from a sequence of raw segments.
    ///
    /// The segments are normalized first; every normalized segment must be a
    /// `Text` segment to become a path component.
    ///
    /// # Errors
    /// Returns [`PathError::UnaddressableSegment`] if a composite or absent
    /// segment appears in the sequence.
    pub fn from_segments(
        segments: impl IntoIterator<Item = Segment>,
    ) -> Result<Self, PathError> {
        let mut path = PathBuf::new();
        for segment in segments {
            match segment.normalize() {
                Segment::Text(text) => {
                    path = path.push(&text);
                }
                other => {
                    return Err(PathError::UnaddressableSegment { kind: other.kind() });
                }
            }
        }
        Ok(path)
    }

    /// Adds a path to the end of this path.
    ///
    /// This method accepts both strings and Path types, normalizing the input.
    /// It is infallible and handles all path joining cases through
    /// normalization.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use trellis::doc::PathBuf;
    /// let path = PathBuf::new().push("user").push("profile");
    /// assert_eq!(path.as_str(), "user.profile");
    /// ```
    pub fn push(mut self, path: impl AsRef<str>) -> Self {
        let normalized = normalize_path(path.as_ref());
        if normalized.is_empty() {
            return self;
        }

        if self.inner.is_empty() {
            self.inner = normalized;
        } else {
            self.inner.push(DELIMITER);
            self.inner.push_str(&normalized);
        }
        self
    }

    /// Adds a validated component to the end of this path.
    pub fn push_component(mut self, component: Component) -> Self {
        if component.inner.is_empty() {
            return self;
        }
        if self.inner.is_empty() {
            self.inner = component.inner;
        } else {
            self.inner.push(DELIMITER);
            self.inner.push_str(&component.inner);
        }
        self
    }

    /// Joins this path with another path.
    pub fn join(mut self, other: impl AsRef<Path>) -> Self {
        let other_path = other.as_ref();
        if self.inner.is_empty() {
            self.inner = other_path.inner.to_string();
        } else if !other_path.inner.is_empty() {
            self.inner.push(DELIMITER);
            self.inner.push_str(&other_path.inner);
        }
        self
    }

    /// Returns an iterator over the path components as string slices.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.inner.split(DELIMITER).filter(|s| !s.is_empty())
    }

    /// Returns the number of components in the path.
    pub fn len(&self) -> usize {
        if self.inner.is_empty() {
            0
        } else {
            self.inner.split(DELIMITER).count()
        }
    }

    /// Returns `true` if the path has no components.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the parent path, or `None` if the path has at most one
    /// component.
    pub fn parent(&self) -> Option<PathBuf> {
        self.inner.rfind(DELIMITER).map(|last_dot| PathBuf {
            inner: self.inner[..last_dot].to_string(),
        })
    }

    /// Returns the last component of the path, or `None` if empty.
    pub fn file_name(&self) -> Option<&str> {
        if self.inner.is_empty() {
            None
        } else {
            self.inner.split(DELIMITER).next_back()
        }
    }

    /// Creates a PathBuf by normalizing the input string.
    ///
    /// This method always succeeds by applying path normalization rules.
    pub fn normalize(path: &str) -> Self {
        PathBuf {
            inner: normalize_path(path),
        }
    }
}

impl Path {
    /// Creates a Path from a string without validation.
    ///
    /// # Safety
    /// The caller must ensure that the string is already normalized:
    /// no leading or trailing dots, no empty components, and components
    /// may not contain dots.
    pub unsafe fn from_str_unchecked(s: &str) -> &Path {
        // SAFETY: Path has the same memory layout as str
        unsafe { &*(s as *const str as *const Path) }
    }

    /// Returns an iterator over the path components as string slices.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.inner.split(DELIMITER).filter(|s| !s.is_empty())
    }

    /// Returns the number of components in the path.
    pub fn len(&self) -> usize {
        if self.inner.is_empty() {
            0
        } else {
            self.inner.split(DELIMITER).count()
        }
    }

    /// Returns `true` if the path has no components.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the last component of the path, or `None` if empty.
    pub fn file_name(&self) -> Option<&str> {
        if self.inner.is_empty() {
            None
        } else {
            self.inner.split(DELIMITER).next_back()
        }
    }

    /// Returns the path as a string slice in delimiter-joined form.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Converts this `Path` to an owned `PathBuf`.
    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf {
            inner: self.inner.to_string(),
        }
    }
}

impl Default for PathBuf {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for PathBuf {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        // Safe because PathBuf contents are normalized on construction
        unsafe { Path::from_str_unchecked(self.inner.as_str()) }
    }
}

impl AsRef<Path> for PathBuf {
    fn as_ref(&self) -> &Path {
        self.deref()
    }
}

impl AsRef<Path> for Path {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl AsRef<str> for PathBuf {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl AsRef<Path> for str {
    fn as_ref(&self) -> &Path {
        // Un-normalized input is tolerated here: consumers resolve paths
        // through components(), which filters empty components.
        unsafe { Path::from_str_unchecked(self) }
    }
}

impl AsRef<Path> for String {
    fn as_ref(&self) -> &Path {
        self.as_str().as_ref()
    }
}

impl Borrow<Path> for PathBuf {
    fn borrow(&self) -> &Path {
        self.deref()
    }
}

impl FromStr for PathBuf {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::normalize(s))
    }
}

impl From<&Path> for PathBuf {
    fn from(path: &Path) -> Self {
        path.to_path_buf()
    }
}

impl From<&PathBuf> for PathBuf {
    fn from(path: &PathBuf) -> Self {
        path.clone()
    }
}

impl fmt::Display for PathBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inner.is_empty() {
            write!(f, "(empty path)")
        } else {
            write!(f, "{}", self.inner)
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inner.is_empty() {
            write!(f, "(empty path)")
        } else {
            write!(f, "{}", &self.inner)
        }
    }
}

impl serde::Serialize for PathBuf {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.inner)
    }
}

impl<'de> serde::Deserialize<'de> for PathBuf {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(PathBuf::normalize(&s))
    }
}

/// Constructs a path from any number of displayable parts.
///
/// # Syntax
///
/// - `path!()` - Empty path
/// - `path!("user.profile.name")` - Single dotted string
/// - `path!("user", "profile", "name")` - Multiple components
/// - `path!(base, "profile", 0)` - Mix runtime values and literals
///
/// # Examples
///
/// ```rust
/// # use trellis::path;
/// let path = path!("user", "profile", "name");
/// assert_eq!(path.as_str(), "user.profile.name");
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::doc::PathBuf::new()
    };

    ($($part:expr),+ $(,)?) => {{
        let mut path = $crate::doc::PathBuf::new();
        $(
            path = path.push($part.to_string());
        )+
        path
    }};
}
