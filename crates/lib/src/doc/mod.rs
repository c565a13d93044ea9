//! Nested key-value documents.
//!
//! This module provides the [`Doc`] type, an arbitrarily nested,
//! heterogeneous key-value structure. Composite nodes contain named children
//! in key-insertion order; leaf nodes hold scalar [`Value`]s. Dot-notation
//! paths address nodes at any depth.
//!
//! # Usage
//!
//! ```
//! use trellis::doc::Doc;
//! use trellis::path;
//!
//! let mut doc = Doc::new();
//! doc.set("name", "Alice");
//! doc.set_path(path!("user.profile.bio"), "Software developer").unwrap();
//!
//! assert_eq!(doc.get_as::<&str>("user.profile.bio"), Some("Software developer"));
//! ```

use std::{fmt, str::FromStr};

use indexmap::IndexMap;

// Submodules
pub mod errors;
pub mod path;
pub mod value;

// Convenience re-exports for core Doc types
pub use errors::DocError;
pub use path::{Path, PathBuf, PathError, Segment};
pub use value::Value;

// Re-export the macro from crate root
pub use crate::path;

/// An arbitrarily nested, heterogeneous key-value structure.
///
/// `Doc` is the node type of the toolkit's tree machinery. Children are kept
/// in key-insertion order, which makes traversal order deterministic.
///
/// # Core Operations
///
/// - **Data access**: `get()`, `get_as()`, `get_doc()`
/// - **Data modification**: `set()`, `set_path()`, `remove()`
/// - **Path operations**: Dot-notation access to nested structures
///
/// # Examples
///
/// ```
/// # use trellis::doc::Doc;
/// let mut doc = Doc::new();
/// doc.set("name", "Alice");
/// doc.set("age", 30);
///
/// assert_eq!(doc.get_as::<&str>("name"), Some("Alice"));
/// assert_eq!(doc.get_as::<i64>("age"), Some(30));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct Doc {
    /// Child nodes indexed by string keys, in insertion order
    children: IndexMap<String, Value>,
}

impl Doc {
    /// Creates a new empty document
    pub fn new() -> Self {
        Self {
            children: IndexMap::new(),
        }
    }

    /// Returns true if this document has no children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of direct keys
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if the document contains the given key or path
    pub fn contains_key(&self, key: impl AsRef<Path>) -> bool {
        self.get(key).is_some()
    }

    /// Gets a value by key or path (immutable reference)
    pub fn get(&self, key: impl AsRef<Path>) -> Option<&Value> {
        let path = key.as_ref();
        let mut segments = path.components();

        let first_segment = segments.next()?;
        let mut current_value = self.children.get(first_segment)?;

        // Navigate through remaining segments
        for segment in segments {
            match current_value {
                Value::Doc(doc) => {
                    current_value = doc.children.get(segment)?;
                }
                _ => return None, // Can't navigate further
            }
        }

        Some(current_value)
    }

    /// Gets a mutable reference to a value by key or path
    pub fn get_mut(&mut self, key: impl AsRef<Path>) -> Option<&mut Value> {
        let path = key.as_ref();
        let segments: Vec<_> = path.components().collect();

        if segments.is_empty() {
            return None;
        }

        let mut current = self;

        // Navigate to the parent of the target
        for segment in &segments[..segments.len() - 1] {
            match current.children.get_mut(*segment) {
                Some(Value::Doc(doc)) => {
                    current = doc;
                }
                _ => return None, // Can't navigate further
            }
        }

        let final_key = segments.last()?;
        current.children.get_mut(*final_key)
    }

    /// Gets a value by key with automatic type conversion using TryFrom
    ///
    /// Returns Some(T) if the value exists and can be converted to type T.
    /// Returns None if the key doesn't exist or type conversion fails.
    ///
    /// # Examples
    ///
    /// ```
    /// # use trellis::doc::Doc;
    /// let mut doc = Doc::new();
    /// doc.set("name", "Alice");
    /// doc.set("age", 30);
    ///
    /// assert_eq!(doc.get_as::<&str>("name"), Some("Alice"));
    /// assert_eq!(doc.get_as::<i64>("age"), Some(30));
    ///
    /// // Returns None when key doesn't exist or type doesn't match
    /// assert_eq!(doc.get_as::<String>("missing"), None);
    /// assert_eq!(doc.get_as::<i64>("name"), None);
    /// ```
    pub fn get_as<'a, T>(&'a self, key: impl AsRef<Path>) -> Option<T>
    where
        T: TryFrom<&'a Value, Error = DocError>,
    {
        let value = self.get(key)?;
        T::try_from(value).ok()
    }

    /// Sets a value at the given key or path, returns the old value if present
    ///
    /// This method automatically creates intermediate nodes for nested paths.
    /// An empty path is silently ignored; use [`Doc::set_path`] for
    /// Result-based error handling.
    pub fn set(&mut self, key: impl AsRef<Path>, value: impl Into<Value>) -> Option<Value> {
        let path_str = key.as_ref().as_str();

        // For simple keys (no dots), use direct assignment
        if !path_str.is_empty() && !path_str.contains(path::DELIMITER) {
            self.children.insert(path_str.to_string(), value.into())
        } else {
            let path_buf = PathBuf::from_str(path_str).unwrap(); // Infallible
            self.set_path(&path_buf, value).unwrap_or_default()
        }
    }

    /// Sets a value at a path, creating intermediate nodes as needed
    ///
    /// Scalar values along the path are replaced by composite nodes to allow
    /// navigation. Returns the previous value at the path, if any.
    ///
    /// # Errors
    /// Returns [`DocError::InvalidPath`] if the path has no components.
    pub fn set_path(
        &mut self,
        path: impl AsRef<Path>,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, DocError> {
        let path = path.as_ref();
        let segments: Vec<_> = path.components().collect();

        if segments.is_empty() {
            return Err(DocError::InvalidPath {
                path: "(empty path)".to_string(),
            });
        }

        let mut current = self;

        // Navigate to the parent, creating intermediate nodes as needed
        for segment in &segments[..segments.len() - 1] {
            let entry = current
                .children
                .entry(segment.to_string())
                .or_insert_with(|| Value::Doc(Doc::new()));
            if !matches!(entry, Value::Doc(_)) {
                // Replace scalar value with a node to allow navigation
                *entry = Value::Doc(Doc::new());
            }
            match entry {
                Value::Doc(doc) => current = doc,
                _ => unreachable!(),
            }
        }

        let final_key = segments.last().unwrap();
        Ok(current.children.insert(final_key.to_string(), value.into()))
    }

    /// Removes a value by key or path, returns the old value if present.
    ///
    /// Remaining siblings keep their insertion order.
    pub fn remove(&mut self, key: impl AsRef<Path>) -> Option<Value> {
        let path = key.as_ref();
        let segments: Vec<_> = path.components().collect();

        let (final_key, parents) = segments.split_last()?;

        let mut current = self;
        for segment in parents {
            match current.children.get_mut(*segment) {
                Some(Value::Doc(doc)) => current = doc,
                _ => return None,
            }
        }

        current.children.shift_remove(*final_key)
    }

    /// Returns an iterator over all key-value pairs in insertion order
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.children.iter()
    }

    /// Returns a mutable iterator over all key-value pairs
    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, String, Value> {
        self.children.iter_mut()
    }

    /// Returns an iterator over all keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.children.keys()
    }

    /// Returns an iterator over all values in insertion order
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.children.values()
    }

    /// Clears all data from this document
    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Get a reference to a nested Doc by key
    pub fn get_doc(&self, key: impl AsRef<Path>) -> Option<&Doc> {
        match self.get(key)? {
            Value::Doc(doc) => Some(doc),
            _ => None,
        }
    }

    /// Get a mutable reference to a nested Doc by key
    pub fn get_doc_mut(&mut self, key: impl AsRef<Path>) -> Option<&mut Doc> {
        match self.get_mut(key)? {
            Value::Doc(doc) => Some(doc),
            _ => None,
        }
    }

    /// Set a key-value pair with automatic JSON serialization for any
    /// Serialize type. The value is stored as a JSON text node.
    pub fn set_json<T>(&mut self, key: impl AsRef<Path>, value: T) -> crate::Result<&mut Self>
    where
        T: serde::Serialize,
    {
        let json = serde_json::to_string(&value).map_err(|e| DocError::SerializationFailed {
            reason: e.to_string(),
        })?;
        self.set(key, Value::Text(json));
        Ok(self)
    }

    /// Get a value by key with automatic JSON deserialization for any
    /// Deserialize type.
    ///
    /// # Errors
    /// Fails with [`DocError::ElementNotFound`] if the key is absent, with
    /// [`DocError::TypeMismatch`] if the node is not a text node, and with
    /// [`DocError::DeserializationFailed`] if the stored text is not valid
    /// JSON for `T`.
    pub fn get_json<T>(&self, key: impl AsRef<Path>) -> crate::Result<T>
    where
        T: for<'de> serde::Deserialize<'de>,
    {
        let key = key.as_ref();
        let value = self.get(key).ok_or_else(|| DocError::ElementNotFound {
            key: key.as_str().to_string(),
        })?;

        match value {
            Value::Text(json) => serde_json::from_str(json).map_err(|e| {
                DocError::DeserializationFailed {
                    reason: format!("failed to deserialize JSON at '{key}': {e}"),
                }
                .into()
            }),
            other => Err(DocError::TypeMismatch {
                expected: "Text (JSON string)".to_string(),
                actual: other.type_name().to_string(),
            }
            .into()),
        }
    }

    /// Converts to a JSON-like string representation for human-readable output.
    pub fn to_json_string(&self) -> String {
        let mut result = String::with_capacity(self.children.len() * 16);
        result.push('{');
        let mut first = true;
        for (key, value) in self.iter() {
            if !first {
                result.push(',');
            }
            result.push_str(&format!("\"{}\":{}", key, value.to_json_string()));
            first = false;
        }
        result.push('}');
        result
    }
}

impl fmt::Display for Doc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (key, value) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
            first = false;
        }
        write!(f, "}}")
    }
}

impl FromIterator<(String, Value)> for Doc {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        let mut doc = Doc::new();
        for (key, value) in iter {
            doc.set(key, value);
        }
        doc
    }
}

// Builder pattern methods
impl Doc {
    /// Builder method to set a value and return self
    pub fn with(mut self, key: impl AsRef<Path>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Builder method to set a boolean value
    pub fn with_bool(self, key: impl AsRef<Path>, value: bool) -> Self {
        self.with(key, Value::Bool(value))
    }

    /// Builder method to set an integer value
    pub fn with_int(self, key: impl AsRef<Path>, value: i64) -> Self {
        self.with(key, Value::Int(value))
    }

    /// Builder method to set a text value
    pub fn with_text(self, key: impl AsRef<Path>, value: impl Into<String>) -> Self {
        self.with(key, Value::Text(value.into()))
    }

    /// Builder method to set a nested Doc
    pub fn with_doc(self, key: impl AsRef<Path>, value: impl Into<Doc>) -> Self {
        self.with(key, Value::Doc(value.into()))
    }
}
