//! Path-addressed tree facade.
//!
//! This module provides the [`Tree`] type, which owns a root nested
//! document, exposes path-addressed read/write/remove, and drives a
//! traversal strategy to answer pattern-based queries.

use crate::doc::{Doc, Path, PathBuf, Value};
use crate::walk::{Step, TreeWalker};

/// A per-level match pattern for [`Tree::query`].
///
/// A pattern sequence matches a visited path when the lengths are equal and
/// every level matches. [`Matcher::Value`] is meaningful only at the final
/// level, where it matches any key whose node equals the given value; at any
/// other level it matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    /// Matches only the given key at this level.
    Key(String),
    /// Matches any key at this level.
    Any,
    /// Final level only: matches any key whose node equals the given value.
    Value(Value),
}

impl From<&str> for Matcher {
    fn from(key: &str) -> Self {
        Matcher::Key(key.to_string())
    }
}

impl From<String> for Matcher {
    fn from(key: String) -> Self {
        Matcher::Key(key)
    }
}

/// One result of a [`Tree::query`]: the matched path and a clone of the node
/// found there.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryMatch {
    /// Path from the root to the matched node.
    pub path: PathBuf,
    /// The matched node.
    pub value: Value,
}

/// Owns a root nested document and exposes path-addressed operations over it.
///
/// Nodes within the root are created and removed only through the facade's
/// path-addressed mutation operations. Queries and full-structure operations
/// are executed by handing a handler to a traversal strategy.
///
/// # Examples
///
/// ```
/// use trellis::tree::{Matcher, Tree};
/// use trellis::walk::IterativeWalker;
/// use trellis::path;
///
/// let mut tree = Tree::new();
/// tree.set(path!("users.alice.role"), "admin").unwrap();
/// tree.set(path!("users.bob.role"), "guest").unwrap();
///
/// let mut walker = IterativeWalker::new();
/// let roles = tree.query(
///     &[
///         Matcher::Key("users".into()),
///         Matcher::Any,
///         Matcher::Key("role".into()),
///     ],
///     &mut walker,
/// );
/// assert_eq!(roles.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Tree {
    root: Doc,
}

impl Tree {
    /// Creates a tree with an empty root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tree owning the given root document.
    pub fn from_root(root: Doc) -> Self {
        Self { root }
    }

    /// Returns a reference to the root document.
    pub fn root(&self) -> &Doc {
        &self.root
    }

    /// Resolves a path against the root structure.
    ///
    /// A non-existent path is `None`, not an error.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&Value> {
        self.root.get(path)
    }

    /// Sets a value at a path, creating intermediate composite nodes as
    /// needed. Returns the previous value at the path, if any.
    ///
    /// # Errors
    /// Fails with [`DocError::InvalidPath`](crate::doc::DocError::InvalidPath)
    /// if the path has no components; nothing is mutated in that case.
    pub fn set(
        &mut self,
        path: impl AsRef<Path>,
        value: impl Into<Value>,
    ) -> crate::Result<Option<Value>> {
        let path = path.as_ref();
        tracing::trace!(path = %path, "setting value");
        self.root.set_path(path, value).map_err(Into::into)
    }

    /// Removes the node at a path. Returns the removed value, if any.
    pub fn remove(&mut self, path: impl AsRef<Path>) -> Option<Value> {
        let path = path.as_ref();
        tracing::trace!(path = %path, "removing node");
        self.root.remove(path)
    }

    /// Returns true if a node exists at the path.
    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.root.contains_key(path)
    }

    /// Returns the number of direct children of the root.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Returns true if the root has no children.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Drives `walker` over the root structure with `handler`.
    pub fn walk(
        &self,
        walker: &mut dyn TreeWalker,
        handler: &mut dyn FnMut(&Path, &str, &Value) -> Step,
    ) -> Step {
        walker.walk(&self.root, handler)
    }

    /// Collects every node whose path matches the pattern sequence at every
    /// level, in traversal (pre-order) order.
    pub fn query(&self, patterns: &[Matcher], walker: &mut dyn TreeWalker) -> Vec<QueryMatch> {
        let mut matches = Vec::new();
        walker.walk(&self.root, &mut |path, _key, value| {
            if pattern_matches(patterns, path, value) {
                matches.push(QueryMatch {
                    path: path.to_path_buf(),
                    value: value.clone(),
                });
            }
            Step::Continue
        });
        tracing::debug!(
            pattern_len = patterns.len(),
            match_count = matches.len(),
            "query complete"
        );
        matches
    }
}

impl From<Doc> for Tree {
    fn from(root: Doc) -> Self {
        Self::from_root(root)
    }
}

/// Checks one visited path (and its node) against the pattern sequence.
fn pattern_matches(patterns: &[Matcher], path: &Path, value: &Value) -> bool {
    let components: Vec<&str> = path.components().collect();
    if components.len() != patterns.len() {
        return false;
    }

    let last = patterns.len().wrapping_sub(1);
    patterns
        .iter()
        .zip(components.iter())
        .enumerate()
        .all(|(level, (matcher, component))| match matcher {
            Matcher::Key(key) => key == component,
            Matcher::Any => true,
            Matcher::Value(expected) => level == last && value == expected,
        })
}
