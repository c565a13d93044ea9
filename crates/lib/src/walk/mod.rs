//! Hierarchical traversal over nested documents.
//!
//! This module provides a traversal engine that visits every element of a
//! nested [`Doc`](crate::doc::Doc) in deterministic pre-order: a composite
//! node is reported before its children, children are visited in
//! key-insertion order, depth-first. Two interchangeable strategies
//! implement the same [`TreeWalker`] contract:
//!
//! - [`IterativeWalker`](crate::walk::IterativeWalker) - explicit work-list,
//!   call-stack depth independent of nesting depth
//! - [`RecursiveWalker`](crate::walk::RecursiveWalker) - native call
//!   recursion, depth bounded by available call stack
//!
//! Both are observationally indistinguishable to a handler: same sequence of
//! `(path, key, node)` reports, same early-termination point for the same
//! cancellation decision.
//!
//! # Usage
//!
//! ```
//! use trellis::doc::Doc;
//! use trellis::walk::{IterativeWalker, Step, TreeWalker};
//!
//! let doc = Doc::new()
//!     .with_text("hello", "world")
//!     .with_doc("foo", Doc::new().with_text("bar", "woohoo"));
//!
//! let mut keys = Vec::new();
//! let mut walker = IterativeWalker::new();
//! walker.walk(&doc, &mut |_path, key, _value| {
//!     keys.push(key.to_string());
//!     Step::Continue
//! });
//! assert_eq!(keys, vec!["hello", "foo", "bar"]);
//! ```

pub mod iterative;
pub mod recursive;

pub use iterative::IterativeWalker;
pub use recursive::RecursiveWalker;

use crate::doc::{Doc, Path, PathBuf, Value};

/// Continuation signal returned by a per-node handler.
///
/// Returning [`Step::Stop`] halts the walk immediately: no further elements
/// (siblings, ancestors' remaining siblings, or descendants) are visited.
/// [`Step::Continue`] proceeds normally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    /// Keep visiting.
    #[default]
    Continue,
    /// Halt the walk immediately.
    Stop,
}

/// Per-node handler invoked synchronously once per visited element.
///
/// Receives the path from the root to (and including) the current key, the
/// key itself, and a borrow of the current node.
pub type Handler<'h> = dyn FnMut(&Path, &str, &Value) -> Step + 'h;

/// Transient state exposed during a walk.
///
/// A cursor has exactly two states: **idle** (all fields unset) and
/// **active** (fields reflect the node most recently reported to the
/// handler). A fresh cursor is idle; [`Cursor::reset`] returns to idle from
/// any state and is idempotent.
///
/// The cursor never exposes mutation of the structure under traversal; it is
/// a read cursor only. The current node itself is only ever lent to the
/// handler for the duration of one callback.
#[derive(Debug, Clone, Default)]
pub struct Cursor {
    key: Option<String>,
    path: PathBuf,
    active: bool,
}

impl Cursor {
    /// Creates an idle cursor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while the cursor reflects a visited node.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The key of the current element, or `None` when idle.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// The path from the root to the current element, or `None` when idle.
    pub fn path(&self) -> Option<&Path> {
        if self.active { Some(&self.path) } else { None }
    }

    /// Returns the cursor to idle. Chainable; calling twice is equivalent to
    /// calling once.
    pub fn reset(&mut self) -> &mut Self {
        self.key = None;
        self.path = PathBuf::new();
        self.active = false;
        self
    }

    pub(crate) fn advance(&mut self, path: PathBuf, key: String) {
        self.key = Some(key);
        self.path = path;
        self.active = true;
    }
}

/// Strategy contract for pre-order traversal of a nested document.
///
/// `walk` visits every element of `root` reachable by following composite
/// children, reporting `(path, key, node)` to the handler per element, and
/// returns [`Step::Stop`] if the handler cancelled the walk or
/// [`Step::Continue`] if every element was visited.
///
/// A walker instance is not reentrant: `walk` borrows the instance mutably,
/// so invoking `walk` again on the same instance from within its own handler
/// is rejected at compile time. Use one instance per concurrent logical
/// walk.
pub trait TreeWalker {
    /// Visits every element of `root` in pre-order, reporting each to
    /// `handler`.
    fn walk(&mut self, root: &Doc, handler: &mut Handler<'_>) -> Step;

    /// The walker's cursor, reflecting the most recently visited element.
    fn cursor(&self) -> &Cursor;

    /// Returns the walker's cursor to idle.
    fn reset(&mut self);
}
