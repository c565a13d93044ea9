//! Native-recursion traversal strategy.

use super::{Cursor, Handler, Step, TreeWalker};
use crate::doc::{Doc, PathBuf, Value};

/// Pre-order traversal via native call recursion.
///
/// Call-stack depth grows with nesting depth; structures deeper than the
/// available call stack need [`IterativeWalker`](crate::walk::IterativeWalker)
/// instead. Visiting order and cancellation behavior are identical between
/// the two strategies.
#[derive(Debug, Default)]
pub struct RecursiveWalker {
    cursor: Cursor,
}

impl RecursiveWalker {
    /// Creates a walker with an idle cursor.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TreeWalker for RecursiveWalker {
    fn walk(&mut self, root: &Doc, handler: &mut Handler<'_>) -> Step {
        self.cursor.reset();
        tracing::trace!(strategy = "recursive", "starting walk");

        let base = PathBuf::new();
        for (key, value) in root.iter() {
            if visit(&mut self.cursor, &base, key, value, handler) == Step::Stop {
                return Step::Stop;
            }
        }
        Step::Continue
    }

    fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    fn reset(&mut self) {
        self.cursor.reset();
    }
}

/// Visits one element, then recurses into its children if it is composite.
fn visit(
    cursor: &mut Cursor,
    parent: &PathBuf,
    key: &str,
    value: &Value,
    handler: &mut Handler<'_>,
) -> Step {
    let path = parent.clone().push(key);
    cursor.advance(path.clone(), key.to_string());
    if handler(&path, key, value) == Step::Stop {
        tracing::debug!(path = %path, "walk cancelled by handler");
        return Step::Stop;
    }

    if let Value::Doc(doc) = value {
        for (child_key, child_value) in doc.iter() {
            if visit(cursor, &path, child_key, child_value, handler) == Step::Stop {
                return Step::Stop;
            }
        }
    }

    Step::Continue
}
