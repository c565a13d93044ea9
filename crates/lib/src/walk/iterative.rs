//! Explicit-stack traversal strategy.

use super::{Cursor, Handler, Step, TreeWalker};
use crate::doc::{Doc, PathBuf, Value};

/// Pre-order traversal driven by an explicit work-list.
///
/// The walk keeps a stack of child iterators instead of recursing, so
/// arbitrarily deep structures do not consume call-stack depth proportional
/// to nesting. Visiting order and cancellation behavior are identical to
/// [`RecursiveWalker`](crate::walk::RecursiveWalker).
#[derive(Debug, Default)]
pub struct IterativeWalker {
    cursor: Cursor,
}

impl IterativeWalker {
    /// Creates a walker with an idle cursor.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TreeWalker for IterativeWalker {
    fn walk(&mut self, root: &Doc, handler: &mut Handler<'_>) -> Step {
        self.cursor.reset();
        tracing::trace!(strategy = "iterative", "starting walk");

        // Each frame iterates one composite node's children; the path holds
        // the address of the node owning the top frame.
        let mut stack: Vec<indexmap::map::Iter<'_, String, Value>> = vec![root.iter()];
        let mut path = PathBuf::new();

        while let Some(frame) = stack.last_mut() {
            match frame.next() {
                Some((key, value)) => {
                    let node_path = path.clone().push(key);
                    self.cursor.advance(node_path.clone(), key.clone());
                    if handler(&node_path, key, value) == Step::Stop {
                        tracing::debug!(path = %node_path, "walk cancelled by handler");
                        return Step::Stop;
                    }
                    if let Value::Doc(doc) = value {
                        stack.push(doc.iter());
                        path = node_path;
                    }
                }
                None => {
                    stack.pop();
                    path = path.parent().unwrap_or_default();
                }
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
