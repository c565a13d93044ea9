//!
//! Trellis: an in-memory data-structure toolkit for ordered containers and
//! path-addressed nested trees.
//!
//! ## Core Concepts
//!
//! The library is built around a few key pieces:
//!
//! * **Ordered containers (`ordered`)**: sequences kept sorted at every
//!   observable point. [`ordered::OrderedArray`] provides floor search,
//!   [`ordered::OrderedList`] adds half-open range extraction, and
//!   [`ordered::OrderedStringList`] specializes to lexicographic ordering
//!   with prefix-range queries.
//! * **Nested documents (`doc`)**: [`doc::Doc`] is an arbitrarily nested,
//!   heterogeneous key-value structure with insertion-ordered children,
//!   addressed by dot-notation [`doc::Path`]s.
//! * **Traversal (`walk`)**: two interchangeable strategies
//!   ([`walk::IterativeWalker`] and [`walk::RecursiveWalker`]) visit a
//!   nested document in deterministic pre-order behind one
//!   [`walk::TreeWalker`] contract, with handler-driven early cancellation.
//! * **Tree facade (`tree`)**: [`tree::Tree`] owns a root document, exposes
//!   path-addressed read/write, and drives a traversal strategy to answer
//!   pattern-based queries.
//!
//! Everything is single-threaded and fully synchronous; no operation
//! suspends, blocks, or spawns concurrent work.

pub mod doc;
pub mod ordered;
pub mod tree;
pub mod walk;

/// Re-export the core types for easier access.
pub use doc::{Doc, Value};
pub use tree::Tree;

/// Result type used throughout the trellis library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the trellis library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured path errors from the doc module
    #[error(transparent)]
    Path(doc::PathError),

    /// Structured document errors from the doc module
    #[error(transparent)]
    Doc(doc::DocError),

    /// Structured ordered-container errors from the ordered module
    #[error(transparent)]
    Ordered(ordered::OrderedError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Path(_) => "path",
            Error::Doc(_) => "doc",
            Error::Ordered(_) => "ordered",
        }
    }

    /// Check if this error indicates an invalid argument surfaced before any
    /// state mutation.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Error::Path(err) => !matches!(err, doc::PathError::DecodingError { .. }),
            Error::Doc(err) => err.is_path_error(),
            Error::Ordered(err) => matches!(err, ordered::OrderedError::EmptyPrefix),
        }
    }
}
