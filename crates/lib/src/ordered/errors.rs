//! Error types for ordered-container operations.

use thiserror::Error;

/// Structured error types for ordered-container operations.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderedError {
    /// Prefix queries require a non-empty prefix.
    #[error("Prefix must be a non-empty string")]
    EmptyPrefix,
}

impl From<OrderedError> for crate::Error {
    fn from(err: OrderedError) -> Self {
        crate::Error::Ordered(err)
    }
}
