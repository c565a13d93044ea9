//! Error types for document operations.
//!
//! This module defines structured error types for operations on nested
//! documents, providing detailed context for path resolution failures and
//! type mismatches.

use thiserror::Error;

/// Structured error types for document operations.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocError {
    /// Invalid path for a mutating operation
    #[error("Invalid document path: {path}")]
    InvalidPath { path: String },

    /// Type mismatch during a typed retrieval
    #[error("Document type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// Element not found during a Result-based lookup
    #[error("Document element not found: {key}")]
    ElementNotFound { key: String },

    /// Serialization of a value failed
    #[error("Document serialization failed: {reason}")]
    SerializationFailed { reason: String },

    /// Deserialization of a value failed
    #[error("Document deserialization failed: {reason}")]
    DeserializationFailed { reason: String },
}

impl DocError {
    /// Check if this error is related to path resolution
    pub fn is_path_error(&self) -> bool {
        matches!(self, DocError::InvalidPath { .. })
    }

    /// Check if this error is related to type mismatches
    pub fn is_type_error(&self) -> bool {
        matches!(self, DocError::TypeMismatch { .. })
    }

    /// Check if this error is related to element lookup
    pub fn is_not_found_error(&self) -> bool {
        matches!(self, DocError::ElementNotFound { .. })
    }

    /// Check if this error is related to serialization
    pub fn is_serialization_error(&self) -> bool {
        matches!(
            self,
            DocError::SerializationFailed { .. } | DocError::DeserializationFailed { .. }
        )
    }
}

impl From<DocError> for crate::Error {
    fn from(err: DocError) -> Self {
        crate::Error::Doc(err)
    }
}
