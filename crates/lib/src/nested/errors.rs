//! Error types for nested mapping operations.
//!
//! This module defines the structured errors raised while constructing a
//! [`NestedDict`](super::NestedDict) or addressing its contents with dotted paths.

use thiserror::Error;

/// Structured error types for nested mapping operations.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NestedError {
    /// Construction input is neither a mapping nor an object with fields
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// A dotted path referenced a segment that is absent at its depth
    #[error("Key not found: '{segment}' in path '{path}'")]
    KeyNotFound { path: String, segment: String },

    /// A dotted write tried to descend through a leaf value
    #[error("Path conflict: '{path}' is a leaf ({found}), not a mapping")]
    PathConflict { path: String, found: String },

    /// A stored value does not have the requested type
    #[error("Type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// A value could not be serialized into a nested mapping
    #[error("Serialization failed: {reason}")]
    SerializationFailed { reason: String },
}

impl NestedError {
    /// Check if this error is a rejected construction input
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, NestedError::InvalidArgument { .. })
    }

    /// Check if this error is related to key lookup
    pub fn is_not_found(&self) -> bool {
        matches!(self, NestedError::KeyNotFound { .. })
    }

    /// Check if this error is a write through a leaf value
    pub fn is_conflict(&self) -> bool {
        matches!(self, NestedError::PathConflict { .. })
    }

    /// Check if this error is related to type mismatches
    pub fn is_type_error(&self) -> bool {
        matches!(self, NestedError::TypeMismatch { .. })
    }

    /// Get the path if this is a path-related error
    pub fn path(&self) -> Option<&str> {
        match self {
            NestedError::KeyNotFound { path, .. } | NestedError::PathConflict { path, .. } => {
                Some(path)
            }
            _ => None,
        }
    }
}

// Conversion from NestedError to the main Error type
impl From<NestedError> for crate::Error {
    fn from(err: NestedError) -> Self {
        crate::Error::Nested(err)
    }
}
