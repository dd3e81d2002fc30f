//!
//! nesteddict: dotted-key access to nested mappings.
//!
//! ## Core Concepts
//!
//! * **Nested mappings (`nested::Mapping`)**: Trees of string keys whose values are either leaves or further mappings.
//! * **Dotted paths (`nested::Path`)**: `.`-joined keys locating one node of a tree, e.g. `"user.profile.name"`.
//! * **NestedDict (`nested::NestedDict`)**: Owns one mapping and converts between three representations:
//!     * a plain object (any type implementing `nested::Fields`, or any `serde::Serialize` type),
//!     * the nested mapping itself,
//!     * the flattened dotted form, with one entry per leaf.

pub mod nested;

/// Re-export the `NestedDict` struct for easier access.
pub use nested::NestedDict;

/// Result type used throughout the nesteddict library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the nesteddict library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured errors from the nested module
    #[error(transparent)]
    Nested(nested::NestedError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Nested(_) => "nested",
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error indicates a path was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Nested(nested_err) => nested_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error indicates a write through a leaf value.
    pub fn is_conflict(&self) -> bool {
        match self {
            Error::Nested(nested_err) => nested_err.is_conflict(),
            _ => false,
        }
    }

    /// Check if this error is an input that cannot become a nested mapping.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Error::Nested(nested_err) => nested_err.is_invalid_argument(),
            _ => false,
        }
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }

    /// Check if this error is a serialization failure.
    pub fn is_serialization_error(&self) -> bool {
        matches!(
            self,
            Error::Serialize(_) | Error::Nested(nested::NestedError::SerializationFailed { .. })
        )
    }
}
