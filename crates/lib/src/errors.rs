//! Error types for encoding and decoding.
//!
//! Every recoverable failure carries the [`CodingPath`] at which it happened
//! together with a human-readable description. Errors propagate unchanged to
//! the top-level [`encode`](fn@crate::encode)/[`decode`](fn@crate::decode) caller;
//! because sub-coders are created with extended paths, the path in an error
//! always runs from the root to the failure point.
//!
//! Misuse of the container contract by a type's own coding logic (requesting
//! two containers from one coder, leaving a container unwritten) is not part
//! of this taxonomy. Those are bugs in the describing type and panic.

use thiserror::Error;

use crate::path::{CodingKey, CodingPath};

/// Structured error types for encode and decode operations.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodingError {
    /// The value at `path` does not have the expected shape or type.
    ///
    /// Also raised when a decoder is asked for a container kind the node
    /// cannot provide.
    #[error("type mismatch at '{path}': expected {expected}, found {found}")]
    TypeMismatch {
        path: CodingPath,
        expected: String,
        found: String,
    },

    /// A required key is absent from a keyed container.
    #[error("key '{key}' not found at '{path}'")]
    KeyNotFound { path: CodingPath, key: CodingKey },

    /// An unkeyed container's cursor is at or past its last element.
    #[error("index {index} out of bounds at '{path}' (count {count})")]
    IndexOutOfBounds {
        path: CodingPath,
        index: usize,
        count: usize,
    },

    /// The value has the right shape but its content cannot be interpreted.
    ///
    /// Also raised for unsupported operations such as requesting a super
    /// coder without a key.
    #[error("data corrupted at '{path}': {reason}")]
    DataCorrupted { path: CodingPath, reason: String },

    /// A type's describing logic rejected the value it was asked to encode.
    #[error("invalid value at '{path}': {reason}")]
    InvalidValue { path: CodingPath, reason: String },
}

impl CodingError {
    /// Creates a [`CodingError::TypeMismatch`].
    pub fn type_mismatch(
        path: CodingPath,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        CodingError::TypeMismatch {
            path,
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Creates a [`CodingError::DataCorrupted`].
    pub fn data_corrupted(path: CodingPath, reason: impl Into<String>) -> Self {
        CodingError::DataCorrupted {
            path,
            reason: reason.into(),
        }
    }

    /// Creates a [`CodingError::InvalidValue`].
    ///
    /// This is the error `Encode` implementations return when they refuse a
    /// value, e.g. a non-finite float in a type that forbids it.
    pub fn invalid_value(path: CodingPath, reason: impl Into<String>) -> Self {
        CodingError::InvalidValue {
            path,
            reason: reason.into(),
        }
    }

    /// Returns the coding path at which the error occurred.
    pub fn path(&self) -> &CodingPath {
        match self {
            CodingError::TypeMismatch { path, .. }
            | CodingError::KeyNotFound { path, .. }
            | CodingError::IndexOutOfBounds { path, .. }
            | CodingError::DataCorrupted { path, .. }
            | CodingError::InvalidValue { path, .. } => path,
        }
    }

    /// Returns the description of the failure without the path prefix.
    pub fn description(&self) -> String {
        match self {
            CodingError::TypeMismatch {
                expected, found, ..
            } => format!("expected {expected}, found {found}"),
            CodingError::KeyNotFound { key, .. } => format!("no value for key '{key}'"),
            CodingError::IndexOutOfBounds { index, count, .. } => {
                format!("index {index} is past the end of {count} elements")
            }
            CodingError::DataCorrupted { reason, .. }
            | CodingError::InvalidValue { reason, .. } => reason.clone(),
        }
    }

    /// Check if this error is a shape or type mismatch
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, CodingError::TypeMismatch { .. })
    }

    /// Check if this error reports a missing key or index
    ///
    /// An out-of-bounds index is a missing key of an unkeyed container, so
    /// this is also true for [`CodingError::IndexOutOfBounds`].
    pub fn is_key_not_found(&self) -> bool {
        matches!(
            self,
            CodingError::KeyNotFound { .. } | CodingError::IndexOutOfBounds { .. }
        )
    }

    /// Check if this error reports a cursor past the end of a sequence
    pub fn is_index_out_of_bounds(&self) -> bool {
        matches!(self, CodingError::IndexOutOfBounds { .. })
    }

    /// Check if this error reports uninterpretable content
    pub fn is_data_corrupted(&self) -> bool {
        matches!(self, CodingError::DataCorrupted { .. })
    }

    /// Check if this error was raised while encoding a rejected value
    pub fn is_invalid_value(&self) -> bool {
        matches!(self, CodingError::InvalidValue { .. })
    }

    /// Get the missing key if this is a key lookup failure
    pub fn key(&self) -> Option<&CodingKey> {
        match self {
            CodingError::KeyNotFound { key, .. } => Some(key),
            _ => None,
        }
    }
}
