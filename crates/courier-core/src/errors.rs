//! Error types for typed data access.

use thiserror::Error;

/// Failure reading a typed value out of an event data map.
///
/// Readers in [`crate::data`] that return `Option` swallow these; the strict
/// `require_*` variants return them so decoders can report why a structure
/// did not match.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DataError {
    /// The key is absent (or its value is JSON `null`).
    #[error("missing key '{key}'")]
    Missing {
        /// Key that was looked up.
        key: String,
    },
    /// The key is present but holds a different JSON type.
    #[error("key '{key}' is not {expected}")]
    WrongType {
        /// Key that was looked up.
        key: String,
        /// Expected JSON type, e.g. `"a string"`.
        expected: &'static str,
    },
    /// An array had fewer elements than required.
    #[error("key '{key}' has no element at index {index}")]
    OutOfBounds {
        /// Key holding the array.
        key: String,
        /// Requested index.
        index: usize,
    },
}

impl DataError {
    /// Shorthand for [`DataError::Missing`].
    pub fn missing(key: &str) -> Self {
        Self::Missing {
            key: key.to_owned(),
        }
    }

    /// Shorthand for [`DataError::WrongType`].
    pub fn wrong_type(key: &str, expected: &'static str) -> Self {
        Self::WrongType {
            key: key.to_owned(),
            expected,
        }
    }
}

/// Result type for typed data access.
pub type Result<T> = std::result::Result<T, DataError>;
