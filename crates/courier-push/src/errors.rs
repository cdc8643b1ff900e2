//! Push payload decoding errors.

use thiserror::Error;

/// Reasons an action-button list cannot be decoded.
///
/// These never escape [`crate::PushPayload`]; they are logged and the
/// button list becomes `None`.
#[derive(Debug, Error)]
pub enum PushError {
    /// The string is not valid JSON.
    #[error("action buttons are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The JSON is valid but not an array.
    #[error("action buttons are not a JSON array")]
    NotAnArray,
    /// An array element is not a JSON object.
    #[error("action button at index {index} is not a JSON object")]
    NotAnObject {
        /// Position of the offending element.
        index: usize,
    },
}
