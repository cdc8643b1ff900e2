//! Decoding errors for propositions and rules.

use courier_core::errors::DataError;
use thiserror::Error;

/// Why a structure could not be decoded.
///
/// Public extraction functions log these and return `None`; they are exposed
/// for callers that use the `decode_*` functions directly.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// A nested key, type, or index did not match the expected shape.
    #[error("malformed structure: {0}")]
    Malformed(#[from] DataError),
    /// The value did not deserialize into the target type.
    #[error("failed to deserialize: {0}")]
    Json(#[from] serde_json::Error),
    /// The top-level value is not a JSON object.
    #[error("expected a JSON object")]
    NotAnObject,
}
