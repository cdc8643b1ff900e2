//! The delivered message envelope.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A cloud message as handed over by the push transport.
///
/// Only the data part is meaningful to courier; notification-part fields are
/// rendered by the platform before courier sees the message.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteMessage {
    /// Transport-assigned message id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    /// Data payload.
    #[serde(default)]
    pub data: HashMap<String, String>,
}

impl RemoteMessage {
    /// Message carrying only a data payload.
    pub fn with_data(data: HashMap<String, String>) -> Self {
        Self {
            message_id: None,
            data,
        }
    }
}
