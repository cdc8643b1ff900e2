//! Event identifiers.
//!
//! Ids minted here are UUID v7, so they sort by creation time. Ids of events
//! received from the host are kept verbatim, whatever their format.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of a bus event.
///
/// Distinct from the `requestEventId` / `endingEventId` strings carried in
/// event data, which name some other event.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Mint a fresh time-ordered id.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `data_id` (as read from a response's event data) names this event.
    pub fn is_referenced_by(&self, data_id: Option<&str>) -> bool {
        data_id == Some(self.0.as_str())
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<str> for EventId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for EventId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for EventId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}
