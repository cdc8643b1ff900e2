//! The [`Event`] type exchanged with the host bus.
//!
//! An event is identified by `(type, source)` and carries an optional JSON
//! data map. Events are immutable once built; use [`Event::builder`] to
//! construct them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::matches_ignore_case;
use crate::data::DataMap;
use crate::ids::EventId;

/// A bus event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique event id (UUID v7).
    pub id: EventId,
    /// Human-readable event name.
    pub name: String,
    /// Event type, e.g. `com.adobe.eventType.messaging`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Event source, e.g. `com.adobe.eventSource.requestContent`.
    pub source: String,
    /// Event data. `None` is distinct from an empty map.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<DataMap>,
    /// Keys of `data` used by the host to de-duplicate history entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask: Option<Vec<String>>,
    /// ISO 8601 timestamp.
    pub timestamp: String,
}

impl Event {
    /// Start building an event.
    pub fn builder(
        name: impl Into<String>,
        event_type: impl Into<String>,
        source: impl Into<String>,
    ) -> EventBuilder {
        EventBuilder {
            name: name.into(),
            event_type: event_type.into(),
            source: source.into(),
            data: None,
            mask: None,
        }
    }

    /// Event data, when present.
    pub fn data(&self) -> Option<&DataMap> {
        self.data.as_ref()
    }

    /// Whether the event type and source match, ignoring ASCII case.
    pub fn is(&self, event_type: &str, source: &str) -> bool {
        matches_ignore_case(&self.event_type, event_type) && matches_ignore_case(&self.source, source)
    }
}

/// Builder for [`Event`].
#[derive(Clone, Debug)]
pub struct EventBuilder {
    name: String,
    event_type: String,
    source: String,
    data: Option<DataMap>,
    mask: Option<Vec<String>>,
}

impl EventBuilder {
    /// Attach a data map.
    #[must_use]
    pub fn data(mut self, data: DataMap) -> Self {
        self.data = Some(data);
        self
    }

    /// Attach data from a JSON value. Non-object values are ignored.
    #[must_use]
    pub fn data_value(mut self, data: Value) -> Self {
        if let Value::Object(map) = data {
            self.data = Some(map);
        } else {
            tracing::debug!(name = %self.name, "event data is not an object, ignoring");
        }
        self
    }

    /// Attach an optional mask.
    #[must_use]
    pub fn mask(mut self, mask: Option<Vec<String>>) -> Self {
        self.mask = mask;
        self
    }

    /// Finish the event, assigning a fresh id and the current UTC timestamp.
    pub fn build(self) -> Event {
        Event {
            id: EventId::new(),
            name: self.name,
            event_type: self.event_type,
            source: self.source,
            data: self.data,
            mask: self.mask,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
