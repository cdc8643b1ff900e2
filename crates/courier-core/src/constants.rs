//! Package-level constants and host bus vocabulary.
//!
//! Event types, sources, and data keys are the exact strings the host bus
//! uses on the wire. Type and source comparisons are case-insensitive, so
//! use [`matches_ignore_case`] rather than `==` when testing against them.

/// Current version of the courier crates (sourced from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name.
pub const NAME: &str = "courier";

/// Event type strings.
pub mod event_type {
    /// Events owned by the messaging extension.
    pub const MESSAGING: &str = "com.adobe.eventType.messaging";
    /// Edge network events.
    pub const EDGE: &str = "com.adobe.eventType.edge";
    /// Generic identity events (push token sync, tracking).
    pub const GENERIC_IDENTITY: &str = "com.adobe.eventType.generic.identity";
    /// Rules engine events.
    pub const RULES_ENGINE: &str = "com.adobe.eventType.rulesEngine";
}

/// Event source strings.
pub mod event_source {
    /// Request for content.
    pub const REQUEST_CONTENT: &str = "com.adobe.eventSource.requestContent";
    /// Response carrying content.
    pub const RESPONSE_CONTENT: &str = "com.adobe.eventSource.responseContent";
    /// Edge request fully completed.
    pub const CONTENT_COMPLETE: &str = "com.adobe.eventSource.contentComplete";
    /// Personalization decisions returned by the edge.
    pub const PERSONALIZATION_DECISIONS: &str = "personalization:decisions";
}

/// Event data keys.
pub mod data_keys {
    /// Present (any value) on refresh-messages requests.
    pub const REFRESH_MESSAGES: &str = "refreshmessages";
    /// Boolean flag on update-propositions requests.
    pub const UPDATE_PROPOSITIONS: &str = "updatepropositions";
    /// Boolean flag on get-propositions requests.
    pub const GET_PROPOSITIONS: &str = "getpropositions";
    /// List of surface URI strings.
    pub const SURFACES: &str = "surfaces";
    /// Id of the request event a response belongs to.
    pub const REQUEST_EVENT_ID: &str = "requestEventId";
    /// Id of the request event a completion closes.
    pub const ENDING_EVENT_ID: &str = "endingEventId";
    /// List of proposition maps in a decision event.
    pub const PAYLOAD: &str = "payload";
}

/// Shared state keys read from other extensions.
pub mod shared_state {
    /// Configuration privacy status key.
    pub const GLOBAL_PRIVACY: &str = "global.privacy";
    /// Legacy identity visitor id key.
    pub const VISITOR_ID_MID: &str = "mid";
    /// Edge identity map key.
    pub const IDENTITY_MAP: &str = "identityMap";
    /// ECID namespace inside the identity map.
    pub const ECID: &str = "ECID";
    /// Identifier field of an identity item.
    pub const ID: &str = "id";
}

/// Case-insensitive (ASCII) comparison of a bus type or source string.
pub fn matches_ignore_case(value: &str, expected: &str) -> bool {
    value.eq_ignore_ascii_case(expected)
}
