//! Privacy and identity snapshot.
//!
//! [`MessagingState`] is a plain value. It is built at extension start and
//! replaced wholesale whenever configuration or identity shared state
//! changes; every reader sees one consistent snapshot.

use courier_core::DataMap;
use courier_core::constants::shared_state;
use courier_core::data::opt_str;
use serde::{Deserialize, Serialize};

use crate::extract::shared_state_ecid;

/// Privacy status from the configuration shared state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrivacyStatus {
    /// Collection and sending allowed.
    #[default]
    #[serde(rename = "optedin")]
    OptedIn,
    /// Nothing may be sent.
    #[serde(rename = "optedout")]
    OptedOut,
    /// Status not yet known; hits may be queued.
    #[serde(rename = "optunknown")]
    Unknown,
}

impl PrivacyStatus {
    /// Map a configuration string, ignoring ASCII case. Unrecognized → `Unknown`.
    pub fn from_config(value: &str) -> Self {
        if value.eq_ignore_ascii_case("optedin") {
            Self::OptedIn
        } else if value.eq_ignore_ascii_case("optedout") {
            Self::OptedOut
        } else {
            Self::Unknown
        }
    }

    /// The configuration string for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OptedIn => "optedin",
            Self::OptedOut => "optedout",
            Self::Unknown => "optunknown",
        }
    }
}

/// Configuration and identity values read before sending network-bound events.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagingState {
    privacy_status: PrivacyStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    ecid: Option<String>,
}

impl MessagingState {
    /// Snapshot from explicit values.
    pub fn new(privacy_status: PrivacyStatus, ecid: Option<String>) -> Self {
        Self {
            privacy_status,
            ecid,
        }
    }

    /// Current privacy status.
    pub fn privacy_status(&self) -> PrivacyStatus {
        self.privacy_status
    }

    /// Current ECID.
    pub fn ecid(&self) -> Option<&str> {
        self.ecid.as_deref()
    }

    /// Whether network-bound events may be sent.
    pub fn can_send(&self) -> bool {
        self.privacy_status != PrivacyStatus::OptedOut
    }

    /// Apply configuration and identity shared states.
    #[must_use]
    pub fn with_states(&self, config: Option<&DataMap>, identity: Option<&DataMap>) -> Self {
        self.with_config_state(config).with_identity_state(identity)
    }

    /// Apply a configuration shared state. `None` keeps the current status.
    ///
    /// A present state without a privacy entry reads as an empty string, so
    /// the status becomes `Unknown`.
    #[must_use]
    pub fn with_config_state(&self, config: Option<&DataMap>) -> Self {
        let Some(config) = config else {
            return self.clone();
        };
        let status = opt_str(config, shared_state::GLOBAL_PRIVACY).unwrap_or_default();
        Self {
            privacy_status: PrivacyStatus::from_config(status),
            ..self.clone()
        }
    }

    /// Apply an identity shared state. `None` keeps the current ECID.
    ///
    /// A present state without a visitor id sets the ECID to an empty string.
    #[must_use]
    pub fn with_identity_state(&self, identity: Option<&DataMap>) -> Self {
        let Some(identity) = identity else {
            return self.clone();
        };
        let ecid = opt_str(identity, shared_state::VISITOR_ID_MID).unwrap_or_default();
        Self {
            ecid: Some(ecid.to_owned()),
            ..self.clone()
        }
    }

    /// Apply an edge identity shared state. `None`, or a state without an
    /// ECID, keeps the current ECID.
    #[must_use]
    pub fn with_edge_identity_state(&self, edge_identity: Option<&DataMap>) -> Self {
        match edge_identity.and_then(shared_state_ecid) {
            Some(ecid) => Self {
                ecid: Some(ecid),
                ..self.clone()
            },
            None => self.clone(),
        }
    }
}
