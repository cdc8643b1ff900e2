//! Classification of inbound bus events.
//!
//! Every event the extension listens for maps to exactly one [`EventIntent`].
//! Classification happens once per event; handlers match on the result
//! instead of re-testing type, source, and flags.

use courier_core::Event;
use courier_core::constants::{data_keys, event_source, event_type};
use courier_core::data::opt_bool;

/// What an inbound event asks the extension to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventIntent {
    /// Generic identity request, e.g. a push token sync.
    GenericIdentityRequest,
    /// Messaging request to refetch in-app messages.
    RefreshMessages,
    /// Messaging request to fetch propositions for surfaces.
    UpdatePropositions,
    /// Messaging request to return cached propositions for surfaces.
    GetPropositions,
    /// Any other messaging request (e.g. push tracking).
    MessagingRequestContent,
    /// Personalization decisions from the edge.
    EdgePersonalizationDecision,
    /// An edge personalization request has finished.
    PersonalizationRequestComplete,
    /// Not an event this extension handles.
    Unrecognized,
}

impl EventIntent {
    /// Classify an event.
    ///
    /// Events without data are [`Unrecognized`](Self::Unrecognized). Type and
    /// source comparisons ignore ASCII case. Within messaging requests the
    /// refresh key wins over the update flag, which wins over the get flag.
    pub fn classify(event: &Event) -> Self {
        let Some(data) = event.data() else {
            return Self::Unrecognized;
        };

        if event.is(event_type::MESSAGING, event_source::REQUEST_CONTENT) {
            if data.contains_key(data_keys::REFRESH_MESSAGES) {
                Self::RefreshMessages
            } else if opt_bool(data, data_keys::UPDATE_PROPOSITIONS, false) {
                Self::UpdatePropositions
            } else if opt_bool(data, data_keys::GET_PROPOSITIONS, false) {
                Self::GetPropositions
            } else {
                Self::MessagingRequestContent
            }
        } else if event.is(event_type::GENERIC_IDENTITY, event_source::REQUEST_CONTENT) {
            Self::GenericIdentityRequest
        } else if event.is(event_type::EDGE, event_source::PERSONALIZATION_DECISIONS) {
            Self::EdgePersonalizationDecision
        } else if event.is(event_type::EDGE, event_source::CONTENT_COMPLETE) {
            Self::PersonalizationRequestComplete
        } else {
            Self::Unrecognized
        }
    }

    /// Messaging type with request-content source, whatever the flags.
    pub fn is_messaging_request_content(self) -> bool {
        matches!(
            self,
            Self::RefreshMessages
                | Self::UpdatePropositions
                | Self::GetPropositions
                | Self::MessagingRequestContent
        )
    }

    /// See [`EventIntent::GenericIdentityRequest`].
    pub fn is_generic_identity_request(self) -> bool {
        self == Self::GenericIdentityRequest
    }

    /// See [`EventIntent::RefreshMessages`].
    pub fn is_refresh_messages(self) -> bool {
        self == Self::RefreshMessages
    }

    /// See [`EventIntent::UpdatePropositions`].
    pub fn is_update_propositions(self) -> bool {
        self == Self::UpdatePropositions
    }

    /// See [`EventIntent::GetPropositions`].
    pub fn is_get_propositions(self) -> bool {
        self == Self::GetPropositions
    }

    /// See [`EventIntent::EdgePersonalizationDecision`].
    pub fn is_edge_personalization_decision(self) -> bool {
        self == Self::EdgePersonalizationDecision
    }

    /// See [`EventIntent::PersonalizationRequestComplete`].
    pub fn is_personalization_request_complete(self) -> bool {
        self == Self::PersonalizationRequestComplete
    }
}

impl From<&Event> for EventIntent {
    fn from(event: &Event) -> Self {
        Self::classify(event)
    }
}
