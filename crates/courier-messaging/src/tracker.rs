//! Collects propositions for one outstanding personalization fetch.
//!
//! A fetch is answered by any number of decision events followed by one
//! completion event, all carrying the id of the originating request. The
//! tracker accumulates decisions into a [`PropositionMap`] and hands the
//! result back when the completion arrives.

use courier_core::Event;
use courier_core::constants::data_keys;
use courier_core::ids::EventId;
use serde_json::Value;
use tracing::{debug, trace};

use crate::aggregate::PropositionMap;
use crate::classify::EventIntent;
use crate::extract::{ending_event_id, propositions_from_payloads, request_event_id};
use crate::surface::Surface;

/// Result of feeding one event to a [`PersonalizationTracker`].
#[derive(Clone, Debug, PartialEq)]
pub enum TrackerOutcome {
    /// Not a response to the in-flight request.
    Ignored,
    /// Decisions were merged; `count` propositions were kept from this event.
    Accumulated {
        /// Propositions appended by this event.
        count: usize,
    },
    /// The in-flight request finished with these propositions.
    Completed(PropositionMap),
}

#[derive(Debug)]
struct InFlight {
    request_event_id: EventId,
    surfaces: Vec<Surface>,
    propositions: PropositionMap,
}

/// Tracks at most one in-flight fetch.
#[derive(Debug, Default)]
pub struct PersonalizationTracker {
    in_flight: Option<InFlight>,
}

impl PersonalizationTracker {
    /// An idle tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking `request_event_id` for `surfaces`, dropping any
    /// request already in flight.
    pub fn begin(&mut self, request_event_id: impl Into<EventId>, surfaces: Vec<Surface>) {
        let request_event_id = request_event_id.into();
        if let Some(previous) = &self.in_flight {
            debug!(
                previous = %previous.request_event_id,
                next = %request_event_id,
                "replacing in-flight personalization request"
            );
        }
        self.in_flight = Some(InFlight {
            request_event_id,
            surfaces,
            propositions: PropositionMap::new(),
        });
    }

    /// Whether a request is in flight.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Id of the in-flight request.
    pub fn request_event_id(&self) -> Option<&str> {
        self.in_flight.as_ref().map(|f| f.request_event_id.as_str())
    }

    /// Propositions gathered so far for the in-flight request.
    pub fn pending(&self) -> Option<&PropositionMap> {
        self.in_flight.as_ref().map(|f| &f.propositions)
    }

    /// Feed an inbound event.
    pub fn on_event(&mut self, event: &Event) -> TrackerOutcome {
        let Some(in_flight) = &mut self.in_flight else {
            return TrackerOutcome::Ignored;
        };

        match EventIntent::classify(event) {
            EventIntent::EdgePersonalizationDecision => {
                if !in_flight
                    .request_event_id
                    .is_referenced_by(request_event_id(event).as_deref())
                {
                    return TrackerOutcome::Ignored;
                }
                let count = in_flight.accumulate(event);
                TrackerOutcome::Accumulated { count }
            }
            EventIntent::PersonalizationRequestComplete => {
                if !in_flight
                    .request_event_id
                    .is_referenced_by(ending_event_id(event).as_deref())
                {
                    return TrackerOutcome::Ignored;
                }
                match self.in_flight.take() {
                    Some(done) => {
                        debug!(
                            request_event_id = %done.request_event_id,
                            surfaces = done.propositions.len(),
                            "personalization request complete"
                        );
                        TrackerOutcome::Completed(done.propositions)
                    }
                    None => TrackerOutcome::Ignored,
                }
            }
            _ => TrackerOutcome::Ignored,
        }
    }
}

impl InFlight {
    fn accumulate(&mut self, event: &Event) -> usize {
        let payloads = event
            .data()
            .and_then(|data| data.get(data_keys::PAYLOAD))
            .and_then(Value::as_array);
        let Some(payloads) = payloads else {
            debug!(event_id = %event.id, "decision event has no payload list");
            return 0;
        };

        let mut count = 0;
        for proposition in propositions_from_payloads(payloads.iter().map(Value::as_object)) {
            let surface = proposition.surface();
            if !self.surfaces.contains(&surface) {
                trace!(%surface, "ignoring proposition for a surface that was not requested");
                continue;
            }
            self.propositions = self.propositions.with_item(&surface, proposition);
            count += 1;
        }
        count
    }
}
