//! Typed field extraction from events and shared state.

use courier_core::constants::{data_keys, shared_state};
use courier_core::data::{opt_list_of_maps, opt_map, opt_str, opt_string, opt_string_list};
use courier_core::{DataMap, Event};
use tracing::debug;

use crate::proposition::Proposition;
use crate::surface::Surface;

/// Surfaces named in the event data, in order.
///
/// `None` when the event has no data or the surface list is absent, empty,
/// or not a list of strings.
pub fn surfaces(event: &Event) -> Option<Vec<Surface>> {
    let uris = event
        .data()
        .and_then(|data| opt_string_list(data, data_keys::SURFACES))
        .filter(|uris| !uris.is_empty());

    let Some(uris) = uris else {
        debug!(event_id = %event.id, "surface URIs were not found in the provided event");
        return None;
    };
    Some(uris.into_iter().map(Surface::from_uri).collect())
}

/// Id of the request event a response belongs to.
pub fn request_event_id(event: &Event) -> Option<String> {
    event
        .data()
        .and_then(|data| opt_string(data, data_keys::REQUEST_EVENT_ID, None))
}

/// Id of the request event a completion event closes.
pub fn ending_event_id(event: &Event) -> Option<String> {
    event
        .data()
        .and_then(|data| opt_string(data, data_keys::ENDING_EVENT_ID, None))
}

/// ECID from an edge identity shared state: `identityMap.ECID[0].id`.
pub fn shared_state_ecid(edge_identity_state: &DataMap) -> Option<String> {
    let identity_map = opt_map(edge_identity_state, shared_state::IDENTITY_MAP)?;
    let ecids = opt_list_of_maps(identity_map, shared_state::ECID)?;
    let first = ecids.first()?;
    opt_str(first, shared_state::ID).map(str::to_owned)
}

/// Decode proposition maps, skipping missing and undecodable entries.
pub fn propositions_from_payloads<'a>(
    payloads: impl IntoIterator<Item = Option<&'a DataMap>>,
) -> Vec<Proposition> {
    payloads
        .into_iter()
        .flatten()
        .filter_map(|payload| match Proposition::decode(payload) {
            Ok(proposition) => Some(proposition),
            Err(e) => {
                debug!(error = %e, "skipping undecodable proposition payload");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use courier_core::constants::{event_source, event_type};
    use courier_core::logging::capture_logs;
    use serde_json::{Value, json};
    use tracing::Level;

    use super::*;

    fn event_with(data: Value) -> Event {
        Event::builder("test", event_type::MESSAGING, event_source::REQUEST_CONTENT)
            .data_value(data)
            .build()
    }

    fn map(value: Value) -> DataMap {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn surfaces_preserve_order() {
        let event = event_with(json!({"surfaces": ["mobileapp://app/b", "mobileapp://app/a"]}));
        let surfaces = surfaces(&event).unwrap();
        assert_eq!(
            surfaces,
            vec![
                Surface::from_uri("mobileapp://app/b"),
                Surface::from_uri("mobileapp://app/a")
            ]
        );
    }

    #[test]
    fn missing_or_empty_surfaces_are_none() {
        let (logs, _guard) = capture_logs();
        assert!(surfaces(&event_with(json!({}))).is_none());
        assert!(surfaces(&event_with(json!({"surfaces": []}))).is_none());
        assert!(surfaces(&event_with(json!({"surfaces": "mobileapp://x"}))).is_none());
        assert!(surfaces(&event_with(json!({"surfaces": ["a://b", 1]}))).is_none());

        let no_data = Event::builder("n", event_type::MESSAGING, event_source::REQUEST_CONTENT)
            .build();
        assert!(surfaces(&no_data).is_none());
        assert_eq!(logs.count_at_level(Level::DEBUG), 5);
    }

    #[test]
    fn event_ids() {
        let event = event_with(json!({"requestEventId": "req-1", "endingEventId": "req-2"}));
        assert_eq!(request_event_id(&event).as_deref(), Some("req-1"));
        assert_eq!(ending_event_id(&event).as_deref(), Some("req-2"));

        let event = event_with(json!({"requestEventId": 7}));
        assert_eq!(request_event_id(&event), None);
        assert_eq!(ending_event_id(&event), None);
    }

    #[test]
    fn ecid_from_identity_map() {
        let state = map(json!({
            "identityMap": {
                "ECID": [
                    {"id": "ecid-1", "authenticatedState": "ambiguous", "primary": false},
                    {"id": "ecid-2"}
                ]
            }
        }));
        assert_eq!(shared_state_ecid(&state).as_deref(), Some("ecid-1"));
    }

    #[test]
    fn ecid_missing_levels_are_none() {
        for state in [
            json!({}),
            json!({"identityMap": {}}),
            json!({"identityMap": {"ECID": []}}),
            json!({"identityMap": {"ECID": [{}]}}),
            json!({"identityMap": {"ECID": "ecid"}}),
            json!({"identityMap": {"ECID": [{"id": 5}]}}),
            json!({"identityMap": []}),
        ] {
            assert_eq!(shared_state_ecid(&map(state.clone())), None, "{state}");
        }
    }

    #[test]
    fn propositions_skip_bad_entries() {
        let good = map(json!({"id": "p1", "scope": "mobileapp://app", "scopeDetails": {}}));
        let bad = map(json!({"id": "p2"}));
        let propositions = propositions_from_payloads([Some(&good), None, Some(&bad)]);
        assert_eq!(propositions.len(), 1);
        assert_eq!(propositions[0].id, "p1");
    }
}
