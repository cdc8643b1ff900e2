//! Outbound event dispatch.
//!
//! The host bus is external; [`EventDispatcher`] is the seam courier code
//! dispatches through. Dispatch is fire-and-forget: no result is observed.

use crate::data::DataMap;
use crate::events::Event;

/// Accepts events for delivery on the host bus.
pub trait EventDispatcher: Send + Sync {
    /// Hand an event to the bus.
    fn dispatch(&self, event: Event);
}

/// Build an event from its parts and dispatch it.
pub fn send_event(
    name: &str,
    event_type: &str,
    source: &str,
    data: Option<DataMap>,
    mask: Option<Vec<String>>,
    dispatcher: &dyn EventDispatcher,
) {
    let mut builder = Event::builder(name, event_type, source).mask(mask);
    if let Some(data) = data {
        builder = builder.data(data);
    }
    let event = builder.build();
    tracing::trace!(event_name = name, event_type, source, id = %event.id, "dispatching event");
    dispatcher.dispatch(event);
}
