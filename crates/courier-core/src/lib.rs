//! # courier-core
//!
//! Foundation types shared by every courier crate:
//!
//! - **Events**: [`events::Event`] with its builder, as dispatched on the host bus
//! - **Dispatch**: [`dispatch::EventDispatcher`] seam and [`dispatch::send_event`]
//! - **Constants**: event types, sources, and data keys in [`constants`]
//! - **Data readers**: typed lookups over JSON data maps in [`data`]
//! - **Errors**: [`errors::DataError`] via `thiserror`
//! - **IDs**: [`ids::EventId`] as a UUID v7 newtype
//! - **Logging**: [`logging::init_subscriber`] and [`logging::capture_logs`]
//!
//! ## Crate Position
//!
//! Foundation crate. Depended on by all other courier crates.

#![deny(unsafe_code)]

pub mod constants;
pub mod data;
pub mod dispatch;
pub mod errors;
pub mod events;
pub mod ids;
pub mod logging;

pub use data::DataMap;
pub use dispatch::{EventDispatcher, send_event};
pub use events::{Event, EventBuilder};
