//! # courier-push
//!
//! Turns the string-keyed data map of a delivered push message into a typed
//! [`PushPayload`].
//!
//! - [`payload`]: [`PushPayload`] and its field keys
//! - [`action`]: [`ActionType`], [`ActionButton`], and button list decoding
//! - [`priority`]: [`NotificationPriority`] with importance and legacy priority codes
//! - [`message`]: the [`RemoteMessage`] envelope as delivered by the transport
//!
//! Parsing never fails. Absent fields stay unset, malformed fields fall back
//! to their defaults, and every fallback is logged.
//!
//! ## Crate Position
//!
//! Leaf crate. No dependency on the rest of courier at runtime.

#![deny(unsafe_code)]

pub mod action;
pub mod errors;
pub mod message;
pub mod payload;
pub mod priority;

pub use action::{ActionButton, ActionType, parse_action_buttons};
pub use errors::PushError;
pub use message::RemoteMessage;
pub use payload::PushPayload;
pub use priority::{NotificationPriority, importance_from_str, priority_from_str};
