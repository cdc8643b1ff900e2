//! # courier-messaging
//!
//! The in-app messaging side of courier:
//!
//! - **Classification**: [`classify::EventIntent`] names what an inbound bus event asks for
//! - **Extraction**: typed reads of surfaces, event ids, and ECID in [`extract`]
//! - **Rules**: rules documents and consequences in [`rules`]
//! - **Aggregation**: copy-on-write [`aggregate::SurfaceMap`] and its publication cell
//! - **Tracking**: [`tracker::PersonalizationTracker`] collects propositions for one fetch
//! - **State**: [`state::MessagingState`] privacy/identity snapshot
//!
//! Nothing here panics or returns an error to the caller. Absent input yields
//! `None` or a default; malformed input is logged and treated as absent.
//!
//! ## Crate Position
//!
//! Depends on courier-core (events, data readers) and courier-settings (cache layout).

#![deny(unsafe_code)]

pub mod aggregate;
pub mod cache;
pub mod classify;
pub mod errors;
pub mod extract;
pub mod proposition;
pub mod rules;
pub mod state;
pub mod surface;
pub mod tracker;

pub use aggregate::{PropositionMap, RuleMap, SurfaceCache, SurfaceMap};
pub use classify::EventIntent;
pub use errors::DecodeError;
pub use proposition::Proposition;
pub use rules::{LaunchRule, RuleConsequence};
pub use state::{MessagingState, PrivacyStatus};
pub use surface::Surface;
pub use tracker::{PersonalizationTracker, TrackerOutcome};
