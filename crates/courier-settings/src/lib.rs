//! # courier-settings
//!
//! SDK settings loaded from three layers (in priority order):
//! 1. **Compiled defaults**: [`CourierSettings::default()`]
//! 2. **User file**: `~/.courier/settings.json` (deep-merged over defaults)
//! 3. **Environment variables**: `COURIER_*` overrides (highest priority)
//!
//! Settings are returned by value. Callers hold the snapshot they loaded and
//! pass it to whatever needs it; there is no process-wide cache.

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{
    apply_env_overrides, apply_overrides, deep_merge, load_settings, load_settings_from_path,
    settings_path,
};
pub use types::{CacheSettings, CourierSettings, LoggingSettings};
