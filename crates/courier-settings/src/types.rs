//! Settings type definitions.
//!
//! Field names are camelCase on the wire. Every section is
//! `#[serde(default)]`, so partial JSON fills the rest from defaults.

use serde::{Deserialize, Serialize};

/// Root settings type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CourierSettings {
    /// Settings schema version.
    pub version: String,
    /// Logging configuration.
    pub logging: LoggingSettings,
    /// On-device asset cache layout.
    pub cache: CacheSettings,
}

impl Default for CourierSettings {
    fn default() -> Self {
        Self {
            version: "0.1.0".to_string(),
            logging: LoggingSettings::default(),
            cache: CacheSettings::default(),
        }
    }
}

/// Logging configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggingSettings {
    /// Default `tracing` filter directive, e.g. `"warn"` or `"courier=debug"`.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Asset cache layout, relative to the host application's cache directory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CacheSettings {
    /// Directory under the application cache owned by messaging.
    pub base_dir: String,
    /// Subdirectory for cached message images.
    pub images_subdir: String,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            base_dir: "messaging".to_string(),
            images_subdir: "images".to_string(),
        }
    }
}
