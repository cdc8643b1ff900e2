//! Layered settings loading.
//!
//! Compiled defaults, then the user's JSON file merged over them, then
//! `COURIER_*` environment variables. The merge is structural: nested
//! objects merge key by key, anything else in the file replaces the default
//! outright, and explicit `null`s in the file are ignored.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::errors::{Result, SettingsError};
use crate::types::CourierSettings;

/// Overrides `logging.level`.
pub const ENV_LOG_LEVEL: &str = "COURIER_LOG_LEVEL";
/// Overrides `cache.baseDir`.
pub const ENV_CACHE_BASE_DIR: &str = "COURIER_CACHE_BASE_DIR";
/// Overrides `cache.imagesSubdir`.
pub const ENV_CACHE_IMAGES_DIR: &str = "COURIER_CACHE_IMAGES_DIR";

/// `$HOME/.courier/settings.json`, or `None` when `HOME` is unset.
pub fn settings_path() -> Option<PathBuf> {
    let home = std::env::var_os("HOME")?;
    Some(PathBuf::from(home).join(".courier").join("settings.json"))
}

/// Load settings from the user file (if any) and the environment.
pub fn load_settings() -> Result<CourierSettings> {
    match settings_path() {
        Some(path) => load_settings_from_path(&path),
        None => {
            debug!("HOME is unset, skipping settings file");
            let mut settings = CourierSettings::default();
            apply_env_overrides(&mut settings);
            Ok(settings)
        }
    }
}

/// Load settings from `path` and the environment.
///
/// A missing file yields defaults. Unreadable files and invalid JSON are errors.
pub fn load_settings_from_path(path: &Path) -> Result<CourierSettings> {
    let mut settings = load_file_layer(path)?;
    apply_env_overrides(&mut settings);
    Ok(settings)
}

fn load_file_layer(path: &Path) -> Result<CourierSettings> {
    let mut merged = serde_json::to_value(CourierSettings::default())?;
    if path.is_file() {
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let user: Value = serde_json::from_str(&text)?;
        debug!(path = %path.display(), "merging user settings");
        deep_merge(&mut merged, user);
    } else {
        debug!(path = %path.display(), "no settings file, using defaults");
    }
    Ok(serde_json::from_value(merged)?)
}

/// Merge `overlay` into `base` in place.
pub fn deep_merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (_, Value::Null) => {}
        (Value::Object(base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(slot) => deep_merge(slot, value),
                    None if value.is_null() => {}
                    None => {
                        let _ = base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

/// Apply `COURIER_*` overrides from the process environment.
pub fn apply_env_overrides(settings: &mut CourierSettings) {
    apply_overrides(settings, |name| std::env::var(name).ok());
}

/// Apply overrides from an arbitrary variable lookup.
///
/// Empty values are ignored, so `COURIER_LOG_LEVEL=` keeps the file/default.
pub fn apply_overrides(settings: &mut CourierSettings, lookup: impl Fn(&str) -> Option<String>) {
    let read = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    if let Some(v) = read(ENV_LOG_LEVEL) {
        settings.logging.level = v;
    }
    if let Some(v) = read(ENV_CACHE_BASE_DIR) {
        settings.cache.base_dir = v;
    }
    if let Some(v) = read(ENV_CACHE_IMAGES_DIR) {
        settings.cache.images_subdir = v;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::json;

    use super::*;

    // ── merge ───────────────────────────────────────────────────────

    #[test]
    fn nested_keys_merge_individually() {
        let mut base = json!({"cache": {"baseDir": "messaging", "imagesSubdir": "images"}});
        deep_merge(&mut base, json!({"cache": {"baseDir": "aep"}}));
        assert_eq!(base, json!({"cache": {"baseDir": "aep", "imagesSubdir": "images"}}));
    }

    #[test]
    fn nulls_are_ignored() {
        let mut base = json!({"logging": {"level": "warn"}});
        deep_merge(&mut base, json!({"logging": {"level": null}, "extra": null}));
        assert_eq!(base, json!({"logging": {"level": "warn"}}));
    }

    #[test]
    fn non_objects_replace() {
        let mut base = json!({"logging": {"level": "warn"}, "tags": [1, 2]});
        deep_merge(&mut base, json!({"logging": "off", "tags": [3]}));
        assert_eq!(base, json!({"logging": "off", "tags": [3]}));
    }

    // ── file layer ──────────────────────────────────────────────────

    #[test]
    fn missing_file_returns_defaults() {
        let settings = load_file_layer(Path::new("/nonexistent/settings.json")).unwrap();
        assert_eq!(settings, CourierSettings::default());
    }

    #[test]
    fn partial_file_merges_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"logging": {"level": "debug"}}"#).unwrap();

        let settings = load_file_layer(&path).unwrap();
        assert_eq!(settings.logging.level, "debug");
        assert_eq!(settings.cache.base_dir, "messaging");
    }

    #[test]
    fn invalid_json_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = load_file_layer(&path).unwrap_err();
        assert!(matches!(err, SettingsError::Json(_)));
    }

    // ── overrides ───────────────────────────────────────────────────

    #[test]
    fn overrides_apply_non_empty_values() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (ENV_LOG_LEVEL, "trace"),
            (ENV_CACHE_BASE_DIR, "  "),
            (ENV_CACHE_IMAGES_DIR, "img"),
        ]);
        let mut settings = CourierSettings::default();
        apply_overrides(&mut settings, |name| vars.get(name).map(|v| (*v).to_owned()));

        assert_eq!(settings.logging.level, "trace");
        assert_eq!(settings.cache.base_dir, "messaging");
        assert_eq!(settings.cache.images_subdir, "img");
    }

    #[test]
    fn no_overrides_keeps_settings() {
        let mut settings = CourierSettings::default();
        apply_overrides(&mut settings, |_| None);
        assert_eq!(settings, CourierSettings::default());
    }

    #[test]
    fn settings_path_ends_with_courier_dir() {
        if let Some(path) = settings_path() {
            assert!(path.ends_with(".courier/settings.json"));
        }
    }
}
