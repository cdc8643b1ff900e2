//! Settings errors.

use std::path::PathBuf;

use thiserror::Error;

/// Why settings could not be loaded.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file exists but could not be read.
    #[error("cannot read settings file {}: {source}", path.display())]
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid JSON, or does not fit the settings shape.
    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Settings result alias.
pub type Result<T> = std::result::Result<T, SettingsError>;

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn read_error_names_the_file() {
        let err = SettingsError::Read {
            path: PathBuf::from("/etc/courier.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let text = err.to_string();
        assert!(text.contains("/etc/courier.json"));
        assert!(text.contains("denied"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn json_errors_convert() {
        let err: SettingsError = serde_json::from_str::<serde_json::Value>("{bad}")
            .unwrap_err()
            .into();
        assert!(err.to_string().starts_with("invalid settings JSON"));
    }
}
