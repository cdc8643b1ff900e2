//! On-device asset cache layout.

use std::path::{Path, PathBuf};

use courier_settings::CacheSettings;
use tracing::debug;

/// Directory for cached message images: `<app_cache_dir>/<base_dir>/<images_subdir>`.
///
/// `None` when the host reports no application cache directory.
pub fn asset_cache_location(app_cache_dir: Option<&Path>, settings: &CacheSettings) -> Option<PathBuf> {
    let Some(app_cache_dir) = app_cache_dir else {
        debug!("application cache directory is unavailable");
        return None;
    };
    Some(
        app_cache_dir
            .join(&settings.base_dir)
            .join(&settings.images_subdir),
    )
}
