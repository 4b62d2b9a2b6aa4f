//! Platform locations for Reelfind's data and configuration.
//!
//! Storage lives in `<platform data dir>/reelfind` (for example
//! `~/.local/share/reelfind` on Linux). The optional config file is looked up
//! at `<platform config dir>/reelfind/config.toml`.

use std::path::PathBuf;

/// Directory name used under the platform data and config roots.
pub const APP_DIR_NAME: &str = "reelfind";

/// Returns the default storage directory.
///
/// Falls back to `./.reelfind` when the platform exposes no data directory.
///
/// # Examples
///
/// ```
/// use reelfind::infrastructure::default_data_dir;
///
/// assert!(default_data_dir().ends_with("reelfind") || default_data_dir().ends_with(".reelfind"));
/// ```
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from(format!(".{APP_DIR_NAME}")),
        |dir| dir.join(APP_DIR_NAME),
    )
}

/// Returns the default config file path, if the platform has a config dir.
#[must_use]
pub fn default_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_file_is_named_config_toml() {
        if let Some(path) = default_config_file() {
            assert!(path.ends_with("reelfind/config.toml"));
        }
    }
}
