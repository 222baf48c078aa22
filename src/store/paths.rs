//! XDG path resolution for the settings file.

use std::path::PathBuf;

use crate::constants::{APP_NAME, SETTINGS_FILENAME, SETTINGS_PATH_ENV};

/// Returns the platform-specific configuration directory for sayer.
///
/// Returns `~/.config/sayer/` on Linux (`XDG_CONFIG_HOME/sayer`), or `None`
/// if the platform's config directory cannot be determined.
pub fn settings_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME))
}

/// Returns the settings file to use when none is given explicitly.
///
/// `SAYER_SETTINGS` wins when set and non-empty; otherwise
/// `~/.config/sayer/settings.toml` on Linux.
pub fn default_settings_path() -> Option<PathBuf> {
    if let Ok(val) = std::env::var(SETTINGS_PATH_ENV) {
        if !val.is_empty() {
            return Some(PathBuf::from(val));
        }
    }
    settings_dir().map(|dir| dir.join(SETTINGS_FILENAME))
}
