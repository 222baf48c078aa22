//! Centralized constants for sayer.
//!
//! Default names, separators and environment variable keys live here
//! so they can be changed in one place.

/// Application name used in CLI output and directory paths.
pub const APP_NAME: &str = "sayer";

/// Settings filename inside the platform config directory.
pub const SETTINGS_FILENAME: &str = "settings.toml";

/// Environment variable that overrides the settings file location.
pub const SETTINGS_PATH_ENV: &str = "SAYER_SETTINGS";

/// Section used by the CLI when `--section` is not given.
pub const DEFAULT_SECTION: &str = "appSettings";

/// Code unit assumed by the CLI when `--unit` is not given.
pub const DEFAULT_UNIT: &str = "app";

/// Separator between qualifier levels and the setting name.
pub const QUALIFIER_SEPARATOR: &str = ".";

/// Placeholder used in messages when a resolver is not bound to a type.
pub const NO_TYPE: &str = "none";
