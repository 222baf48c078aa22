//! Error type shared by every sayer component.

use thiserror::Error;

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, SettingsError>;

/// Everything that can go wrong while resolving, writing or loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// No qualified candidate nor the bare name matched a field.
    #[error("Setting '{name}' not found for type {type_name}. Section name is '{section}'")]
    NotFound {
        /// Setting name as requested, without qualifier.
        name: String,
        /// Bound type, or `none`.
        type_name: String,
        /// Section that was searched.
        section: String,
    },

    /// The bound section identifier does not resolve in the store.
    #[error("No settings section found for section name '{section}'.")]
    SectionNotFound {
        /// Section identifier the resolver is bound to.
        section: String,
    },

    /// A field was found but its text does not parse as the requested type.
    #[error("'{value}' is not a valid value for {type_name}: {reason}")]
    Conversion {
        /// Fully qualified name of the matching field.
        field: String,
        /// Stored text that failed to parse.
        value: String,
        /// Requested type.
        type_name: &'static str,
        /// Parser message.
        reason: String,
    },

    /// A field was created with an empty name.
    #[error("Field names must not be empty")]
    EmptyFieldName,

    /// A field with this name is already in the section.
    #[error("Field '{0}' already exists in this section")]
    DuplicateField(String),

    /// Reading or writing the settings file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file is not valid TOML or has the wrong shape.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// The store could not be rendered as TOML.
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl SettingsError {
    /// True for the "nothing matched" failure, as opposed to malformed data.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SettingsError::NotFound { .. })
    }
}
