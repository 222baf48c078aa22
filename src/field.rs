//! A single stored setting: a name/value string pair.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SettingsError};

/// One setting record.
///
/// The name may be bare (`LogLevel`) or qualified with a type chain
/// (`Base.Derived.LogLevel`). Fields are immutable; writing a setting
/// replaces the whole field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawField")]
pub struct Field {
    name: String,
    value: String,
}

/// Unvalidated shape read from disk.
#[derive(Deserialize)]
struct RawField {
    name: String,
    value: String,
}

impl TryFrom<RawField> for Field {
    type Error = SettingsError;

    fn try_from(raw: RawField) -> Result<Self> {
        Field::new(raw.name, raw.value)
    }
}

impl Field {
    /// Creates a field, rejecting an empty name.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(SettingsError::EmptyFieldName);
        }
        Ok(Self {
            name,
            value: value.into(),
        })
    }

    /// Bare or qualified setting name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stored text.
    pub fn value(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_rejected() {
        let err = Field::new("", "x").unwrap_err();
        assert!(matches!(err, SettingsError::EmptyFieldName));
    }

    #[test]
    fn test_empty_value_allowed() {
        let field = Field::new("Blank", "").unwrap();
        assert_eq!(field.name(), "Blank");
        assert_eq!(field.value(), "");
    }

    #[test]
    fn test_deserialize_validates_name() {
        let ok: Field = toml::from_str("name = \"A\"\nvalue = \"1\"").unwrap();
        assert_eq!(ok, Field::new("A", "1").unwrap());

        let bad = toml::from_str::<Field>("name = \"\"\nvalue = \"1\"");
        assert!(bad.is_err());
    }
}
