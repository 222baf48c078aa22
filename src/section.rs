//! Ordered, unique-keyed collection of fields.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SettingsError};
use crate::field::Field;

/// The fields stored under one section identifier.
///
/// Iteration follows insertion order. Replacing a field keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SectionDoc", into = "SectionDoc")]
pub struct Section {
    fields: IndexMap<String, Field>,
}

/// On-disk shape of a section: `field = [{ name, value }, ...]`.
#[derive(Serialize, Deserialize)]
struct SectionDoc {
    #[serde(default, rename = "field")]
    fields: Vec<Field>,
}

impl TryFrom<SectionDoc> for Section {
    type Error = SettingsError;

    fn try_from(doc: SectionDoc) -> Result<Self> {
        let mut section = Section::new();
        for field in doc.fields {
            section.add(field)?;
        }
        Ok(section)
    }
}

impl From<Section> for SectionDoc {
    fn from(section: Section) -> Self {
        SectionDoc {
            fields: section.fields.into_values().collect(),
        }
    }
}

impl Section {
    /// Creates an empty section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterates fields in store order.
    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.values()
    }

    /// Field with exactly this name.
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// True if a field with exactly this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Adds a new field. Fails if a field with the same name exists.
    pub fn add(&mut self, field: Field) -> Result<()> {
        if self.fields.contains_key(field.name()) {
            return Err(SettingsError::DuplicateField(field.name().to_string()));
        }
        self.fields.insert(field.name().to_string(), field);
        Ok(())
    }

    /// Inserts or replaces a field, returning the one it displaced.
    pub fn set(&mut self, field: Field) -> Option<Field> {
        self.fields.insert(field.name().to_string(), field)
    }

    /// Removes a field by name, keeping the order of the rest.
    pub fn remove(&mut self, name: &str) -> Option<Field> {
        self.fields.shift_remove(name)
    }

    /// Removes every field.
    pub fn clear(&mut self) {
        self.fields.clear();
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the section holds no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
