//! Backing stores that hold sections of fields.
//!
//! The resolver only sees the [`SettingStore`] capability. Two stores ship
//! with the crate: [`MemoryStore`] keeps sections in memory, and
//! [`FileStore`] persists them as a TOML document.

mod file;
mod paths;

pub use file::FileStore;
pub use paths::{default_settings_path, settings_dir};

use indexmap::IndexMap;
use std::sync::{PoisonError, RwLock};

use crate::section::Section;

/// Access to sections by identifier.
///
/// Both methods return `false` when the section does not exist, in which
/// case the visitor is never called. Implementations own any locking
/// needed to share the store between resolvers.
pub trait SettingStore {
    /// Runs `visit` against the section for reading.
    fn with_section(&self, id: &str, visit: &mut dyn FnMut(&Section)) -> bool;

    /// Runs `visit` against the section for mutation.
    fn with_section_mut(&self, id: &str, visit: &mut dyn FnMut(&mut Section)) -> bool;
}

/// Section map guarded by a lock so it can sit behind an `Arc`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    sections: RwLock<IndexMap<String, Section>>,
}

impl MemoryStore {
    /// Creates a store with no sections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from `(id, section)` pairs.
    pub fn from_sections<I, K>(sections: I) -> Self
    where
        I: IntoIterator<Item = (K, Section)>,
        K: Into<String>,
    {
        Self {
            sections: RwLock::new(
                sections
                    .into_iter()
                    .map(|(id, section)| (id.into(), section))
                    .collect(),
            ),
        }
    }

    /// Adds or replaces a whole section.
    pub fn insert_section(&self, id: impl Into<String>, section: Section) -> Option<Section> {
        self.sections
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.into(), section)
    }

    /// Creates an empty section unless one already exists.
    /// Returns `true` if a section was created.
    pub fn create_section(&self, id: &str) -> bool {
        let mut sections = self.sections.write().unwrap_or_else(PoisonError::into_inner);
        if sections.contains_key(id) {
            return false;
        }
        sections.insert(id.to_string(), Section::new());
        true
    }

    /// Section identifiers in insertion order.
    pub fn section_names(&self) -> Vec<String> {
        self.sections
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }

    /// Clones the current section map, used when persisting.
    pub(crate) fn snapshot(&self) -> IndexMap<String, Section> {
        self.sections
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl SettingStore for MemoryStore {
    fn with_section(&self, id: &str, visit: &mut dyn FnMut(&Section)) -> bool {
        let sections = self.sections.read().unwrap_or_else(PoisonError::into_inner);
        match sections.get(id) {
            Some(section) => {
                visit(section);
                true
            }
            None => false,
        }
    }

    fn with_section_mut(&self, id: &str, visit: &mut dyn FnMut(&mut Section)) -> bool {
        let mut sections = self.sections.write().unwrap_or_else(PoisonError::into_inner);
        match sections.get_mut(id) {
            Some(section) => {
                visit(section);
                true
            }
            None => false,
        }
    }
}
