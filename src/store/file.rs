//! TOML-backed settings store.
//!
//! Each top-level table is a section; each section holds a `field` array
//! whose entries carry a `name` and a `value`:
//!
//! ```toml
//! [appSettings]
//! field = [
//!   { name = "LogLevel", value = "info" },
//!   { name = "Worker.LogLevel", value = "debug" },
//! ]
//! ```

use indexmap::IndexMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::{MemoryStore, SettingStore};
use crate::error::Result;
use crate::section::Section;

/// A [`MemoryStore`] loaded from, and saved back to, a TOML file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl FileStore {
    /// Loads the store from `path`. A missing file yields an empty store
    /// that will be created on the first [`save`](Self::save).
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            log::debug!("settings file {:?} does not exist, starting empty", path);
            return Ok(Self {
                path,
                inner: MemoryStore::new(),
            });
        }

        let contents = fs::read_to_string(&path)?;
        let store = Self::from_toml_str(path, &contents)?;
        log::debug!(
            "loaded {} section(s) from {:?}",
            store.inner.section_names().len(),
            store.path
        );
        Ok(store)
    }

    /// Parses a TOML document that will be saved to `path`.
    pub fn from_toml_str(path: impl Into<PathBuf>, contents: &str) -> Result<Self> {
        let sections: IndexMap<String, Section> = toml::from_str(contents)?;
        Ok(Self {
            path: path.into(),
            inner: MemoryStore::from_sections(sections),
        })
    }

    /// Serializes every section to a TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(&self.inner.snapshot())?)
    }

    /// Writes the store to its path, creating parent directories.
    pub fn save(&self) -> Result<()> {
        let contents = self.to_toml_string()?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, contents)?;
        log::debug!("saved settings to {:?}", self.path);
        Ok(())
    }

    /// File the store loads from and saves to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates an empty section unless one already exists.
    pub fn create_section(&self, id: &str) -> bool {
        self.inner.create_section(id)
    }

    /// Section identifiers in file order.
    pub fn section_names(&self) -> Vec<String> {
        self.inner.section_names()
    }
}

impl SettingStore for FileStore {
    fn with_section(&self, id: &str, visit: &mut dyn FnMut(&Section)) -> bool {
        self.inner.with_section(id, visit)
    }

    fn with_section_mut(&self, id: &str, visit: &mut dyn FnMut(&mut Section)) -> bool {
        self.inner.with_section_mut(id, visit)
    }
}
