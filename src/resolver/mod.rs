//! Type-scoped setting lookup and write-back.
//!
//! A [`SettingResolver`] is bound to one section and, optionally, one type.
//! Reads try the most specific qualified name first and fall back through
//! the type's in-unit ancestors to the bare setting name:
//!
//! ```text
//! Base.Intermediate.Derived.LogLevel
//! Base.Intermediate.LogLevel
//! Base.LogLevel
//! LogLevel
//! ```
//!
//! Writes always use the fully qualified name for the bound type.

use std::sync::Arc;

use crate::constants::NO_TYPE;
use crate::convert::SettingValue;
use crate::error::{Result, SettingsError};
use crate::field::Field;
use crate::namer::{qualify, TypeChainNamer};
use crate::section::Section;
use crate::store::SettingStore;
use crate::types::TypeDescriptor;

/// Resolves settings from one section of a shared store.
pub struct SettingResolver<S: ?Sized> {
    store: Arc<S>,
    section_name: String,
    origin: Option<TypeDescriptor>,
}

impl<S: SettingStore + ?Sized> SettingResolver<S> {
    /// Binds a resolver to `section_name` and, when given, to `origin`.
    /// Without an origin only bare setting names are used.
    pub fn new(
        store: Arc<S>,
        section_name: impl Into<String>,
        origin: Option<TypeDescriptor>,
    ) -> Self {
        Self {
            store,
            section_name: section_name.into(),
            origin,
        }
    }

    /// Section identifier this resolver reads and writes.
    pub fn section_name(&self) -> &str {
        &self.section_name
    }

    /// Bound type, if any.
    pub fn origin(&self) -> Option<&TypeDescriptor> {
        self.origin.as_ref()
    }

    fn namer(&self) -> TypeChainNamer<'_> {
        TypeChainNamer::new(self.origin.as_ref())
    }

    /// Field names tried for `setting_name`, in lookup order.
    pub fn candidate_names(&self, setting_name: &str) -> Vec<String> {
        self.namer()
            .candidates()
            .iter()
            .map(|qualifier| qualify(qualifier, setting_name))
            .collect()
    }

    /// Field name `set` writes for `setting_name`: the full qualifier for
    /// the bound type, or the bare name when unbound.
    pub fn qualified_name(&self, setting_name: &str) -> String {
        let qualifier = self.namer().build_qualifier(self.origin.as_ref());
        qualify(&qualifier, setting_name)
    }

    /// Returns the first field matching a candidate name, without converting it.
    pub fn find(&self, setting_name: &str) -> Result<Option<Field>> {
        let candidates = self.candidate_names(setting_name);
        self.read_section(|section| {
            candidates.iter().find_map(|candidate| {
                let hit = section.get(candidate);
                log::debug!(
                    "[{}] probe '{}': {}",
                    self.section_name,
                    candidate,
                    if hit.is_some() { "hit" } else { "miss" }
                );
                hit.cloned()
            })
        })
    }

    /// Looks up a setting, returning `Ok(None)` when no candidate matches.
    ///
    /// # Errors
    ///
    /// Fails with [`SettingsError::SectionNotFound`] if the section is missing
    /// and [`SettingsError::Conversion`] if the matching value does not parse.
    pub fn try_get<T: SettingValue>(&self, setting_name: &str) -> Result<Option<T>> {
        let Some(field) = self.find(setting_name)? else {
            return Ok(None);
        };
        T::parse_setting(field.value())
            .map(Some)
            .map_err(|reason| SettingsError::Conversion {
                field: field.name().to_string(),
                value: field.value().to_string(),
                type_name: T::TYPE_NAME,
                reason,
            })
    }

    /// Looks up a setting that must exist.
    ///
    /// # Errors
    ///
    /// As [`try_get`](Self::try_get), plus [`SettingsError::NotFound`] when
    /// nothing in the fallback chain matches.
    pub fn get<T: SettingValue>(&self, setting_name: &str) -> Result<T> {
        self.try_get(setting_name)?
            .ok_or_else(|| SettingsError::NotFound {
                name: setting_name.to_string(),
                type_name: self
                    .origin
                    .as_ref()
                    .map_or_else(|| NO_TYPE.to_string(), ToString::to_string),
                section: self.section_name.clone(),
            })
    }

    /// Stores `value` under the fully qualified name for the bound type,
    /// replacing any field with that exact name. Fields at other levels
    /// are left alone.
    pub fn set<T: SettingValue>(&self, setting_name: &str, value: T) -> Result<()> {
        let field = Field::new(self.qualified_name(setting_name), value.format_setting())?;
        log::debug!(
            "[{}] set '{}' = '{}'",
            self.section_name,
            field.name(),
            field.value()
        );
        self.write_section(|section| {
            section.set(field);
        })
    }

    /// Snapshot of every field in the bound section, in store order.
    pub fn fields(&self) -> Result<Fields> {
        let fields: Vec<Field> = self.read_section(|section| section.iter().cloned().collect())?;
        log::trace!("[{}] enumerating {} field(s)", self.section_name, fields.len());
        Ok(Fields {
            inner: fields.into_iter(),
        })
    }

    fn section_not_found(&self) -> SettingsError {
        SettingsError::SectionNotFound {
            section: self.section_name.clone(),
        }
    }

    fn read_section<R>(&self, f: impl FnOnce(&Section) -> R) -> Result<R> {
        let mut f = Some(f);
        let mut out = None;
        let found = self.store.with_section(&self.section_name, &mut |section| {
            if let Some(f) = f.take() {
                out = Some(f(section));
            }
        });
        if !found {
            return Err(self.section_not_found());
        }
        out.ok_or_else(|| self.section_not_found())
    }

    fn write_section<R>(&self, f: impl FnOnce(&mut Section) -> R) -> Result<R> {
        let mut f = Some(f);
        let mut out = None;
        let found = self.store.with_section_mut(&self.section_name, &mut |section| {
            if let Some(f) = f.take() {
                out = Some(f(section));
            }
        });
        if !found {
            return Err(self.section_not_found());
        }
        out.ok_or_else(|| self.section_not_found())
    }
}

impl<S: ?Sized> Clone for SettingResolver<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            section_name: self.section_name.clone(),
            origin: self.origin.clone(),
        }
    }
}

/// Fields of a section captured by [`SettingResolver::fields`].
///
/// Clone the iterator to walk the same snapshot again.
#[derive(Debug, Clone)]
pub struct Fields {
    inner: std::vec::IntoIter<Field>,
}

impl Iterator for Fields {
    type Item = Field;

    fn next(&mut self) -> Option<Field> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Fields {}

#[cfg(test)]
mod tests;
