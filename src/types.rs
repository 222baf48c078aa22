//! Type descriptors: a type name, the code unit that defines it, and its
//! base type.
//!
//! A resolver bound to a descriptor qualifies setting names with the chain
//! of ancestors that live in the same unit as the bound type. Ancestors in
//! other units (framework or library base types) are never part of a name.

use std::fmt;
use std::sync::Arc;

/// A type and its ancestor chain.
///
/// Cheap to clone; the base chain is shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    name: String,
    unit: String,
    base: Option<Arc<TypeDescriptor>>,
}

impl TypeDescriptor {
    /// A root type with no base.
    pub fn new(name: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            base: None,
        }
    }

    /// Sets the direct base type.
    pub fn with_base(mut self, base: TypeDescriptor) -> Self {
        self.base = Some(Arc::new(base));
        self
    }

    /// Builds a chain inside one unit from names listed outermost first,
    /// so `["Base", "Derived"]` yields `Derived` with base `Base`.
    ///
    /// Returns `None` for an empty list.
    pub fn chain<I, S>(unit: &str, names: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().fold(None, |base, name| {
            let ty = TypeDescriptor::new(name, unit);
            Some(match base {
                Some(base) => ty.with_base(base),
                None => ty,
            })
        })
    }

    /// Simple type name, used as one qualifier level.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Code unit that defines the type.
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Direct base type, if any.
    pub fn base(&self) -> Option<&TypeDescriptor> {
        self.base.as_deref()
    }

    /// Walks from this type up through every base, self first.
    pub fn ancestry(&self) -> Ancestry<'_> {
        Ancestry { next: Some(self) }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.unit, self.name)
    }
}

/// Iterator over a type and its bases, most derived first.
#[derive(Debug, Clone)]
pub struct Ancestry<'a> {
    next: Option<&'a TypeDescriptor>,
}

impl<'a> Iterator for Ancestry<'a> {
    type Item = &'a TypeDescriptor;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.base();
        Some(current)
    }
}
