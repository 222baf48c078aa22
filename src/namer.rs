//! Dotted qualifiers built from a type's in-unit ancestor chain.

use crate::constants::QUALIFIER_SEPARATOR;
use crate::types::TypeDescriptor;

/// Builds qualifiers for types, bounded to the code unit of an origin type.
#[derive(Debug, Clone, Copy)]
pub struct TypeChainNamer<'a> {
    origin: Option<&'a TypeDescriptor>,
}

impl<'a> TypeChainNamer<'a> {
    /// The boundary is `origin`'s unit. Without an origin every qualifier
    /// is empty.
    pub fn new(origin: Option<&'a TypeDescriptor>) -> Self {
        Self { origin }
    }

    fn in_scope(&self, ty: &TypeDescriptor) -> bool {
        self.origin.is_some_and(|origin| origin.unit() == ty.unit())
    }

    /// Returns `Outer.Middle.Leaf` for `ty`, stopping at the first ancestor
    /// outside the boundary. Empty when `ty` is absent or out of scope.
    pub fn build_qualifier(&self, ty: Option<&TypeDescriptor>) -> String {
        let Some(ty) = ty else {
            return String::new();
        };
        let mut names: Vec<&str> = ty
            .ancestry()
            .take_while(|t| self.in_scope(t))
            .map(TypeDescriptor::name)
            .collect();
        names.reverse();
        names.join(QUALIFIER_SEPARATOR)
    }

    /// Every qualifier the read path tries, most specific first, ending
    /// with the empty qualifier for the bare name.
    pub fn candidates(&self) -> Vec<String> {
        let mut out: Vec<String> = self
            .origin
            .into_iter()
            .flat_map(TypeDescriptor::ancestry)
            .take_while(|t| self.in_scope(t))
            .map(|t| self.build_qualifier(Some(t)))
            .collect();
        out.push(String::new());
        out
    }
}

/// Joins a qualifier and a setting name into a field name.
pub fn qualify(qualifier: &str, setting_name: &str) -> String {
    if qualifier.is_empty() {
        setting_name.to_string()
    } else {
        format!("{qualifier}{QUALIFIER_SEPARATOR}{setting_name}")
    }
}
