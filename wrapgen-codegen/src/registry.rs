//! Escape and ambiguity lists.

use std::collections::BTreeSet;

use wrapgen_ir::{NameArena, Type};

/// Symbols to skip and type names forced to global-namespace resolution.
///
/// The registry is an explicit value handed to the engine; nothing here is
/// process-wide, so several configurations can run side by side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    escaped: BTreeSet<String>,
    ambiguous: BTreeSet<String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add fully qualified symbols to skip.
    ///
    /// Methods are matched by their full snake_case name
    /// (`linphone_core_get_default_proxy`), classes by their full C-level
    /// name (`LinphoneBuffer`).
    pub fn escape<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.escaped.extend(symbols.into_iter().map(Into::into));
        self
    }

    /// Add C-level type names that collide with another scope.
    pub fn ambiguous<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ambiguous.extend(types.into_iter().map(Into::into));
        self
    }

    pub fn is_escaped(&self, symbol: &str) -> bool {
        self.escaped.contains(symbol)
    }

    /// Whether a type must be spelled from the global namespace.
    ///
    /// Lists inherit ambiguity from their contained type.
    pub fn is_ambiguous(&self, names: &NameArena, ty: &Type) -> bool {
        match ty {
            Type::Base(_) => false,
            Type::Enum(e) => self.is_ambiguous_name(names, &e.name, e.descriptor),
            Type::Class(c) => self.is_ambiguous_name(names, &c.name, c.descriptor),
            Type::List(l) => self.is_ambiguous(names, &l.contained),
        }
    }

    fn is_ambiguous_name(
        &self,
        names: &NameArena,
        written: &str,
        descriptor: Option<wrapgen_ir::NameId>,
    ) -> bool {
        self.ambiguous.contains(written)
            || descriptor.is_some_and(|id| self.ambiguous.contains(&names.camel_case(id, true)))
    }

    pub fn escaped_symbols(&self) -> impl Iterator<Item = &str> {
        self.escaped.iter().map(String::as_str)
    }

    pub fn ambiguous_types(&self) -> impl Iterator<Item = &str> {
        self.ambiguous.iter().map(String::as_str)
    }
}
