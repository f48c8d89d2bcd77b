//! Include computation for generated class headers.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use wrapgen_ir::{Class, Method, Primitive, Type};

use crate::{EngineConfig, NameResolver};

/// Header providing `std::shared_ptr`.
pub const MEMORY_HEADER: &str = "memory";
/// Generated header holding every wrapped enum.
pub const ENUMS_HEADER: &str = "enums";
/// Header providing fixed-width integers.
pub const CSTDINT_HEADER: &str = "cstdint";
/// Header providing `std::string`.
pub const STRING_HEADER: &str = "string";
/// Header providing `std::list`.
pub const LIST_HEADER: &str = "list";

/// Tracks the headers a class needs and deduplicates them.
///
/// Internal headers (one per referenced class) keep first-use order and
/// remember the class they stand for; external headers are sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncludeSet {
    /// Header key (e.g., "proxy_config") -> class name (e.g., "ProxyConfig")
    internal: IndexMap<String, String>,
    external: BTreeSet<String>,
}

impl IncludeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_internal(&mut self, key: impl Into<String>, class_name: impl Into<String>) {
        self.internal
            .entry(key.into())
            .or_insert_with(|| class_name.into());
    }

    pub fn add_external(&mut self, header: impl Into<String>) {
        self.external.insert(header.into());
    }

    pub fn merge(&mut self, other: &IncludeSet) {
        for (key, class_name) in &other.internal {
            self.add_internal(key.clone(), class_name.clone());
        }
        self.external.extend(other.external.iter().cloned());
    }

    pub fn remove_internal(&mut self, key: &str) {
        self.internal.shift_remove(key);
    }

    pub fn has_internal(&self, key: &str) -> bool {
        self.internal.contains_key(key)
    }

    pub fn has_external(&self, header: &str) -> bool {
        self.external.contains(header)
    }

    /// Internal headers as (key, class name), in first-use order.
    pub fn internal(&self) -> impl Iterator<Item = (&str, &str)> {
        self.internal.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// External headers, sorted.
    pub fn external(&self) -> impl Iterator<Item = &str> {
        self.external.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.internal.is_empty() && self.external.is_empty()
    }
}

/// Includes of one class header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassIncludes {
    /// Generated wrapper headers to include.
    pub internal: Vec<String>,
    /// Supporting library headers.
    pub external: Vec<String>,
    /// Classes forward-declared instead of included (hub class only).
    pub prior_declarations: Vec<String>,
}

/// Computes the includes of a class from the types its members mention.
#[derive(Debug, Clone, Copy)]
pub struct DependencyAnalyzer<'a> {
    resolver: NameResolver<'a>,
    config: &'a EngineConfig,
}

impl<'a> DependencyAnalyzer<'a> {
    pub fn new(resolver: NameResolver<'a>, config: &'a EngineConfig) -> Self {
        Self { resolver, config }
    }

    pub fn from_type(&self, ty: &Type) -> IncludeSet {
        let mut res = IncludeSet::new();
        match ty {
            Type::Class(class) => {
                res.add_external(MEMORY_HEADER);
                if let Some(descriptor) = class.descriptor {
                    res.add_internal(
                        self.resolver.names().snake_case(descriptor, false),
                        self.resolver.short(descriptor),
                    );
                }
            }
            Type::Enum(_) => res.add_external(ENUMS_HEADER),
            Type::Base(base) => {
                if base.is_sized_integer() {
                    res.add_external(CSTDINT_HEADER);
                }
                match base.primitive() {
                    Some(Primitive::String) => res.add_external(STRING_HEADER),
                    Some(Primitive::StringArray) => {
                        res.add_external(STRING_HEADER);
                        res.add_external(LIST_HEADER);
                    }
                    _ => {}
                }
            }
            Type::List(list) => {
                res.add_external(LIST_HEADER);
                res.merge(&self.from_type(&list.contained));
            }
        }
        res
    }

    pub fn from_method(&self, method: &Method) -> IncludeSet {
        let mut res = self.from_type(&method.return_type);
        for arg in &method.args {
            res.merge(&self.from_type(&arg.ty));
        }
        res
    }

    /// Includes of `class`, scanning every accessor and method.
    ///
    /// A class never includes its own header. The hub class gets forward
    /// declarations in place of internal includes: every other class
    /// references it, so including them back would form a cycle.
    pub fn analyze(&self, class: &Class) -> ClassIncludes {
        let mut includes = IncludeSet::new();
        for method in class.all_methods() {
            includes.merge(&self.from_method(method));
        }
        includes.remove_internal(&self.resolver.names().snake_case(class.name, false));

        let external = includes.external().map(str::to_string).collect();
        if self.config.is_hub(&self.resolver.c_type(class.name)) {
            ClassIncludes {
                internal: Vec::new(),
                external,
                prior_declarations: includes
                    .internal()
                    .map(|(_, class_name)| class_name.to_string())
                    .collect(),
            }
        } else {
            ClassIncludes {
                internal: includes.internal().map(|(key, _)| key.to_string()).collect(),
                external,
                prior_declarations: Vec::new(),
            }
        }
    }
}
