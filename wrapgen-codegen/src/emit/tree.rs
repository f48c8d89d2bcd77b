//! Output trees handed to the template renderer.
//!
//! Every tree is plain data: strings, flags and lists, serialized as-is.

use serde::Serialize;

/// One translated method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodRecord {
    /// In-class declaration.
    pub prototype: String,
    /// Out-of-line definition header.
    pub impl_prototype: String,
    /// Bridge body.
    pub source_code: String,
}

/// One translated class: instance members then static members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassRecord {
    pub name: String,
    pub methods: Vec<MethodRecord>,
    pub static_methods: Vec<MethodRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumValueRecord {
    pub name: String,
    pub not_last: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumRecord {
    pub name: String,
    pub values: Vec<EnumValueRecord>,
}

/// A `{ name }` entry, the shape templates iterate over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameEntry {
    pub name: String,
}

impl NameEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

fn entries(names: Vec<String>) -> Vec<NameEntry> {
    names.into_iter().map(NameEntry::new).collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Includes {
    pub internal: Vec<NameEntry>,
    pub external: Vec<NameEntry>,
}

impl Includes {
    pub fn new(internal: Vec<String>, external: Vec<String>) -> Self {
        Self {
            internal: entries(internal),
            external: entries(external),
        }
    }
}

/// The header holding every enum.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EnumsHeader {
    pub enums: Vec<EnumRecord>,
}

/// The header of one wrapper class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassHeader {
    pub class: ClassRecord,
    pub includes: Includes,
    pub prior_declarations: Vec<NameEntry>,
    /// Include guard (e.g., "_PROXY_CONFIG_HH").
    pub define: String,
    pub filename: String,
    /// The wrapped C type (e.g., "LinphoneProxyConfig").
    pub private_type: String,
}

/// The implementation unit of one wrapper class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassImpl {
    pub class: ClassRecord,
    pub filename: String,
    pub internal_includes: Vec<NameEntry>,
    /// Namespace the definitions live in (e.g., "linphone").
    pub namespace: Option<String>,
}

/// The aggregate header including every class header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MainHeader {
    pub define: String,
    pub includes: Vec<NameEntry>,
}

impl MainHeader {
    pub fn new(define: impl Into<String>) -> Self {
        Self {
            define: define.into(),
            includes: Vec::new(),
        }
    }

    pub fn add_include(&mut self, include: impl Into<String>) {
        self.includes.push(NameEntry::new(include));
    }
}
