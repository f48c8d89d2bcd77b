//! JSON description of an API model, as read from disk.
//!
//! Names are snake_case strings; type references name the C-level type
//! they point to and are resolved during lowering.

use std::{path::Path, str::FromStr};

use serde::Deserialize;

use crate::{Error, Result, error::SourceContext, lower};

/// Root of a model description.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelDescription {
    pub namespaces: Vec<NamespaceDescription>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamespaceDescription {
    pub name: String,
    #[serde(default)]
    pub enums: Vec<EnumDescription>,
    #[serde(default)]
    pub classes: Vec<ClassDescription>,
    #[serde(default)]
    pub namespaces: Vec<NamespaceDescription>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumDescription {
    pub name: String,
    #[serde(default)]
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassDescription {
    pub name: String,
    #[serde(default)]
    pub properties: Vec<PropertyDescription>,
    #[serde(default)]
    pub instance_methods: Vec<MethodDescription>,
    #[serde(default)]
    pub class_methods: Vec<MethodDescription>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropertyDescription {
    pub name: String,
    pub getter: Option<MethodDescription>,
    pub setter: Option<MethodDescription>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MethodDescription {
    pub name: String,
    #[serde(default, rename = "const")]
    pub is_const: bool,
    /// Absent means `void`
    #[serde(default, rename = "return")]
    pub return_type: Option<TypeDescription>,
    #[serde(default)]
    pub args: Vec<ArgumentDescription>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArgumentDescription {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeDescription,
}

/// A type reference, tagged by `kind`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TypeDescription {
    Base {
        name: String,
        #[serde(default)]
        size: Option<SizeDescription>,
        #[serde(default, rename = "const")]
        is_const: bool,
        #[serde(default, rename = "unsigned")]
        is_unsigned: bool,
        #[serde(default, rename = "ref")]
        is_ref: bool,
    },
    Enum {
        name: String,
    },
    Class {
        name: String,
        #[serde(default, rename = "const")]
        is_const: bool,
    },
    List {
        contained: Box<TypeDescription>,
    },
}

/// Width of a numeric base type: a bit count or a verbatim name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SizeDescription {
    Bits(u8),
    Named(String),
}

impl FromStr for ModelDescription {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_model(s, "api.json")
    }
}

impl ModelDescription {
    /// Parse a model description file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        parse_model(&content, &path.display().to_string())
    }

    /// Parse a model description from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_model(content, filename)
    }

    /// Build the resolved [`wrapgen_ir::Api`].
    pub fn lower(&self) -> wrapgen_ir::Api {
        lower::lower(self)
    }
}

/// Parse a model description from content with the given filename for error reporting.
pub fn parse_model(content: &str, filename: &str) -> Result<ModelDescription> {
    let ctx = SourceContext::new(content, filename);
    let model: ModelDescription =
        serde_json::from_str(content).map_err(|e| ctx.model_error(e))?;
    validate_model(&model, &ctx)?;
    Ok(model)
}

fn validate_model(model: &ModelDescription, ctx: &SourceContext) -> Result<()> {
    if model.namespaces.is_empty() {
        return Err(Box::new(Error::EmptyModel {
            filename: ctx.filename().to_string(),
        }));
    }
    let mut declared = Vec::new();
    for ns in &model.namespaces {
        validate_namespace(ns, &[], &mut declared, ctx)?;
    }
    Ok(())
}

/// Reject empty names and types declared twice under the same full name.
fn validate_namespace(
    ns: &NamespaceDescription,
    parents: &[&str],
    declared: &mut Vec<String>,
    ctx: &SourceContext,
) -> Result<()> {
    let mut path = parents.to_vec();
    path.push(ns.name.as_str());

    let names = std::iter::once(&ns.name)
        .chain(ns.enums.iter().map(|e| &e.name))
        .chain(ns.classes.iter().map(|c| &c.name));
    for name in names {
        if name.split('_').any(str::is_empty) {
            return Err(ctx.validation_error(format!(
                "invalid name '{}' in namespace '{}'",
                name,
                path.join("::")
            )));
        }
    }

    for type_name in ns
        .enums
        .iter()
        .map(|e| &e.name)
        .chain(ns.classes.iter().map(|c| &c.name))
    {
        let full = format!("{}_{}", path.join("_"), type_name);
        if declared.contains(&full) {
            return Err(ctx.validation_error(format!(
                "'{}' is declared twice in namespace '{}'",
                type_name,
                path.join("::")
            )));
        }
        declared.push(full);
    }

    for child in &ns.namespaces {
        validate_namespace(child, &path, declared, ctx)?;
    }
    Ok(())
}
