//! Configuration and model loading for the wrapgen binding generator.
//!
//! - [`Config`] parses and validates `wrapgen.toml` and turns it into the
//!   engine's [`wrapgen_codegen::EngineConfig`].
//! - [`ModelDescription`] parses the JSON model description and lowers it
//!   into a resolved [`wrapgen_ir::Api`].
//!
//! Errors are [`miette`] diagnostics pointing into the offending file.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod lower;
mod model;

pub use config::{
    AmbiguityConfig, CONFIG_FILENAME, Config, EscapeConfig, GeneratorConfig, parse_config,
};
pub use error::{Error, Result, SourceContext};
pub use model::{
    ArgumentDescription, ClassDescription, EnumDescription, MethodDescription, ModelDescription,
    NamespaceDescription, PropertyDescription, SizeDescription, TypeDescription, parse_model,
};
