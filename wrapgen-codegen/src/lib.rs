//! C++ wrapper translation engine for the wrapgen binding generator.
//!
//! Takes a resolved [`wrapgen_ir::Api`] and turns every class and enum of
//! a flat C API into plain-data trees describing an object-oriented C++
//! wrapper: declarations, out-of-line definitions, bridge bodies calling
//! the C entry points, and the includes each header needs.
//!
//! # Module Organization
//!
//! - [`NameResolver`] - C++ and C spellings of model names
//! - [`TypeMapper`] - C++ spelling of abstract types in a given context
//! - [`SignatureBuilder`] - declaration and definition prototypes
//! - [`BridgeGenerator`] - bridge bodies marshalling to and from C
//! - [`DependencyAnalyzer`] - internal and external includes of a class
//! - [`Registry`] - escaped symbols and ambiguous types
//! - [`emit`] - output trees and the [`Generator`] driving a whole run
//!
//! Translation failures never abort a run: a failing member is dropped
//! from its class and a failing class or enum from the output, each with
//! a [`Diagnostic`].

mod bridge;
mod config;
mod dependencies;
mod diagnostic;
pub mod emit;
mod error;
mod naming;
mod registry;
mod signature;
mod translator;
mod type_mapper;

pub use bridge::BridgeGenerator;
pub use config::EngineConfig;
pub use dependencies::{
    CSTDINT_HEADER, ClassIncludes, DependencyAnalyzer, ENUMS_HEADER, IncludeSet, LIST_HEADER,
    MEMORY_HEADER, STRING_HEADER,
};
pub use diagnostic::{Diagnostic, Severity};
pub use emit::{Artifact, GenerationOutput, Generator};
pub use error::{Error, Result};
pub use naming::{NameResolver, is_reserved, safe_name};
pub use registry::Registry;
pub use signature::{MethodSignature, SignatureBuilder};
pub use translator::Translator;
pub use type_mapper::{Position, Scope, TypeContext, TypeMapper};
