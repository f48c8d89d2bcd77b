//! Abstract API model for the wrapgen binding generator.
//!
//! This crate defines the language-neutral description of a C-style object
//! API that the translation engine consumes. The model is built and fully
//! resolved by a loader before any translation runs, and is never mutated
//! afterwards.
//!
//! # Architecture
//!
//! ```text
//! api.json → wrapgen-manifest (loading, resolution) → wrapgen-ir (Api) → wrapgen-codegen
//! ```
//!
//! Names are not strings: every declared entity carries a [`NameId`] into
//! the [`NameArena`], a chain of word segments linked to their parent
//! scope. All spellings (CamelCase, snake_case, concatenated) are derived
//! from that chain on demand.

mod api;
mod name;
mod types;

pub use api::{Api, Argument, Class, Enum, EnumValue, Method, MethodKind, Namespace, Property};
pub use name::{Ancestors, NameArena, NameId, NameKind, NameSegment};
pub use types::{BaseType, ClassType, EnumType, ListType, Primitive, Type, TypeSize};
