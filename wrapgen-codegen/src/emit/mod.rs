//! Output trees and the drivers that assemble them.

mod generator;
mod tree;

pub use generator::{Artifact, ClassArtifacts, ENUMS_FILENAME, GenerationOutput, Generator};
pub use tree::{
    ClassHeader, ClassImpl, ClassRecord, EnumRecord, EnumValueRecord, EnumsHeader, Includes,
    MainHeader, MethodRecord, NameEntry,
};
