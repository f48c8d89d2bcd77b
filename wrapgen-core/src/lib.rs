//! Core utilities for the wrapgen binding generator.
//!
//! This crate provides the word-level case helpers every name projection
//! is built from, and the file writer used to persist generated artifacts.

mod file;
mod utils;

// File operations
pub use file::{File, Overwrite, WriteResult};
// Word utilities
pub use utils::{capitalize, concatenate_words, join_camel_case, join_snake_case, split_words};
