//! Core types for the stackforge project scaffolder.
//!
//! This crate provides the output side of generation: the resolved
//! [`GeneratedFile`], its display [`Language`] tag, and the rules used
//! when a generated tree is written to disk.

mod file;
mod language;

// File operations
pub use file::{GeneratedFile, Overwrite, WriteResult, write_file};
// Display tags
pub use language::Language;
