//! Core utilities and types for the sharpgen C# class generator.
//!
//! This crate owns everything that touches the filesystem: generated files
//! are handed over as ordered lines plus a path, and written here.

mod file;
mod naming;

// File operations
pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult};
// Naming utilities
pub use naming::{source_file_name, to_pascal_case};
