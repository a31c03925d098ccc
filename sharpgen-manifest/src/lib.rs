// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Class manifest (`class.toml`) parsing and validation.
//!
//! A manifest describes one class to generate plus output settings. Parsing
//! goes through serde, then a validation pass checks identifiers, type names
//! and duplicate members, reporting errors with spans into the TOML source.

mod error;
mod manifest;
mod template;
mod validate;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    ClassConfig, ClassToml, FieldConfig, Manifest, MethodConfig, OutputConfig, ParamConfig,
    ParseContext, parse_manifest,
};
pub use template::StarterManifest;
