//! Manifest types and parsing for class.toml files.

mod class;
mod file;
mod output;
mod parse;
mod validate;

pub use class::{ClassConfig, FieldConfig, MethodConfig, ParamConfig};
pub use file::ClassToml;
pub use output::OutputConfig;
pub use parse::parse_manifest;
use serde::Deserialize;
use sharpgen_ir::{ArtifactKind, ClassDescriptor};
pub use validate::ParseContext;

/// Root manifest for class.toml
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Kind of artifact to generate
    #[serde(default)]
    pub kind: ArtifactKind,

    /// The class to generate
    pub class: ClassConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl Manifest {
    /// Build the descriptor handed to the renderer.
    pub fn to_descriptor(&self) -> ClassDescriptor {
        self.class.to_descriptor()
    }
}
