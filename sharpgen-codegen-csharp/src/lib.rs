mod access;
mod generator;
mod renderer;

pub mod ast;
pub mod files;

pub use access::access_keyword;
pub use ast::{Class, Field, Method, Param};
pub use generator::Generator;
pub use renderer::CSharpRenderer;
pub use sharpgen_codegen::{GenerateResult, LanguageCodegen, PreviewFile};
use sharpgen_ir::{ArtifactKind, ClassDescriptor};

/// Render `class` as the requested artifact kind with default C# formatting.
///
/// Returns an empty sequence for every kind other than [`ArtifactKind::Class`].
pub fn generate(kind: ArtifactKind, class: &ClassDescriptor) -> Vec<String> {
    sharpgen_codegen::dispatch(&CSharpRenderer::new(), kind, class)
}
