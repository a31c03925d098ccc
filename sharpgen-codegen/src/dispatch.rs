//! Artifact kind dispatch.

use sharpgen_ir::{ArtifactKind, ClassDescriptor};

/// Trait for rendering declarations to a target language.
///
/// Implement this trait to support a new target language. There is one
/// method per artifact kind that has a rendering contract.
pub trait DeclarationRenderer {
    /// Render a class declaration to ordered source lines.
    fn render_class(&self, class: &ClassDescriptor) -> Vec<String>;
}

/// Render `class` as the requested artifact kind.
///
/// Only [`ArtifactKind::Class`] renders anything. Every other kind is a
/// defined no-op that yields an empty sequence, not an error.
pub fn dispatch<R>(renderer: &R, kind: ArtifactKind, class: &ClassDescriptor) -> Vec<String>
where
    R: DeclarationRenderer + ?Sized,
{
    match kind {
        ArtifactKind::Class => renderer.render_class(class),
        // Not yet implemented.
        ArtifactKind::Interface
        | ArtifactKind::Enum
        | ArtifactKind::Struct
        | ArtifactKind::EmptyFile => {
            tracing::debug!(%kind, class = %class.name, "artifact kind has no renderer");
            Vec::new()
        }
    }
}
