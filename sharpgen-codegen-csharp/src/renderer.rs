//! C# implementation of DeclarationRenderer.

use sharpgen_codegen::{DeclarationRenderer, Indent};
use sharpgen_ir::ClassDescriptor;

use crate::Class;

/// Renders class descriptors to C# source lines.
///
/// Braces go on their own lines and each nesting level is indented by one
/// [`Indent`] unit (four spaces unless configured otherwise).
#[derive(Debug, Clone, Copy, Default)]
pub struct CSharpRenderer {
    indent: Indent,
}

impl CSharpRenderer {
    /// Create a renderer with 4-space indentation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with the given indentation.
    ///
    /// Space widths other than 2, 4 and 8 have no exact rendering and fall
    /// back to 4 spaces. A warning is logged when that happens.
    pub fn with_indent(indent: Indent) -> Self {
        if !indent.is_supported() {
            tracing::warn!(?indent, "unsupported indent width, using 4 spaces");
        }
        Self { indent }
    }

    pub fn indent(&self) -> Indent {
        self.indent
    }
}

impl DeclarationRenderer for CSharpRenderer {
    fn render_class(&self, class: &ClassDescriptor) -> Vec<String> {
        Class::from(class).lines(self.indent)
    }
}

#[cfg(test)]
mod tests {
    use sharpgen_ir::{AccessModifier, MethodDescriptor, VariableDescriptor};

    use super::*;

    fn animal() -> ClassDescriptor {
        ClassDescriptor::new("Animal")
            .variable(VariableDescriptor::new(
                AccessModifier::Private,
                "string",
                "name",
            ))
            .method(MethodDescriptor::new(AccessModifier::Public, "void", "Speak"))
    }

    #[test]
    fn test_render_animal() {
        let lines = CSharpRenderer::new().render_class(&animal());
        assert_eq!(
            lines,
            vec![
                "public class Animal",
                "{",
                "    private string name;",
                "    public void Speak()",
                "    {",
                "    }",
                "}",
            ]
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let renderer = CSharpRenderer::new();
        let class = animal();
        assert_eq!(renderer.render_class(&class), renderer.render_class(&class));
    }

    #[test]
    fn test_render_with_compact_indent() {
        let lines = CSharpRenderer::with_indent(Indent::COMPACT).render_class(&animal());
        assert_eq!(lines[2], "  private string name;");
        assert_eq!(lines[3], "  public void Speak()");
        assert_eq!(lines[4], "  {");
        assert_eq!(lines[5], "  }");
    }

    #[test]
    fn test_unsupported_indent_renders_four_spaces() {
        let renderer = CSharpRenderer::with_indent(Indent::Spaces(3));
        assert_eq!(renderer.indent(), Indent::Spaces(3));

        let lines = renderer.render_class(&animal());
        assert_eq!(lines, CSharpRenderer::new().render_class(&animal()));
        assert_eq!(lines[2], "    private string name;");
    }

    #[test]
    fn test_render_empty_class() {
        let class = ClassDescriptor::new("Marker").access(AccessModifier::Internal);
        let lines = CSharpRenderer::new().render_class(&class);
        assert_eq!(lines, vec!["internal class Marker", "{}"]);
    }
}
