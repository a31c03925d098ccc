//! Code builder utility for generating properly indented lines.

use super::{CodeFragment, Indent, Renderable};

/// Builds code as an ordered list of indented lines.
///
/// Nodes are lowered to [`CodeFragment`]s and applied with [`emit`](Self::emit);
/// the `push_` methods write lines directly.
///
/// # Example
///
/// ```
/// use sharpgen_codegen::builder::{CodeBuilder, Indent};
///
/// let mut builder = CodeBuilder::new(Indent::CSHARP);
/// builder
///     .push_line("public class Foo")
///     .push_line("{")
///     .push_indent()
///     .push_line("private int bar;")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(
///     builder.into_lines(),
///     vec!["public class Foo", "{", "    private int bar;", "}"]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    lines: Vec<String>,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            lines: Vec::new(),
        }
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        let mut line = self.indent.as_str().repeat(self.indent_level);
        line.push_str(s);
        self.lines.push(line);
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
        }
    }

    /// Get the lines emitted so far.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consume the builder and return the generated lines.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}
