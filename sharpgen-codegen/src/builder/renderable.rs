//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! AST nodes lower themselves to fragments; [`CodeBuilder`](super::CodeBuilder)
//! applies indentation and turns fragments into lines.

/// Represents a fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code.
    Line(String),
    /// A block with header, body fragments, and optional closing line.
    ///
    /// The body is indented one level relative to the header.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// A sequence of fragments.
    Sequence(Vec<CodeFragment>),
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create a brace-on-new-line block.
    ///
    /// Renders as the header line, `{` on its own line, the indented body,
    /// then `}`. The braces stay on separate lines even for an empty body.
    pub fn braced(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::Sequence(vec![
            Self::Line(header.into()),
            Self::Block {
                header: "{".to_string(),
                body,
                close: Some("}".to_string()),
            },
        ])
    }
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}
