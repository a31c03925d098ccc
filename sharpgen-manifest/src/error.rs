use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
///
/// # Example
///
/// ```ignore
/// let ctx = SourceContext::new(content, "class.toml");
/// ctx.validation_error("extension cannot contain a path separator");
/// ctx.reserved_keyword_error("class", "field in 'Animal'", span);
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error without a span.
    pub fn validation_error(&self, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: None,
            message: message.into(),
        })
    }

    /// Create a validation error with a span.
    pub fn validation_error_at(
        &self,
        message: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: Some(span.into()),
            message: message.into(),
        })
    }

    /// Create a reserved keyword error.
    pub fn reserved_keyword_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::ReservedKeyword {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
        })
    }

    /// Create an invalid identifier error.
    pub fn invalid_identifier_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
            reason: reason.into(),
        })
    }

    /// Create an invalid type name error.
    pub fn invalid_type_name_error(
        &self,
        ty: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidTypeName {
            src: self.named_source(),
            span,
            ty: ty.into(),
            context: context.into(),
            reason: reason.into(),
        })
    }

    /// Create a duplicate member error.
    pub fn duplicate_member_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        first_span: Option<SourceSpan>,
        second_span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::DuplicateMember {
            src: self.named_source(),
            first_span,
            second_span,
            name: name.into(),
            context: context.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'sharpgen init <Name>' to create a class manifest"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse class manifest")]
    #[diagnostic(code(sharpgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(sharpgen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("'{name}' is a C# reserved keyword")]
    #[diagnostic(
        code(sharpgen::reserved_keyword),
        help("rename the {context}, or write '@{name}' to use the keyword as an identifier")
    )]
    ReservedKeyword {
        #[source_code]
        src: NamedSource<String>,
        #[label("reserved keyword used here")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(
        code(sharpgen::invalid_identifier),
        help(
            "{reason}. Use only letters, digits, and underscores, starting with a letter or underscore."
        )
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },

    #[error("invalid type '{ty}' for {context}")]
    #[diagnostic(
        code(sharpgen::invalid_type),
        help("{reason}. Types look like 'int', 'List<string>', 'int[]' or 'System.DateTime?'.")
    )]
    InvalidTypeName {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid type")]
        span: Option<SourceSpan>,
        ty: String,
        context: String,
        reason: String,
    },

    #[error("'{name}' is declared more than once as a {context}")]
    #[diagnostic(
        code(sharpgen::duplicate_member),
        help("rename or remove one of the declarations")
    )]
    DuplicateMember {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: Option<SourceSpan>,
        #[label("declared again here")]
        second_span: Option<SourceSpan>,
        name: String,
        context: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_context_accessors() {
        let ctx = SourceContext::new("[class]", "class.toml");
        assert_eq!(ctx.src(), "[class]");
        assert_eq!(ctx.filename(), "class.toml");
    }

    #[test]
    fn test_reserved_keyword_message() {
        let ctx = SourceContext::new("", "class.toml");
        let err = ctx.reserved_keyword_error("class", "field", None);
        assert_eq!(err.to_string(), "'class' is a C# reserved keyword");
    }

    #[test]
    fn test_duplicate_member_message() {
        let ctx = SourceContext::new("", "class.toml");
        let err = ctx.duplicate_member_error("name", "field in 'Animal'", None, None);
        assert_eq!(
            err.to_string(),
            "'name' is declared more than once as a field in 'Animal'"
        );
    }

    #[test]
    fn test_validation_error_at_has_span() {
        let ctx = SourceContext::new("extension = \"a/b\"", "class.toml");
        let err = ctx.validation_error_at("bad extension", (13, 3));
        match *err {
            Error::Validation { span, message, .. } => {
                assert_eq!(message, "bad extension");
                assert_eq!(span.map(|s| s.offset()), Some(13));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
