//! Validation context for manifest parsing.

use std::{
    collections::{HashMap, hash_map::Entry},
    sync::Arc,
};

use miette::SourceSpan;
use toml::Spanned;

use crate::{
    Result,
    error::SourceContext,
    validate::{
        find_name_span, find_value_span, is_csharp_keyword, validate_identifier,
        validate_type_name,
    },
};

/// Parsing and validation context that carries source information.
///
/// This struct encapsulates the source content, filename, and current path
/// through the manifest (class, then method), making it easier to pass
/// validation context through nested checks.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "class.toml");
/// ctx.validate_name("Animal", "class")?;
///
/// // For nested validation
/// let method = ctx.push("Animal").push("Speak");
/// method.validate_name("words", "parameter")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["Animal", "Speak"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        self.source.src()
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        self.source.filename()
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "parameter in 'Animal.Speak'" or just "class" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of a name in the source.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.source.src(), name)
    }

    /// Validate that a name is a valid C# identifier.
    ///
    /// Checks for reserved keywords and valid identifier format.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if is_csharp_keyword(name) {
            return Err(self.source.reserved_keyword_error(
                name,
                self.context_for(kind),
                self.find_span(name),
            ));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span(name),
            ));
        }

        Ok(())
    }

    /// Validate that a type name is well formed.
    ///
    /// `key` is the TOML key the type was read from, used to locate it.
    pub fn validate_type(&self, ty: &str, key: &str, kind: &str) -> Result<()> {
        if let Some(reason) = validate_type_name(ty) {
            return Err(self.source.invalid_type_name_error(
                ty,
                self.context_for(kind),
                reason,
                find_value_span(self.source.src(), key, ty),
            ));
        }

        Ok(())
    }

    /// Reject names that appear more than once.
    ///
    /// `@value` and `value` name the same C# identifier. Both labels point at
    /// the offending names themselves.
    pub fn validate_unique<'n>(
        &self,
        names: impl IntoIterator<Item = &'n Spanned<String>>,
        kind: &str,
    ) -> Result<()> {
        let mut seen: HashMap<&str, &Spanned<String>> = HashMap::new();

        for name in names {
            let spelling = name.get_ref().as_str();
            let identifier = spelling.strip_prefix('@').unwrap_or(spelling);
            match seen.entry(identifier) {
                Entry::Occupied(first) => {
                    return Err(self.source.duplicate_member_error(
                        spelling,
                        self.context_for(kind),
                        Some(SourceSpan::from(first.get().span())),
                        Some(SourceSpan::from(name.span())),
                    ));
                }
                Entry::Vacant(slot) => {
                    slot.insert(name);
                }
            }
        }

        Ok(())
    }
}
