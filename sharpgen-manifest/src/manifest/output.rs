//! The `[output]` table.

use std::fmt;

use serde::{Deserialize, Deserializer, de};
use sharpgen_codegen::Indent;
use sharpgen_core::FileRules;

use super::ParseContext;
use crate::Result;

/// Output settings from `[output]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// Indentation unit: 2, 4 or 8 spaces, or "tab" (default: 4)
    #[serde(default, deserialize_with = "deserialize_indent")]
    pub indent: Indent,

    /// Generated file extension (default: "cs")
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Replace existing files instead of skipping them
    #[serde(default)]
    pub overwrite: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            indent: Indent::default(),
            extension: default_extension(),
            overwrite: false,
        }
    }
}

fn default_extension() -> String {
    "cs".to_string()
}

impl OutputConfig {
    /// Write rules for generated files.
    pub fn file_rules(&self) -> FileRules {
        if self.overwrite {
            FileRules::always()
        } else {
            FileRules::if_missing()
        }
    }

    pub fn validate(&self, ctx: &ParseContext<'_>) -> Result<()> {
        if self.extension.contains(['/', '\\']) {
            let message = format!(
                "extension '{}' cannot contain a path separator",
                self.extension
            );
            let source = ctx.source_context();
            return Err(match find_extension_span(ctx.src(), &self.extension) {
                Some(span) => source.validation_error_at(message, span),
                None => source.validation_error(message),
            });
        }
        Ok(())
    }
}

fn find_extension_span(src: &str, extension: &str) -> Option<(usize, usize)> {
    let pattern = format!("\"{}\"", extension);
    src.find(&pattern).map(|pos| (pos + 1, extension.len()))
}

fn deserialize_indent<'de, D>(deserializer: D) -> std::result::Result<Indent, D::Error>
where
    D: Deserializer<'de>,
{
    struct IndentVisitor;

    impl de::Visitor<'_> for IndentVisitor {
        type Value = Indent;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("2, 4, 8 or \"tab\"")
        }

        fn visit_i64<E: de::Error>(self, width: i64) -> std::result::Result<Indent, E> {
            match width {
                2 | 4 | 8 => Ok(Indent::Spaces(width as u8)),
                _ => Err(E::invalid_value(de::Unexpected::Signed(width), &self)),
            }
        }

        fn visit_u64<E: de::Error>(self, width: u64) -> std::result::Result<Indent, E> {
            match width {
                2 | 4 | 8 => Ok(Indent::Spaces(width as u8)),
                _ => Err(E::invalid_value(de::Unexpected::Unsigned(width), &self)),
            }
        }

        fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<Indent, E> {
            match value.to_lowercase().as_str() {
                "tab" | "tabs" => Ok(Indent::Tab),
                _ => Err(E::invalid_value(de::Unexpected::Str(value), &self)),
            }
        }
    }

    deserializer.deserialize_any(IndentVisitor)
}
