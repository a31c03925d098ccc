//! Language-agnostic code generation traits.

use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for language-specific code generators.
///
/// Implement this trait to add support for generating source files in a new language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "csharp")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "cs")
    fn file_extension(&self) -> &str;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default, PartialEq, Eq)]
pub struct GenerateResult {
    /// Files that were written
    pub written: Vec<PathBuf>,
    /// Files that already existed and were left untouched
    pub skipped: Vec<PathBuf>,
}

impl GenerateResult {
    /// Check if nothing was written or skipped.
    pub fn is_empty(&self) -> bool {
        self.written.is_empty() && self.skipped.is_empty()
    }
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}
