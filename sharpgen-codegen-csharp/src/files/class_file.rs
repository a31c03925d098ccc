use std::path::{Path, PathBuf};

use sharpgen_core::{FileRules, GeneratedFile, source_file_name};

/// A rendered C# source file holding one class
#[derive(Debug, Clone)]
pub struct ClassFile {
    file_name: String,
    lines: Vec<String>,
    rules: FileRules,
}

impl ClassFile {
    /// Create a class file named after `stem` with the given extension.
    pub fn new(stem: &str, extension: &str, lines: Vec<String>) -> Self {
        Self {
            file_name: source_file_name(stem, extension),
            lines,
            rules: FileRules::default(),
        }
    }

    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    /// File name relative to the output directory.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

impl GeneratedFile for ClassFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.file_name)
    }

    fn rules(&self) -> FileRules {
        self.rules
    }

    fn lines(&self) -> Vec<String> {
        self.lines.clone()
    }
}
