use std::path::Path;

use eyre::Result;
use sharpgen_codegen::{GenerateResult, Indent, LanguageCodegen, PreviewFile, dispatch};
use sharpgen_core::{FileRules, GeneratedFile, WriteResult};
use sharpgen_ir::{ArtifactKind, ClassDescriptor};

use crate::{CSharpRenderer, files::ClassFile};

/// C# code generator that produces one source file per class descriptor
pub struct Generator<'a> {
    class: &'a ClassDescriptor,
    kind: ArtifactKind,
    renderer: CSharpRenderer,
    extension: String,
    rules: FileRules,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "csharp"
    }

    fn file_extension(&self) -> &str {
        &self.extension
    }

    fn preview(&self) -> Vec<PreviewFile> {
        self.class_file()
            .map(|file| PreviewFile {
                path: file.file_name().to_string(),
                content: file.render(),
            })
            .into_iter()
            .collect()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();

        if let Some(file) = self.class_file() {
            let path = file.path(output_dir);
            match file.write(output_dir)? {
                WriteResult::Written => result.written.push(path),
                WriteResult::Skipped => result.skipped.push(path),
            }
        }

        Ok(result)
    }
}

impl<'a> Generator<'a> {
    /// Create a generator for a class artifact with default settings.
    pub fn new(class: &'a ClassDescriptor) -> Self {
        Self {
            class,
            kind: ArtifactKind::Class,
            renderer: CSharpRenderer::new(),
            extension: "cs".to_string(),
            rules: FileRules::default(),
        }
    }

    /// Set the artifact kind to generate.
    pub fn kind(mut self, kind: ArtifactKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the indentation unit.
    pub fn indent(mut self, indent: Indent) -> Self {
        self.renderer = CSharpRenderer::with_indent(indent);
        self
    }

    /// Set the output file extension.
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Set the rules used when the output file already exists.
    pub fn rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    /// Render the requested artifact to lines.
    ///
    /// Empty for artifact kinds without a renderer.
    pub fn lines(&self) -> Vec<String> {
        dispatch(&self.renderer, self.kind, self.class)
    }

    /// Build the file to hand to persistence, if the kind renders anything.
    pub fn class_file(&self) -> Option<ClassFile> {
        if !self.kind.is_implemented() {
            tracing::debug!(kind = %self.kind, "no file produced for unimplemented kind");
            return None;
        }

        Some(
            ClassFile::new(self.class.file_stem(), &self.extension, self.lines())
                .with_rules(self.rules),
        )
    }
}
