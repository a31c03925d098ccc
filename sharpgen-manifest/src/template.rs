//! Starter class.toml written by `sharpgen init`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use sharpgen_core::{FileRules, GeneratedFile};

/// A commented class.toml describing a small example class.
///
/// Never replaces an existing manifest.
pub struct StarterManifest {
    class_name: String,
    file_name: OsString,
}

impl StarterManifest {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            file_name: OsString::from("class.toml"),
        }
    }

    /// Write under a file name other than `class.toml`.
    pub fn file_name(mut self, file_name: impl Into<OsString>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }
}

impl GeneratedFile for StarterManifest {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.file_name)
    }

    fn rules(&self) -> FileRules {
        FileRules::if_missing()
    }

    fn lines(&self) -> Vec<String> {
        let template = format!(
            r#"# Kind of artifact to generate: class, interface, enum, struct or empty_file.
# Only "class" produces output today.
kind = "class"

[class]
name = "{}"
access = "public"

[[class.fields]]
access = "private"
type = "string"
name = "name"

[[class.methods]]
access = "public"
returns = "void"
name = "Speak"
params = [{{ type = "string", name = "words" }}]

[output]
# 2, 4, 8 or "tab"
indent = 4
extension = "cs"
overwrite = false"#,
            self.class_name
        );
        template.lines().map(str::to_string).collect()
    }
}
