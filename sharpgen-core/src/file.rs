use std::path::{Path, PathBuf};

use eyre::{Context, Result};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file content as ordered lines
    fn lines(&self) -> Vec<String>;

    /// Render the file content
    fn render(&self) -> String {
        join_lines(&self.lines())
    }

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        write_with_rules(&path, &self.render(), &self.rules())
    }
}

/// Join lines into file content, terminating every line with a newline.
fn join_lines(lines: &[String]) -> String {
    let mut content = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }
    content
}

fn write_with_rules(path: &Path, content: &str, rules: &FileRules) -> Result<WriteResult> {
    match rules.overwrite {
        Overwrite::Always => {
            write_file(path, content)?;
            tracing::debug!(path = %path.display(), "wrote file");
            Ok(WriteResult::Written)
        }
        Overwrite::IfMissing => {
            if path.exists() {
                tracing::debug!(path = %path.display(), "file exists, skipping");
                Ok(WriteResult::Skipped)
            } else {
                write_file(path, content)?;
                tracing::debug!(path = %path.display(), "wrote file");
                Ok(WriteResult::Written)
            }
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

impl FileRules {
    /// Rules for a file that replaces whatever is on disk.
    pub fn always() -> Self {
        Self {
            overwrite: Overwrite::Always,
        }
    }

    /// Rules for a file that is only created when absent.
    pub fn if_missing() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
        }
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite
    Always,
    /// Only create if file doesn't exist (user may have edited it)
    IfMissing,
}

impl Default for FileRules {
    fn default() -> Self {
        Self::if_missing()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Fixed {
        name: &'static str,
        lines: Vec<String>,
        rules: FileRules,
    }

    impl Fixed {
        fn new(name: &'static str, lines: &[&str]) -> Self {
            Self {
                name,
                lines: lines.iter().map(|s| s.to_string()).collect(),
                rules: FileRules::default(),
            }
        }
    }

    impl GeneratedFile for Fixed {
        fn path(&self, base: &Path) -> PathBuf {
            base.join(self.name)
        }
        fn rules(&self) -> FileRules {
            self.rules
        }
        fn lines(&self) -> Vec<String> {
            self.lines.clone()
        }
    }

    #[test]
    fn test_join_lines() {
        assert_eq!(join_lines(&["a".to_string(), "b".to_string()]), "a\nb\n");
        assert_eq!(join_lines(&[]), "");
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("Test.cs");

        write_file(&path, "nested").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_always_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Test.cs");

        fs::write(&path, "original").unwrap();

        let file = Fixed {
            rules: FileRules::always(),
            ..Fixed::new("Test.cs", &["updated"])
        };
        let result = file.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "updated\n");
    }

    #[test]
    fn test_write_if_missing_creates_new() {
        let temp = TempDir::new().unwrap();

        let file = Fixed::new("New.cs", &["public class New", "{}"]);
        let result = file.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join("New.cs")).unwrap(),
            "public class New\n{}\n"
        );
    }

    #[test]
    fn test_write_if_missing_skips_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Existing.cs");

        fs::write(&path, "original").unwrap();

        let file = Fixed::new("Existing.cs", &["should not write"]);
        let result = file.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn test_default_render() {
        let file = Fixed::new("Fixed.cs", &["class Fixed", "{}"]);
        assert_eq!(file.render(), "class Fixed\n{}\n");
        assert_eq!(file.path(Path::new("out")), Path::new("out/Fixed.cs"));
    }
}
