use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Context, Result};
use sharpgen_core::{GeneratedFile, WriteResult, to_pascal_case};
use sharpgen_manifest::{Manifest, StarterManifest};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct InitCommand {
    /// Class name (defaults to the current directory name in PascalCase)
    pub name: Option<String>,

    /// Path of the manifest to create
    #[arg(short, long, default_value = "class.toml")]
    pub output: PathBuf,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let file_name = self
            .output
            .file_name()
            .ok_or_else(|| eyre::eyre!("--output must name a file"))?;
        let base = self.output.parent().unwrap_or(Path::new(""));

        let class_name = self.resolve_name()?;
        let starter = StarterManifest::new(class_name).file_name(file_name);

        // Reject names the manifest itself would not accept
        Manifest::from_str_with_filename(&starter.render(), &self.output.display().to_string())
            .unwrap_or_exit();

        match starter.write(base).wrap_err("Failed to write class manifest")? {
            WriteResult::Written => {
                tracing::info!(path = %self.output.display(), "wrote class manifest");
            }
            WriteResult::Skipped => eyre::bail!(
                "{} already exists; remove it or pass a different --output",
                self.output.display()
            ),
        }

        println!(
            "Created {} for class {}",
            self.output.display(),
            starter.class_name()
        );
        println!();
        println!("Next steps:");
        println!("  edit {} to describe your fields and methods", self.output.display());
        println!("  sharpgen new -c {}", self.output.display());

        Ok(())
    }

    fn resolve_name(&self) -> Result<String> {
        match &self.name {
            Some(name) => Ok(name.clone()),
            None => {
                let cwd = std::env::current_dir().wrap_err("Failed to get current directory")?;
                let dir_name = cwd
                    .file_name()
                    .and_then(|n| n.to_str())
                    .ok_or_else(|| eyre::eyre!("Current directory has no valid name"))?;
                Ok(to_pascal_case(dir_name))
            }
        }
    }
}
