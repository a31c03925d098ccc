use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use sharpgen_codegen_csharp::{GenerateResult, Generator, LanguageCodegen};
use sharpgen_core::FileRules;
use sharpgen_ir::ArtifactKind;
use sharpgen_manifest::{ClassToml, Manifest};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct NewCommand {
    /// Path to class.toml (defaults to ./class.toml)
    #[arg(short, long, default_value = "class.toml")]
    pub config: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Artifact kind to generate (overrides class.toml setting)
    #[arg(short, long)]
    pub kind: Option<ArtifactKind>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Overwrite existing files
    #[arg(short, long)]
    pub force: bool,
}

impl NewCommand {
    /// Run the new command
    pub fn run(&self) -> Result<()> {
        let class_toml = ClassToml::open(&self.config).unwrap_or_exit();
        let manifest = class_toml.manifest();

        // Use CLI flag if provided, otherwise use manifest setting
        let kind = self.kind.unwrap_or(manifest.kind);

        if !kind.is_implemented() {
            tracing::warn!(%kind, "generation for this kind is not implemented yet; nothing was written");
            return Ok(());
        }

        let class = manifest.to_descriptor();
        let generator = Generator::new(&class)
            .kind(kind)
            .indent(manifest.output.indent)
            .extension(&manifest.output.extension)
            .rules(self.file_rules(manifest));

        if self.dry_run {
            self.run_preview(&generator)
        } else {
            let result = generator
                .generate(&self.output)
                .wrap_err("Failed to generate code")?;
            Self::print_generation_summary(manifest, &result);
            Ok(())
        }
    }

    fn file_rules(&self, manifest: &Manifest) -> FileRules {
        if self.force {
            FileRules::always()
        } else {
            manifest.output.file_rules()
        }
    }

    fn print_generation_summary(manifest: &Manifest, result: &GenerateResult) {
        let class = &manifest.class;
        println!(
            "{} ({} field{}, {} method{})",
            class.name,
            class.fields.len(),
            if class.fields.len() == 1 { "" } else { "s" },
            class.methods.len(),
            if class.methods.len() == 1 { "" } else { "s" },
        );

        for path in &result.written {
            tracing::info!(path = %path.display(), "wrote file");
            println!("  + {}", path.display());
        }

        for path in &result.skipped {
            tracing::info!(path = %path.display(), "skipped existing file");
            println!("  = {} (exists, use --force to overwrite)", path.display());
        }
    }

    fn run_preview<G: LanguageCodegen>(&self, generator: &G) -> Result<()> {
        let files = generator.preview();

        for file in &files {
            println!("── {} ──", file.path);
            print!("{}", file.content);
        }

        println!("── Summary ──");
        println!("{} file(s) would be generated", files.len());

        Ok(())
    }
}
