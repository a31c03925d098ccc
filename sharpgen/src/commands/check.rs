use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use sharpgen_codegen_csharp::access_keyword;
use sharpgen_manifest::{ClassToml, Manifest};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to class.toml (defaults to ./class.toml)
    #[arg(short, long, default_value = "class.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let class_toml = ClassToml::open(&self.config).unwrap_or_exit();

        println!("✓ {} is valid\n", self.config.display());
        println!("{}", Self::summary(class_toml.manifest()));

        Ok(())
    }

    fn summary(manifest: &Manifest) -> String {
        let class = &manifest.class;
        let mut lines = vec![format!(
            "  {} {} {}",
            access_keyword(class.access),
            manifest.kind,
            class.name
        )];

        if !manifest.kind.is_implemented() {
            lines.push(format!(
                "  note: '{}' generation is not implemented yet",
                manifest.kind
            ));
        }

        lines.push(String::new());
        lines.push(format!(
            "  {} field{}:",
            class.fields.len(),
            if class.fields.len() == 1 { "" } else { "s" }
        ));
        for field in &class.fields {
            lines.push(format!(
                "    {} {} {}",
                access_keyword(field.access),
                field.ty,
                field.name()
            ));
        }

        lines.push(String::new());
        lines.push(format!(
            "  {} method{}:",
            class.methods.len(),
            if class.methods.len() == 1 { "" } else { "s" }
        ));
        for method in &class.methods {
            lines.push(format!(
                "    {} {}",
                access_keyword(method.access),
                method.signature()
            ));
        }

        lines.join("\n")
    }
}
