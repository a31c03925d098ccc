mod check;
mod completions;
mod init;
mod new;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use init::InitCommand;
use new::NewCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for sharpgen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "sharpgen")]
#[command(version)]
#[command(about = "Generate C# classes from TOML definitions")]
pub(crate) struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::New(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Init(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a C# source file from class.toml
    New(NewCommand),

    /// Validate class.toml without generating code
    Check(CheckCommand),

    /// Create a starter class.toml
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["sharpgen", "check", "--verbose"]).unwrap();
        assert!(cli.verbose);
    }
}
