//! Generate config command implementation

use crate::error::CliError;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

const TEMPLATE: &str = r#"# senryu configuration

[validation]
# Verse form: "5-7-5", "5-7" or "7-5"
form = "5-7-5"
# Accepted deviation in morae per phrase (must be below the smallest target)
tolerance = 1
# Largest number of symbols (。、「」・！？) across a whole submission
max_symbols = 4

[output]
# Format used when --format is not given: "text", "json" or "markdown"
default_format = "text"
pretty_json = true

[performance]
# Number of worker threads (0 = one per CPU)
worker_threads = 0
"#;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            return Err(CliError::OutputExists(self.output.display().to_string()).into());
        }

        std::fs::write(&self.output, Self::template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template written to {}", self.output.display());
        println!();
        println!("Use it with:");
        println!("   senryu check -i phrases.txt -c {}", self.output.display());

        Ok(())
    }

    /// Commented configuration with every default spelled out
    pub fn template() -> &'static str {
        TEMPLATE
    }
}
