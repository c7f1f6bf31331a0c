//! CLI command implementations

use crate::output::OutputFormat;
use anyhow::Result;
use clap::Subcommand;
use senryu_core::Form;

pub mod check;
pub mod common;
pub mod count;
pub mod generate_config;
pub mod ruby;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Annotate phrases with furigana
    Ruby(ruby::RubyArgs),

    /// Count morae in phonetic text
    Count(count::CountArgs),

    /// Check phrases against a verse form
    Check(check::CheckArgs),

    /// Write a commented configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List verse forms and their mora targets
    Forms,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        match self {
            Commands::Ruby(args) => args.execute(quiet),
            Commands::Count(args) => args.execute(),
            Commands::Check(args) => args.execute(quiet),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// The listing as printed
    pub fn render(self) -> String {
        let mut listing = String::new();
        match self {
            ListCommands::Forms => {
                listing.push_str("Available forms:\n");
                for form in Form::ALL {
                    let targets = form
                        .targets()
                        .iter()
                        .map(|target| target.to_string())
                        .collect::<Vec<_>>()
                        .join(", ");
                    listing.push_str(&format!(
                        "  {:<8} {} phrase(s): {}\n",
                        form.name(),
                        form.arity(),
                        targets
                    ));
                }
            }
            ListCommands::Formats => {
                listing.push_str("Available output formats:\n");
                for (format, description) in OutputFormat::DESCRIPTIONS {
                    listing.push_str(&format!("  {:<10} {}\n", format.name(), description));
                }
            }
        }
        listing
    }
}
