//! Count command implementation

use super::common::OutputArgs;
use anyhow::{Context, Result};
use clap::Args;
use senryu_core::count_part;
use std::io::{self, BufRead};

/// Arguments for the count command
#[derive(Debug, Args)]
pub struct CountArgs {
    /// Phonetic texts to count (default: one per line from stdin)
    #[arg(value_name = "TEXT")]
    pub texts: Vec<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl CountArgs {
    /// Execute the count command
    pub fn execute(&self) -> Result<()> {
        let config = self.output.load_config()?;
        let texts = if self.texts.is_empty() {
            read_stdin_lines()?
        } else {
            self.texts.clone()
        };

        let mut formatter = self.output.formatter(&config)?;
        for text in &texts {
            formatter.format_count(text, &count_part(text))?;
        }
        formatter.finish()
    }
}

fn read_stdin_lines() -> Result<Vec<String>> {
    let mut texts = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read stdin")?;
        let line = line.trim();
        if !line.is_empty() {
            texts.push(line.to_string());
        }
    }
    Ok(texts)
}
