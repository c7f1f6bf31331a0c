//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::{FileReader, TokenFormat};
pub use glob_resolver::resolve_patterns;

use crate::tokenizer::CommandTokenizer;
use anyhow::{Context, Result};
use senryu_api::{Analyzer, RubyAnalysis};
use std::path::Path;

/// Where phrase tokens come from
#[derive(Debug, Clone, Copy)]
pub enum PhraseSource<'a> {
    /// Files already hold analyzer output
    Tokens(TokenFormat),
    /// Files hold raw text, one phrase per line, analyzed by a command
    Command(&'a CommandTokenizer),
}

impl PhraseSource<'_> {
    /// Read and align every phrase of one input file
    pub fn load(&self, path: &Path) -> Result<Vec<RubyAnalysis>> {
        match self {
            PhraseSource::Tokens(format) => Ok(FileReader::read_token_lists(path, *format)?
                .iter()
                .map(|tokens| RubyAnalysis::from_tokens(tokens))
                .collect()),
            PhraseSource::Command(tokenizer) => {
                let analyzer = Analyzer::new(*tokenizer);
                FileReader::read_phrases(path)?
                    .iter()
                    .map(|line| {
                        analyzer.ruby(line).with_context(|| {
                            format!("Failed to analyze {:?} in {}", line, path.display())
                        })
                    })
                    .collect()
            }
        }
    }
}
