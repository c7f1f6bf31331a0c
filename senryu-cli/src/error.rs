//! Error handling for the CLI application

use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// File not found or inaccessible
    #[error("File not found: {0}")]
    FileNotFound(String),
    /// Invalid file pattern
    #[error("Invalid file pattern: {0}")]
    InvalidPattern(String),
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// External tokenizer command could not be used
    #[error("Tokenizer command error: {0}")]
    TokenizerCommand(String),
    /// Refusing to overwrite an existing file
    #[error("Output file already exists: {0} (use --force to overwrite)")]
    OutputExists(String),
    /// One or more submissions failed validation
    #[error("{rejected} of {total} submission(s) rejected")]
    Rejected { rejected: usize, total: usize },
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
