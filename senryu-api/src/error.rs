//! API error types

use senryu_core::ErrorCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// The external analyzer failed
    #[error("tokenizer error: {0}")]
    Tokenizer(String),

    /// Analyzer output that does not follow its format
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Why a submission was not accepted
///
/// This is a validation outcome, not a fault: the caller turns it into a
/// user-facing message.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rejection {
    /// A different number of phrases than the form expects
    #[error("expected {expected} phrases, got {found}")]
    WrongPhraseCount { expected: usize, found: usize },

    /// A phrase with no text
    #[error("phrase {} is empty; every phrase must be filled in", index + 1)]
    EmptyPhrase { index: usize },

    /// One or more phrases are outside the tolerated mora count
    #[error("mora count does not match the form (error code {error_code})")]
    MoraMismatch { error_code: ErrorCode },

    /// Too much punctuation across the whole submission
    #[error("too many symbols: {total} (limit {limit})")]
    TooManySymbols { total: usize, limit: usize },
}

impl Rejection {
    /// Bitmask of failing phrases; zero for rejections not caused by mora counts
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Rejection::MoraMismatch { error_code } => *error_code,
            _ => ErrorCode::OK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            Rejection::EmptyPhrase { index: 1 }.to_string(),
            "phrase 2 is empty; every phrase must be filled in"
        );
        assert_eq!(
            Rejection::MoraMismatch {
                error_code: ErrorCode::from_bits(5)
            }
            .to_string(),
            "mora count does not match the form (error code 5)"
        );
        assert_eq!(
            Rejection::TooManySymbols { total: 6, limit: 4 }.to_string(),
            "too many symbols: 6 (limit 4)"
        );
    }

    #[test]
    fn test_rejection_error_code() {
        let rejection = Rejection::MoraMismatch {
            error_code: ErrorCode::from_bits(2),
        };
        assert_eq!(rejection.error_code().bits(), 2);
        assert!(Rejection::TooManySymbols { total: 5, limit: 4 }
            .error_code()
            .is_ok());
    }

    #[test]
    fn test_parse_error_display() {
        let error = ApiError::Parse {
            line: 3,
            message: "missing tab".to_string(),
        };
        assert_eq!(error.to_string(), "parse error at line 3: missing tab");
    }
}
