//! Public API for senryu furigana annotation and verse validation
//!
//! This crate puts a stable interface over `senryu-core` and wires it to an
//! external morphological analyzer. The analyzer is injected as a
//! [`Tokenizer`]: construct it once (dictionary loading is the caller's
//! concern), hand it to an [`Analyzer`], and analyze any number of phrases.
//!
//! ```rust
//! use senryu_api::{Analyzer, StaticTokenizer};
//! use senryu_core::Token;
//!
//! let tokenizer = StaticTokenizer::from_token_lists([
//!     vec![Token::known("古池", "フルイケ"), Token::known("や", "ヤ")],
//!     vec![Token::known("蛙", "カワズ"), Token::known("飛び込む", "トビコム")],
//!     vec![Token::known("水", "ミズ"), Token::known("の", "ノ"), Token::known("音", "オト")],
//! ]);
//! let analyzer = Analyzer::new(tokenizer);
//!
//! let analysis = analyzer.ruby("古池や").unwrap();
//! assert_eq!(analysis.ruby_data.to_string(), "古池[ふるいけ]や");
//!
//! let report = analyzer.check_text(&["古池や", "蛙飛び込む", "水の音"]).unwrap();
//! assert!(report.is_accepted());
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod submission;
pub mod tokenizer;

use senryu_core::{count_part, MoraCount, Phrase};

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{RubyAnalysis, SubmissionReport};
pub use error::{ApiError, Rejection, Result};
pub use submission::{assess, check_phrases};
pub use tokenizer::{StaticTokenizer, Tokenizer};

/// Main entry point: furigana and verse checks over an injected analyzer
#[derive(Debug, Clone)]
pub struct Analyzer<T> {
    tokenizer: T,
    config: Config,
}

impl<T: Tokenizer> Analyzer<T> {
    /// Create an analyzer with the default configuration (5-7-5, tolerance 1)
    pub fn new(tokenizer: T) -> Self {
        Self {
            tokenizer,
            config: Config::default(),
        }
    }

    /// Create an analyzer with a custom configuration
    pub fn with_config(tokenizer: T, config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { tokenizer, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the injected tokenizer
    pub fn tokenizer(&self) -> &T {
        &self.tokenizer
    }

    /// Tokenize and align one phrase.
    ///
    /// Empty text yields an empty analysis without calling the tokenizer.
    /// The analysis text is what the tokenizer's surfaces spell, so it always
    /// matches `ruby_data`.
    pub fn ruby(&self, text: &str) -> Result<RubyAnalysis> {
        if text.is_empty() {
            return Ok(RubyAnalysis::default());
        }

        let tokens = self.tokenizer.tokenize(text)?;
        tracing::trace!(text, tokens = tokens.len(), "tokenized phrase");
        let analysis = RubyAnalysis::from_tokens(&tokens);

        if analysis.text != text {
            tracing::warn!(
                text,
                surfaces = %analysis.text,
                "tokenizer surfaces do not reproduce the input"
            );
        }

        Ok(analysis)
    }

    /// Like [`ruby`](Self::ruby), but falls back to an unannotated phrase
    /// when the tokenizer fails
    pub fn ruby_or_plain(&self, text: &str) -> RubyAnalysis {
        self.ruby(text).unwrap_or_else(|e| {
            tracing::warn!(text, error = %e, "furigana analysis failed; using plain text");
            RubyAnalysis::plain(text)
        })
    }

    /// Count morae in text that is already phonetic
    pub fn count(&self, text: &str) -> MoraCount {
        count_part(text)
    }

    /// Check already-aligned phrases against the configured form and limits
    pub fn check_phrases(
        &self,
        phrases: &[Phrase],
    ) -> std::result::Result<SubmissionReport, Rejection> {
        submission::check_phrases(phrases, &self.config)
    }

    /// Tokenize, align and assess each phrase of a submission.
    ///
    /// Tokenizer failures are errors; validation failures are reported in
    /// [`SubmissionReport::rejection`].
    pub fn check_text(&self, texts: &[&str]) -> Result<SubmissionReport> {
        let phrases = texts
            .iter()
            .map(|text| self.ruby(text).map(|analysis| analysis.ruby_data))
            .collect::<Result<Vec<_>>>()?;
        Ok(assess(&phrases, &self.config))
    }
}

// Convenience functions

/// Align prepared tokens into a furigana analysis
pub fn ruby_from_tokens(tokens: &[senryu_core::Token]) -> RubyAnalysis {
    RubyAnalysis::from_tokens(tokens)
}

/// Check aligned phrases with the default configuration
pub fn check_with_defaults(
    phrases: &[Phrase],
) -> std::result::Result<SubmissionReport, Rejection> {
    submission::check_phrases(phrases, &Config::default())
}
