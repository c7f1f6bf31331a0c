//! Furigana alignment and mora counting for Japanese verse
//!
//! Given a phrase already segmented by an external morphological analyzer,
//! this crate:
//! - aligns each token's written form with its reading at sub-token
//!   granularity to produce furigana (ruby) segments, and
//! - counts morae to check whether phrases follow a 5-7-5 (or 5-7 / 7-5)
//!   pattern, within a tolerance of one mora.
//!
//! # Architecture
//!
//! Three layers, each depending only on the one before it:
//! - [`kana`]: script normalization (half-width → full-width katakana,
//!   katakana ↔ hiragana)
//! - [`ruby`]: furigana alignment of analyzer tokens
//! - [`mora`]: mora/symbol counting and verse validation
//!
//! Everything is pure and synchronous. There is no shared state, so any
//! number of analyses may run concurrently.
//!
//! # Example
//!
//! ```rust
//! use senryu_core::{align, validate_phrase, Token};
//!
//! let tokens = vec![Token::known("古池", "フルイケ"), Token::known("や", "ヤ")];
//! let phrase = align(&tokens);
//! assert_eq!(phrase.text(), "古池や");
//!
//! let result = validate_phrase(phrase.segments(), 5);
//! assert!(result.matches);
//! assert_eq!(result.mora_count, 5);
//! ```

pub mod error;
pub mod kana;
pub mod mora;
pub mod ruby;
pub mod token;

pub use error::{CoreError, Result};
pub use mora::{
    count_part, validate_form, validate_phrase, validate_triple, ErrorCode, Form, MoraCount,
    ValidationResult, VerseReport,
};
pub use ruby::{align, align_with_diagnostics, Alignment, Phrase, Segment, UNKNOWN_READING};
pub use token::{Token, WordType};
