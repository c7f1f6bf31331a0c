//! The morphological analyzer seam
//!
//! Analysis never reaches for a global analyzer. Callers construct a
//! [`Tokenizer`] (loading its dictionary once) and hand it to the
//! [`Analyzer`](crate::Analyzer), which owns it for its lifetime.

pub mod kuromoji;
pub mod mecab;
pub mod prepared;

use crate::error::Result;
use senryu_core::Token;
use std::sync::Arc;

pub use kuromoji::parse_kuromoji_json;
pub use mecab::{parse_mecab, parse_mecab_line};
pub use prepared::StaticTokenizer;

/// Splits one phrase into morphological tokens
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>>;
}

impl<T: Tokenizer + ?Sized> Tokenizer for &T {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
        (**self).tokenize(text)
    }
}

impl<T: Tokenizer + ?Sized> Tokenizer for Box<T> {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
        (**self).tokenize(text)
    }
}

impl<T: Tokenizer + ?Sized> Tokenizer for Arc<T> {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
        (**self).tokenize(text)
    }
}
