//! Tokenizer backed by prepared analyzer output

use super::Tokenizer;
use crate::error::{ApiError, Result};
use senryu_core::Token;
use std::collections::HashMap;

/// Returns prepared token lists keyed by the text they were produced from
///
/// Useful when analyzer output was captured ahead of time, and in tests.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenizer {
    entries: HashMap<String, Vec<Token>>,
}

impl StaticTokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tokenizer from token lists, keying each list by its
    /// concatenated surface forms
    pub fn from_token_lists(lists: impl IntoIterator<Item = Vec<Token>>) -> Self {
        let mut tokenizer = Self::new();
        for tokens in lists {
            let text: String = tokens.iter().map(|t| t.surface_form.as_str()).collect();
            tokenizer.insert(text, tokens);
        }
        tokenizer
    }

    pub fn insert(&mut self, text: impl Into<String>, tokens: Vec<Token>) {
        self.entries.insert(text.into(), tokens);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Tokenizer for StaticTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
        self.entries
            .get(text)
            .cloned()
            .ok_or_else(|| ApiError::Tokenizer(format!("no prepared tokens for {text:?}")))
    }
}
