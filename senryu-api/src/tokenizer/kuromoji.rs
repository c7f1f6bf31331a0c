//! kuromoji JSON token parsing
//!
//! kuromoji serializes tokens with many fields; only the surface, the
//! reading and the dictionary classification are used:
//!
//! ```json
//! [{"surface_form": "桜", "reading": "サクラ", "word_type": "KNOWN", "pos": "名詞"}]
//! ```
//!
//! Either one phrase (an array of tokens) or several phrases (an array of
//! arrays) are accepted.

use crate::error::Result;
use senryu_core::{Token, WordType};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct KuromojiToken {
    surface_form: String,
    #[serde(default)]
    reading: Option<String>,
    word_type: WordType,
}

impl From<KuromojiToken> for Token {
    fn from(token: KuromojiToken) -> Self {
        let reading = token
            .reading
            .filter(|reading| !reading.is_empty() && reading != "*");
        Token {
            surface_form: token.surface_form,
            reading,
            word_type: token.word_type,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum KuromojiDocument {
    Phrases(Vec<Vec<KuromojiToken>>),
    Phrase(Vec<KuromojiToken>),
}

/// Parses kuromoji JSON output into one token list per phrase
pub fn parse_kuromoji_json(json: &str) -> Result<Vec<Vec<Token>>> {
    let document: KuromojiDocument = serde_json::from_str(json)?;
    let phrases = match document {
        KuromojiDocument::Phrases(phrases) => phrases,
        KuromojiDocument::Phrase(tokens) => vec![tokens],
    };

    Ok(phrases
        .into_iter()
        .map(|tokens| tokens.into_iter().map(Token::from).collect())
        .collect())
}
