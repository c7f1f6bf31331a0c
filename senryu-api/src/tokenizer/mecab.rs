//! MeCab (IPADIC) output parsing
//!
//! ```text
//! 古池	名詞,一般,*,*,*,*,古池,フルイケ,フルイケ
//! や	助詞,係助詞,*,*,*,*,や,ヤ,ヤ
//! EOS
//! ```
//!
//! The eighth feature is the reading. MeCab prints unknown words with a
//! shorter feature list (or `*` in the reading column), which is how they
//! are told apart from dictionary words.

use crate::error::{ApiError, Result};
use senryu_core::Token;

const EOS: &str = "EOS";
const READING_FIELD: usize = 7;

/// Parses MeCab output into one token list per `EOS`-terminated block.
///
/// Blank lines are ignored, and a trailing block without `EOS` is kept.
pub fn parse_mecab(output: &str) -> Result<Vec<Vec<Token>>> {
    let mut phrases = Vec::new();
    let mut current = Vec::new();
    let mut open = false;

    for (index, line) in output.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        if line == EOS {
            phrases.push(std::mem::take(&mut current));
            open = false;
            continue;
        }
        current.push(parse_mecab_line(line, index + 1)?);
        open = true;
    }

    if open {
        phrases.push(current);
    }

    Ok(phrases)
}

/// Parses a single `surface\tfeatures` line; `line_number` is 1-based and
/// only used for error reporting.
pub fn parse_mecab_line(line: &str, line_number: usize) -> Result<Token> {
    let (surface, features) = line.split_once('\t').ok_or_else(|| ApiError::Parse {
        line: line_number,
        message: format!("expected `surface<TAB>features`, got {line:?}"),
    })?;

    if surface.is_empty() {
        return Err(ApiError::Parse {
            line: line_number,
            message: "empty surface form".to_string(),
        });
    }

    let reading = features
        .split(',')
        .nth(READING_FIELD)
        .map(str::trim)
        .filter(|reading| !reading.is_empty() && *reading != "*");

    Ok(match reading {
        Some(reading) => Token::known(surface, reading),
        None => Token::unknown(surface),
    })
}
