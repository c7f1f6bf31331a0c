//! Data Transfer Objects for API

use crate::error::Rejection;
use senryu_core::ruby::LowConfidence;
use senryu_core::{align_with_diagnostics, Phrase, Token, VerseReport};
use serde::{Deserialize, Serialize};

/// Furigana analysis of one phrase
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RubyAnalysis {
    /// The analyzed text
    pub text: String,
    /// Segments for furigana rendering; their words reproduce `text`
    pub ruby_data: Phrase,
    /// Tokens whose alignment fell back to an approximation
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub low_confidence: Vec<LowConfidence>,
}

impl RubyAnalysis {
    /// Aligns analyzer tokens; the text is their concatenated surfaces
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let alignment = align_with_diagnostics(tokens);
        Self {
            text: alignment.phrase.text(),
            ruby_data: alignment.phrase,
            low_confidence: alignment.low_confidence,
        }
    }

    /// Unannotated analysis used when the analyzer is unavailable
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            ruby_data: Phrase::plain(text.clone()),
            text,
            low_confidence: Vec::new(),
        }
    }

    pub fn is_confident(&self) -> bool {
        self.low_confidence.is_empty()
    }
}

/// Outcome of checking a whole submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReport {
    /// Phrase texts joined by a single space, as displayed and stored
    pub display_text: String,
    /// Per-phrase mora results and the failure bitmask
    pub verse: VerseReport,
    /// The first reason the submission is refused, if any
    pub rejection: Option<Rejection>,
}

impl SubmissionReport {
    pub fn is_accepted(&self) -> bool {
        self.rejection.is_none()
    }

    /// Converts into the accept/reject result a submission handler needs
    pub fn into_result(self) -> std::result::Result<Self, Rejection> {
        match self.rejection.clone() {
            Some(rejection) => Err(rejection),
            None => Ok(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tokens() {
        let analysis = RubyAnalysis::from_tokens(&[Token::known("桜", "サクラ")]);
        assert_eq!(analysis.text, "桜");
        assert_eq!(analysis.ruby_data.to_string(), "桜[さくら]");
        assert!(analysis.is_confident());
    }

    #[test]
    fn test_plain() {
        let analysis = RubyAnalysis::plain("古池や");
        assert_eq!(analysis.ruby_data.len(), 1);
        assert_eq!(analysis.ruby_data.segments()[0].ruby, None);

        let empty = RubyAnalysis::plain("");
        assert!(empty.ruby_data.is_empty());
    }

    #[test]
    fn test_ruby_analysis_json_shape() {
        let analysis = RubyAnalysis::from_tokens(&[
            Token::known("桜", "サクラ"),
            Token::known("が", "ガ"),
        ]);
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "text": "桜が",
                "ruby_data": [
                    {"word": "桜", "ruby": "さくら"},
                    {"word": "が", "ruby": null}
                ]
            })
        );
    }

    #[test]
    fn test_ruby_data_deserializes_from_stored_json() {
        let json = r#"{"text": "古池", "ruby_data": [{"word": "古", "ruby": "ふる"}, {"word": "池", "ruby": "いけ"}]}"#;
        let analysis: RubyAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.ruby_data.text(), "古池");
        assert!(analysis.low_confidence.is_empty());
    }

    #[test]
    fn test_stored_empty_ruby_counts_kana() {
        let json = r#"{"text": "古池や", "ruby_data": [{"word": "古池", "ruby": "フルイケ"}, {"word": "や", "ruby": ""}]}"#;
        let analysis: RubyAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(senryu_core::count_part(&analysis.ruby_data).mora_count, 5);
        assert_eq!(analysis.ruby_data.to_string(), "古池[フルイケ]や");
    }
}
