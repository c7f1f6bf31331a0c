//! Furigana alignment
//!
//! Morphological analyzers report one reading for a whole token, never a
//! per-character mapping. Okurigana (the kana tail of an inflected word)
//! appear verbatim in that reading, so searching the reading for the next
//! kana of the surface locates where the preceding ideograph run's
//! pronunciation ends:
//!
//! ```text
//! surface:  食 べ 物        reading: たべもの
//!           └┬┘ │ └┬┘
//! ruby:     た  べ もの     (べ anchors the split)
//! ```
//!
//! The search is a heuristic. When an anchor is never found the remaining
//! reading is assigned to the current ideograph run, and the token is
//! reported as low confidence.

use smallvec::SmallVec;

use super::segment::{Phrase, Segment, UNKNOWN_READING};
use crate::kana::{contains_ideograph, is_ideograph, katakana_char_to_hiragana, to_hiragana};
use crate::token::Token;

/// Segments produced for a single token
pub type TokenSegments = SmallVec<[Segment; 4]>;

/// Why a token's alignment should not be fully trusted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LowConfidenceReason {
    /// A kana anchor was not found before the reading ran out; the rest of
    /// the reading went to the preceding ideograph run
    ReadingExhausted,
    /// An ideograph run received an empty reading
    EmptyReading,
    /// A dictionary token with ideographs came without any reading
    MissingReading,
}

/// A token whose alignment fell back to an approximation
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LowConfidence {
    /// Position of the token in the analyzer output
    pub token_index: usize,
    pub surface_form: String,
    pub reason: LowConfidenceReason,
}

/// Alignment result with diagnostics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alignment {
    pub phrase: Phrase,
    pub low_confidence: Vec<LowConfidence>,
}

impl Alignment {
    /// True when every token aligned without falling back
    pub fn is_confident(&self) -> bool {
        self.low_confidence.is_empty()
    }
}

/// Alignment of one token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenAlignment {
    pub segments: TokenSegments,
    pub low_confidence: Option<LowConfidenceReason>,
}

impl TokenAlignment {
    fn single(segment: Segment) -> Self {
        let mut segments = TokenSegments::new();
        segments.push(segment);
        Self {
            segments,
            low_confidence: None,
        }
    }
}

/// Aligns a phrase's tokens into ruby segments.
///
/// ```rust
/// use senryu_core::ruby::{align, Segment};
/// use senryu_core::Token;
///
/// let phrase = align(&[Token::known("桜", "サクラ")]);
/// assert_eq!(phrase.segments(), &[Segment::with_ruby("桜", "さくら")]);
/// ```
pub fn align(tokens: &[Token]) -> Phrase {
    align_with_diagnostics(tokens).phrase
}

/// Aligns a phrase's tokens and reports which tokens needed a fallback.
pub fn align_with_diagnostics(tokens: &[Token]) -> Alignment {
    let mut alignment = Alignment::default();

    for (token_index, token) in tokens.iter().enumerate() {
        let TokenAlignment {
            segments,
            low_confidence,
        } = align_token(token);

        if let Some(reason) = low_confidence {
            tracing::debug!(
                token_index,
                surface = %token.surface_form,
                reading = ?token.reading,
                ?reason,
                "low-confidence furigana alignment"
            );
            alignment.low_confidence.push(LowConfidence {
                token_index,
                surface_form: token.surface_form.clone(),
                reason,
            });
        }

        for segment in segments {
            alignment.phrase.push(segment);
        }
    }

    alignment
}

/// Aligns a single token.
pub fn align_token(token: &Token) -> TokenAlignment {
    let surface = token.surface_form.as_str();

    if !contains_ideograph(surface) {
        tracing::trace!(surface, "phonetic token");
        return TokenAlignment::single(Segment::plain(surface));
    }

    if !token.is_known() {
        tracing::trace!(surface, "unknown token");
        return TokenAlignment::single(Segment::with_ruby(surface, UNKNOWN_READING));
    }

    match token.reading.as_deref() {
        Some(reading) => OkuriganaScan::new(reading).run(surface),
        None => TokenAlignment {
            low_confidence: Some(LowConfidenceReason::MissingReading),
            ..TokenAlignment::single(Segment::with_ruby(surface, UNKNOWN_READING))
        },
    }
}

/// Single pass over a surface form, splitting it into ideograph and kana
/// runs while consuming the hiragana reading from the left
struct OkuriganaScan {
    reading: Vec<char>,
    read_left: usize,
    kanji_buf: String,
    kana_buf: String,
    segments: TokenSegments,
    low_confidence: Option<LowConfidenceReason>,
}

impl OkuriganaScan {
    fn new(reading: &str) -> Self {
        Self {
            reading: to_hiragana(reading).chars().collect(),
            read_left: 0,
            kanji_buf: String::new(),
            kana_buf: String::new(),
            segments: TokenSegments::new(),
            low_confidence: None,
        }
    }

    fn run(mut self, surface: &str) -> TokenAlignment {
        for c in surface.chars() {
            if is_ideograph(c) {
                self.push_ideograph(c);
            } else {
                self.push_kana(c);
            }
        }
        self.finish()
    }

    fn push_ideograph(&mut self, c: char) {
        if self.kanji_buf.is_empty() && !self.kana_buf.is_empty() {
            let kana = std::mem::take(&mut self.kana_buf);
            self.segments.push(Segment::plain(kana));
        }
        self.kanji_buf.push(c);
    }

    fn push_kana(&mut self, c: char) {
        if self.kana_buf.is_empty() && !self.kanji_buf.is_empty() {
            let anchor = katakana_char_to_hiragana(c);
            let read_right = match self.find_anchor(anchor) {
                Some(position) => position,
                None => {
                    self.flag(LowConfidenceReason::ReadingExhausted);
                    self.reading.len()
                }
            };
            self.flush_kanji(read_right);
            self.read_left = read_right;
        }
        self.kana_buf.push(c);
        // okurigana reproduce their own sound in the reading
        self.read_left += 1;
    }

    fn finish(mut self) -> TokenAlignment {
        if !self.kanji_buf.is_empty() {
            let end = self.reading.len();
            self.flush_kanji(end);
        } else if !self.kana_buf.is_empty() {
            let kana = std::mem::take(&mut self.kana_buf);
            self.segments.push(Segment::plain(kana));
        }

        TokenAlignment {
            segments: self.segments,
            low_confidence: self.low_confidence,
        }
    }

    fn find_anchor(&self, anchor: char) -> Option<usize> {
        let start = self.read_left.min(self.reading.len());
        self.reading[start..]
            .iter()
            .position(|&r| r == anchor)
            .map(|offset| start + offset)
    }

    fn flush_kanji(&mut self, read_right: usize) {
        let ruby = self.reading_slice(self.read_left, read_right);
        if ruby.is_empty() {
            self.flag(LowConfidenceReason::EmptyReading);
        }
        let kanji = std::mem::take(&mut self.kanji_buf);
        self.segments.push(Segment::with_ruby(kanji, ruby));
    }

    fn reading_slice(&self, from: usize, to: usize) -> String {
        let len = self.reading.len();
        let to = to.min(len);
        let from = from.min(to);
        self.reading[from..to].iter().collect()
    }

    fn flag(&mut self, reason: LowConfidenceReason) {
        self.low_confidence.get_or_insert(reason);
    }
}
