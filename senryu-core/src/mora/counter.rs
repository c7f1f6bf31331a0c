//! Mora and symbol counting

use crate::kana::{is_counted_symbol, is_small_kana, to_hiragana};
use crate::ruby::{Phrase, Segment};

/// Input accepted by [`count_part`]
#[derive(Debug, Clone, Copy)]
pub enum CountInput<'a> {
    /// Text that is already phonetic
    Text(&'a str),
    /// Aligned segments; ruby stands in for the written word
    Segments(&'a [Segment]),
}

impl<'a> From<&'a str> for CountInput<'a> {
    fn from(text: &'a str) -> Self {
        CountInput::Text(text)
    }
}

impl<'a> From<&'a String> for CountInput<'a> {
    fn from(text: &'a String) -> Self {
        CountInput::Text(text)
    }
}

impl<'a> From<&'a [Segment]> for CountInput<'a> {
    fn from(segments: &'a [Segment]) -> Self {
        CountInput::Segments(segments)
    }
}

impl<'a> From<&'a Vec<Segment>> for CountInput<'a> {
    fn from(segments: &'a Vec<Segment>) -> Self {
        CountInput::Segments(segments)
    }
}

impl<'a> From<&'a Phrase> for CountInput<'a> {
    fn from(phrase: &'a Phrase) -> Self {
        CountInput::Segments(phrase.segments())
    }
}

/// Phonetic length of a phrase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoraCount {
    /// Morae, not counting punctuation
    pub mora_count: usize,
    /// Punctuation symbols found in the phonetic string
    pub symbol_count: usize,
}

/// Counts morae and symbols in raw phonetic text or in aligned segments.
///
/// Small ゃゅょぁぃぅぇぉ attach to the preceding kana and add nothing;
/// every other character is one mora, except the punctuation symbols
/// 。、「」・！？ which are counted separately.
///
/// ```rust
/// use senryu_core::mora::count_part;
///
/// let count = count_part("きゃべつ、");
/// assert_eq!(count.mora_count, 3);
/// assert_eq!(count.symbol_count, 1);
/// ```
pub fn count_part<'a>(input: impl Into<CountInput<'a>>) -> MoraCount {
    let phonetic = phonetic_string(input.into());

    let mut raw = 0;
    let mut symbol_count = 0;
    for c in phonetic.chars() {
        if is_small_kana(c) {
            continue;
        }
        raw += 1;
        if is_counted_symbol(c) {
            symbol_count += 1;
        }
    }

    MoraCount {
        mora_count: raw - symbol_count,
        symbol_count,
    }
}

/// Counts raw phonetic text
pub fn count_text(text: &str) -> MoraCount {
    count_part(text)
}

/// Counts aligned segments
pub fn count_segments(segments: &[Segment]) -> MoraCount {
    count_part(segments)
}

/// The hiragana string that counting operates on
pub fn phonetic_string(input: CountInput<'_>) -> String {
    match input {
        CountInput::Text(text) => to_hiragana(text),
        CountInput::Segments(segments) => segments
            .iter()
            .map(|segment| to_hiragana(segment.phonetic()))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_plain_hiragana() {
        assert_eq!(
            count_text("ふるいけや"),
            MoraCount {
                mora_count: 5,
                symbol_count: 0
            }
        );
    }

    #[test]
    fn test_small_kana_do_not_count() {
        assert_eq!(count_text("きょう").mora_count, 2);
        assert_eq!(count_text("ふぁいと").mora_count, 3);
        // sokuon and long vowel are full morae
        assert_eq!(count_text("がっこう").mora_count, 4);
        assert_eq!(count_text("らーめん").mora_count, 4);
    }

    #[test]
    fn test_katakana_small_kana_are_normalized() {
        assert_eq!(count_text("キョウ").mora_count, 2);
        assert_eq!(count_text("ｷｮｳ").mora_count, 2);
    }

    #[test]
    fn test_symbols_are_subtracted() {
        let count = count_text("「なつくさや」、");
        assert_eq!(count.symbol_count, 3);
        assert_eq!(count.mora_count, 5);

        // raw count 9, two of which are symbols
        let count = count_text("かきくえば、かね。");
        assert_eq!(count.symbol_count, 2);
        assert_eq!(count.mora_count, 7);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(count_text(""), MoraCount::default());
        assert_eq!(count_segments(&[]), MoraCount::default());
    }

    #[test]
    fn test_segments_prefer_ruby() {
        let segments = vec![
            Segment::with_ruby("古", "ふる"),
            Segment::with_ruby("池", "いけ"),
            Segment::plain("や"),
        ];
        assert_eq!(count_segments(&segments).mora_count, 5);
        assert_eq!(
            phonetic_string(CountInput::from(&segments)),
            "ふるいけや"
        );
    }

    #[test]
    fn test_segments_normalize_katakana_words_and_ruby() {
        let segments = vec![Segment::plain("カエル"), Segment::with_ruby("飛", "ト")];
        assert_eq!(phonetic_string(CountInput::from(&segments)), "かえると");
        assert_eq!(count_segments(&segments).mora_count, 4);
    }

    #[test]
    fn test_empty_ruby_counts_the_word() {
        // stored phrases carry ruby "" on kana segments
        let segments = vec![Segment::with_ruby("古池", "フルイケ"), Segment::with_ruby("や", "")];
        assert_eq!(count_segments(&segments).mora_count, 5);
        assert_eq!(phonetic_string(CountInput::from(&segments)), "ふるいけや");

        let segments = vec![Segment::with_ruby("日", ""), Segment::plain("の")];
        assert_eq!(count_segments(&segments).mora_count, 2);
    }

    #[test]
    fn test_unknown_placeholder_counts_two() {
        let segments = vec![Segment::with_ruby("鬱", "○○")];
        assert_eq!(count_segments(&segments).mora_count, 2);
    }

    #[test]
    fn test_phrase_input() {
        let phrase = Phrase::new(vec![Segment::with_ruby("桜", "さくら")]);
        assert_eq!(
            count_part(&phrase),
            MoraCount {
                mora_count: 3,
                symbol_count: 0
            }
        );
    }
}
