//! Morphological tokens consumed from an external analyzer
//!
//! The analyzer (MeCab, kuromoji, ...) is a collaborator. This crate only
//! consumes its output contract: surface text, a kana reading when the
//! analyzer has one, and whether the word came from the dictionary.

/// Whether the analyzer matched the token against its dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum WordType {
    /// Dictionary entry
    Known,
    /// Segmented heuristically; the reading cannot be trusted
    Unknown,
}

/// A single token of analyzer output
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// Text as written
    pub surface_form: String,
    /// Phonetic form in full-width katakana, if the analyzer has one
    #[cfg_attr(feature = "serde", serde(default))]
    pub reading: Option<String>,
    /// Dictionary classification
    pub word_type: WordType,
}

impl Token {
    /// Creates a dictionary token with the given reading
    pub fn known(surface_form: impl Into<String>, reading: impl Into<String>) -> Self {
        Self {
            surface_form: surface_form.into(),
            reading: Some(reading.into()),
            word_type: WordType::Known,
        }
    }

    /// Creates a token the analyzer could not find in its dictionary
    pub fn unknown(surface_form: impl Into<String>) -> Self {
        Self {
            surface_form: surface_form.into(),
            reading: None,
            word_type: WordType::Unknown,
        }
    }

    pub fn is_known(&self) -> bool {
        self.word_type == WordType::Known
    }
}
