//! Ruby-annotated segments and phrases

use std::fmt;

/// Placeholder ruby for ideographs whose reading the analyzer does not know
pub const UNKNOWN_READING: &str = "○○";

/// A run of text with optional furigana
///
/// `ruby == None` means the word is already phonetic, or carries no
/// recoverable reading.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub word: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ruby: Option<String>,
}

impl Segment {
    /// A segment without furigana
    pub fn plain(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            ruby: None,
        }
    }

    /// A segment annotated with `ruby`
    pub fn with_ruby(word: impl Into<String>, ruby: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            ruby: Some(ruby.into()),
        }
    }

    /// The ruby, unless it is missing or empty
    pub fn reading(&self) -> Option<&str> {
        self.ruby.as_deref().filter(|ruby| !ruby.is_empty())
    }

    /// What the segment sounds like: the reading, else the word itself
    pub fn phonetic(&self) -> &str {
        self.reading().unwrap_or(&self.word)
    }

    /// Returns true if the ruby is the unknown-reading placeholder
    pub fn has_unknown_reading(&self) -> bool {
        self.ruby.as_deref() == Some(UNKNOWN_READING)
    }
}

impl fmt::Display for Segment {
    /// Bracket notation: `桜[さくら]`, or the bare word when there is no ruby
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reading() {
            Some(ruby) => write!(f, "{}[{}]", self.word, ruby),
            None => f.write_str(&self.word),
        }
    }
}

/// One verse line: an ordered sequence of segments
///
/// Concatenating the words of a phrase reproduces the text it was built
/// from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Phrase {
    segments: Vec<Segment>,
}

impl Phrase {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// A single unannotated segment covering `text`, or an empty phrase
    /// when `text` is empty
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            Self::default()
        } else {
            Self::new(vec![Segment::plain(text)])
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True when the phrase contains no text at all
    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(|s| s.word.is_empty())
    }

    /// The written text of the phrase
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.word.as_str()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    pub(crate) fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }
}

impl From<Vec<Segment>> for Phrase {
    fn from(segments: Vec<Segment>) -> Self {
        Self::new(segments)
    }
}

impl AsRef<[Segment]> for Phrase {
    fn as_ref(&self) -> &[Segment] {
        &self.segments
    }
}

impl<'a> IntoIterator for &'a Phrase {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl FromIterator<Segment> for Phrase {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}
