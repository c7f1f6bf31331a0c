//! Verse form validation
//!
//! Each phrase is checked against a target mora count with a tolerance
//! (one mora by default) so that the classical excess/deficient-mora
//! variations (字余り/字足らず) are accepted. Failures are reported as a
//! bitmask addressing the failing phrase, which callers turn into a
//! user-facing message.

use std::fmt;
use std::str::FromStr;

use super::counter::{count_segments, MoraCount};
use crate::error::CoreError;
use crate::ruby::{Phrase, Segment};

/// Accepted deviation from the target mora count
pub const DEFAULT_TOLERANCE: usize = 1;

/// Largest number of punctuation symbols a whole submission may contain
pub const MAX_SYMBOLS: usize = 4;

/// Outcome of validating one phrase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationResult {
    pub matches: bool,
    pub mora_count: usize,
    pub symbol_count: usize,
}

/// Validates a phrase against `target` with the default tolerance.
pub fn validate_phrase(segments: &[Segment], target: usize) -> ValidationResult {
    validate_phrase_with(segments, target, DEFAULT_TOLERANCE)
}

/// Validates a phrase against `target`, accepting
/// `target - tolerance ..= target + tolerance` morae.
pub fn validate_phrase_with(
    segments: &[Segment],
    target: usize,
    tolerance: usize,
) -> ValidationResult {
    let MoraCount {
        mora_count,
        symbol_count,
    } = count_segments(segments);

    ValidationResult {
        matches: within_tolerance(mora_count, target, tolerance),
        mora_count,
        symbol_count,
    }
}

fn within_tolerance(mora_count: usize, target: usize, tolerance: usize) -> bool {
    mora_count + tolerance >= target && mora_count <= target + tolerance
}

/// Supported verse patterns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum Form {
    /// Full senryu/haiku: 5-7-5
    #[default]
    FiveSevenFive,
    /// Upper two phrases only: 5-7
    FiveSeven,
    /// Lower two phrases only: 7-5
    SevenFive,
}

impl Form {
    pub const ALL: [Form; 3] = [Form::FiveSevenFive, Form::FiveSeven, Form::SevenFive];

    /// Target mora count of each phrase
    pub fn targets(self) -> &'static [usize] {
        match self {
            Form::FiveSevenFive => &[5, 7, 5],
            Form::FiveSeven => &[5, 7],
            Form::SevenFive => &[7, 5],
        }
    }

    /// Number of phrases in the form
    pub fn arity(self) -> usize {
        self.targets().len()
    }

    pub fn name(self) -> &'static str {
        match self {
            Form::FiveSevenFive => "5-7-5",
            Form::FiveSeven => "5-7",
            Form::SevenFive => "7-5",
        }
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Form {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "5-7-5" | "575" => Ok(Form::FiveSevenFive),
            "5-7" | "57" => Ok(Form::FiveSeven),
            "7-5" | "75" => Ok(Form::SevenFive),
            other => Err(CoreError::UnknownForm(other.to_string())),
        }
    }
}

impl TryFrom<String> for Form {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Form> for String {
    fn from(form: Form) -> Self {
        form.name().to_string()
    }
}

/// Bitmask of failing phrases: bit `i` is set when phrase `i` failed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ErrorCode(u8);

impl ErrorCode {
    pub const OK: ErrorCode = ErrorCode(0);

    pub fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    /// True when every phrase passed
    pub fn is_ok(self) -> bool {
        self.0 == 0
    }

    /// Marks phrase `index` as failed
    pub fn set(&mut self, index: usize) {
        debug_assert!(index < 8, "phrase index {index} does not fit the bitmask");
        self.0 |= 1 << index;
    }

    pub fn is_set(self, index: usize) -> bool {
        index < 8 && self.0 & (1 << index) != 0
    }

    /// Zero-based indices of the failing phrases
    pub fn failed_phrases(self) -> Vec<usize> {
        (0..8).filter(|&i| self.is_set(i)).collect()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation of a whole verse
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerseReport {
    pub form: Form,
    pub error_code: ErrorCode,
    /// Symbols across all phrases
    pub symbol_total: usize,
    /// One result per phrase slot of the form
    pub results: Vec<ValidationResult>,
}

impl VerseReport {
    /// True when the mora check passed for every phrase
    pub fn matches(&self) -> bool {
        self.error_code.is_ok()
    }

    /// True when the submission carries more than [`MAX_SYMBOLS`] symbols
    pub fn exceeds_symbol_limit(&self) -> bool {
        self.exceeds_symbols(MAX_SYMBOLS)
    }

    pub fn exceeds_symbols(&self, limit: usize) -> bool {
        self.symbol_total > limit
    }
}

/// Validates phrases against a form.
///
/// A slot with no phrase is validated as empty and fails; phrases beyond
/// the form's arity are ignored.
pub fn validate_form<P: AsRef<[Segment]>>(
    phrases: &[P],
    form: Form,
    tolerance: usize,
) -> VerseReport {
    if phrases.len() > form.arity() {
        tracing::warn!(
            form = %form,
            phrases = phrases.len(),
            "ignoring phrases beyond the form's arity"
        );
    }

    let mut error_code = ErrorCode::OK;
    let mut symbol_total = 0;
    let mut results = Vec::with_capacity(form.arity());

    for (index, &target) in form.targets().iter().enumerate() {
        let segments: &[Segment] = phrases.get(index).map(|p| p.as_ref()).unwrap_or_default();
        let result = validate_phrase_with(segments, target, tolerance);
        if !result.matches {
            error_code.set(index);
        }
        symbol_total += result.symbol_count;
        results.push(result);
    }

    tracing::debug!(form = %form, error_code = error_code.bits(), symbol_total, "validated verse");

    VerseReport {
        form,
        error_code,
        symbol_total,
        results,
    }
}

/// Validates three phrases against 5-7-5 with the default tolerance.
///
/// ```rust
/// use senryu_core::mora::validate_triple;
/// use senryu_core::ruby::{Phrase, Segment};
///
/// let report = validate_triple(
///     &Phrase::plain("ふるいけや"),
///     &Phrase::plain("かわずとびこむ"),
///     &Phrase::plain("みずのおと"),
/// );
/// assert!(report.error_code.is_ok());
/// assert_eq!(report.symbol_total, 0);
/// ```
pub fn validate_triple(first: &Phrase, second: &Phrase, third: &Phrase) -> VerseReport {
    validate_form(&[first, second, third], Form::FiveSevenFive, DEFAULT_TOLERANCE)
}
