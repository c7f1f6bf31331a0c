//! Furigana (ruby) annotation
//!
//! Turns analyzer tokens into ordered `(word, ruby)` segments, pairing each
//! ideograph run with its slice of the token's reading.

pub mod aligner;
pub mod segment;

pub use aligner::{
    align, align_token, align_with_diagnostics, Alignment, LowConfidence, LowConfidenceReason,
    TokenAlignment,
};
pub use segment::{Phrase, Segment, UNKNOWN_READING};
