//! Mora counting and verse validation

pub mod counter;
pub mod validator;

pub use counter::{count_part, count_segments, count_text, phonetic_string, CountInput, MoraCount};
pub use validator::{
    validate_form, validate_phrase, validate_phrase_with, validate_triple, ErrorCode, Form,
    ValidationResult, VerseReport, DEFAULT_TOLERANCE, MAX_SYMBOLS,
};
