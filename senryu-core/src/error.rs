//! Core error types
//!
//! Analysis itself never fails: any string, including an empty one,
//! produces a result. Errors here only cover parsing caller-supplied
//! settings.

use thiserror::Error;

/// Core errors (no I/O, no data-quality faults)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Verse form name that is not one of the supported patterns
    #[error("unknown verse form: {0} (expected 5-7-5, 5-7 or 7-5)")]
    UnknownForm(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
