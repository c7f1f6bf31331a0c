//! Submission checking
//!
//! A submission is accepted only if, in this order:
//! 1. it has exactly as many phrases as the form,
//! 2. no phrase is empty,
//! 3. every phrase is within tolerance of its target mora count,
//! 4. the whole submission has at most `max_symbols` symbols.

use crate::config::Config;
use crate::dto::SubmissionReport;
use crate::error::Rejection;
use senryu_core::{validate_form, Phrase};

/// Checks phrases against the configured form and limits.
pub fn assess(phrases: &[Phrase], config: &Config) -> SubmissionReport {
    let verse = validate_form(phrases, config.form, config.tolerance);
    let display_text = phrases
        .iter()
        .map(Phrase::text)
        .collect::<Vec<_>>()
        .join(" ");

    let rejection = first_rejection(phrases, config, &verse);
    if let Some(rejection) = &rejection {
        tracing::info!(%rejection, "submission rejected");
    }

    SubmissionReport {
        display_text,
        verse,
        rejection,
    }
}

/// Checks phrases and returns the report only when the submission is accepted.
pub fn check_phrases(
    phrases: &[Phrase],
    config: &Config,
) -> std::result::Result<SubmissionReport, Rejection> {
    assess(phrases, config).into_result()
}

fn first_rejection(
    phrases: &[Phrase],
    config: &Config,
    verse: &senryu_core::VerseReport,
) -> Option<Rejection> {
    let expected = config.form.arity();
    if phrases.len() != expected {
        return Some(Rejection::WrongPhraseCount {
            expected,
            found: phrases.len(),
        });
    }

    if let Some(index) = phrases.iter().position(Phrase::is_empty) {
        return Some(Rejection::EmptyPhrase { index });
    }

    if !verse.error_code.is_ok() {
        return Some(Rejection::MoraMismatch {
            error_code: verse.error_code,
        });
    }

    if verse.exceeds_symbols(config.max_symbols) {
        return Some(Rejection::TooManySymbols {
            total: verse.symbol_total,
            limit: config.max_symbols,
        });
    }

    None
}
