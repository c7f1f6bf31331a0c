//! senryu CLI library
//!
//! This library provides the command-line interface for furigana
//! annotation and 5-7-5 verse validation.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;
pub mod progress;
pub mod tokenizer;

pub use error::{CliError, CliResult};
