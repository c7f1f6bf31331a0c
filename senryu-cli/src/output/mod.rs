//! Output formatting module

use anyhow::Result;
use senryu_api::{RubyAnalysis, SubmissionReport};
use senryu_core::MoraCount;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter: Send {
    /// Output one annotated phrase read from `source`
    fn format_phrase(&mut self, source: &str, analysis: &RubyAnalysis) -> Result<()>;

    /// Output the mora count of a phonetic text
    fn format_count(&mut self, text: &str, count: &MoraCount) -> Result<()>;

    /// Output the verdict for one submission read from `source`
    fn format_report(&mut self, source: &str, report: &SubmissionReport) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Bracket notation, one line per phrase or submission
    #[default]
    Text,
    /// JSON array of results
    Json,
    /// Markdown with inline HTML ruby
    Markdown,
}

impl OutputFormat {
    /// All formats with a short description, for `senryu list formats`
    pub const DESCRIPTIONS: [(OutputFormat, &'static str); 3] = [
        (OutputFormat::Text, "桜[さくら] notation and one verdict line per submission"),
        (OutputFormat::Json, "JSON array of analyses or reports"),
        (OutputFormat::Markdown, "numbered list with <ruby> markup"),
    ];

    /// Lowercase name as accepted by `--format`
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }
}

/// Build the formatter for `format` writing to `writer`
pub fn create_formatter<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + Send + 'a>,
    pretty_json: bool,
) -> Box<dyn OutputFormatter + 'a> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer).pretty(pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_names_match_value_enum() {
        use clap::ValueEnum;

        for (format, _) in OutputFormat::DESCRIPTIONS {
            assert_eq!(OutputFormat::from_str(format.name(), true), Ok(format));
        }
    }

    #[test]
    fn test_format_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            format: OutputFormat,
        }

        let wrapper: Wrapper = toml::from_str("format = \"markdown\"").unwrap();
        assert_eq!(wrapper.format, OutputFormat::Markdown);
    }

    #[test]
    fn test_create_formatter_writes_to_buffer() {
        let mut buffer = Vec::new();
        {
            let mut formatter = create_formatter(OutputFormat::Text, Box::new(&mut buffer), true);
            formatter
                .format_count("ふるいけや", &senryu_core::count_part("ふるいけや"))
                .unwrap();
            formatter.finish().unwrap();
        }
        assert!(String::from_utf8(buffer).unwrap().starts_with("ふるいけや"));
    }
}
