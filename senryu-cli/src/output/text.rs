//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use senryu_api::{Rejection, RubyAnalysis, SubmissionReport};
use senryu_core::MoraCount;
use std::io::Write;

/// Plain text formatter - bracket notation, one line per item
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

fn describe(rejection: &Rejection) -> String {
    match rejection {
        Rejection::MoraMismatch { error_code } => {
            let phrases = error_code
                .failed_phrases()
                .iter()
                .map(|index| (index + 1).to_string())
                .collect::<Vec<_>>()
                .join(", ");
            format!("{rejection} (phrases {phrases})")
        }
        other => other.to_string(),
    }
}

impl<W: Write + Send> OutputFormatter for TextFormatter<W> {
    fn format_phrase(&mut self, _source: &str, analysis: &RubyAnalysis) -> Result<()> {
        writeln!(self.writer, "{}", analysis.ruby_data)?;
        Ok(())
    }

    fn format_count(&mut self, text: &str, count: &MoraCount) -> Result<()> {
        writeln!(
            self.writer,
            "{}\t{} morae\t{} symbols",
            text, count.mora_count, count.symbol_count
        )?;
        Ok(())
    }

    fn format_report(&mut self, _source: &str, report: &SubmissionReport) -> Result<()> {
        let counts = report
            .verse
            .results
            .iter()
            .map(|result| result.mora_count.to_string())
            .collect::<Vec<_>>()
            .join("/");

        match &report.rejection {
            None => writeln!(
                self.writer,
                "✓ {} [{}: {}]",
                report.display_text, report.verse.form, counts
            )?,
            Some(rejection) => writeln!(
                self.writer,
                "✗ {} [{}: {}] {}",
                report.display_text,
                report.verse.form,
                counts,
                describe(rejection)
            )?,
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
