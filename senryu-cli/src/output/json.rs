//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use senryu_api::{RubyAnalysis, SubmissionReport};
use senryu_core::MoraCount;
use serde::Serialize;
use std::io::Write;

/// JSON formatter - collects results and writes them as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    entries: Vec<serde_json::Value>,
    pretty: bool,
}

#[derive(Serialize)]
struct PhraseEntry<'a> {
    source: &'a str,
    #[serde(flatten)]
    analysis: &'a RubyAnalysis,
}

#[derive(Serialize)]
struct CountEntry<'a> {
    text: &'a str,
    #[serde(flatten)]
    count: &'a MoraCount,
}

#[derive(Serialize)]
struct ReportEntry<'a> {
    source: &'a str,
    accepted: bool,
    #[serde(flatten)]
    report: &'a SubmissionReport,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter (pretty-printed)
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            entries: Vec::new(),
            pretty: true,
        }
    }

    /// Choose between pretty and compact output
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn push(&mut self, entry: impl Serialize) -> Result<()> {
        self.entries.push(serde_json::to_value(entry)?);
        Ok(())
    }
}

impl<W: Write + Send> OutputFormatter for JsonFormatter<W> {
    fn format_phrase(&mut self, source: &str, analysis: &RubyAnalysis) -> Result<()> {
        self.push(PhraseEntry { source, analysis })
    }

    fn format_count(&mut self, text: &str, count: &MoraCount) -> Result<()> {
        self.push(CountEntry { text, count })
    }

    fn format_report(&mut self, source: &str, report: &SubmissionReport) -> Result<()> {
        self.push(ReportEntry {
            source,
            accepted: report.is_accepted(),
            report,
        })
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.entries)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.entries)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
