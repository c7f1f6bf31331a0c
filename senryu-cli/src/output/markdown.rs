//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use senryu_api::{RubyAnalysis, SubmissionReport};
use senryu_core::{MoraCount, Phrase};
use std::io::Write;

/// Markdown formatter - numbered list with inline `<ruby>` markup
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    item_count: usize,
    rejected_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            item_count: 0,
            rejected_count: 0,
        }
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render a phrase as HTML ruby; segments without a reading stay plain
pub fn render_ruby_html(phrase: &Phrase) -> String {
    phrase
        .iter()
        .map(|segment| match segment.reading() {
            Some(ruby) => format!(
                "<ruby>{}<rt>{}</rt></ruby>",
                escape_html(&segment.word),
                escape_html(ruby)
            ),
            None => escape_html(&segment.word),
        })
        .collect()
}

impl<W: Write + Send> OutputFormatter for MarkdownFormatter<W> {
    fn format_phrase(&mut self, _source: &str, analysis: &RubyAnalysis) -> Result<()> {
        self.item_count += 1;
        writeln!(
            self.writer,
            "{}. {}",
            self.item_count,
            render_ruby_html(&analysis.ruby_data)
        )?;
        Ok(())
    }

    fn format_count(&mut self, text: &str, count: &MoraCount) -> Result<()> {
        self.item_count += 1;
        writeln!(
            self.writer,
            "{}. {}: **{}** morae, {} symbols",
            self.item_count,
            escape_html(text),
            count.mora_count,
            count.symbol_count
        )?;
        Ok(())
    }

    fn format_report(&mut self, _source: &str, report: &SubmissionReport) -> Result<()> {
        self.item_count += 1;
        let mark = match &report.rejection {
            None => "✓".to_string(),
            Some(rejection) => {
                self.rejected_count += 1;
                format!("✗ *{}*", rejection)
            }
        };
        writeln!(
            self.writer,
            "{}. {} {}",
            self.item_count,
            escape_html(&report.display_text),
            mark
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total items: {}*", self.item_count)?;
        if self.rejected_count > 0 {
            writeln!(self.writer, "*Rejected: {}*", self.rejected_count)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use senryu_api::{assess, ruby_from_tokens, Config};
    use senryu_core::{Segment, Token};

    #[test]
    fn test_render_ruby_html() {
        let phrase = Phrase::new(vec![
            Segment::with_ruby("飛", "と"),
            Segment::plain("び"),
            Segment::with_ruby("込", "こ"),
            Segment::plain("む"),
        ]);
        assert_eq!(
            render_ruby_html(&phrase),
            "<ruby>飛<rt>と</rt></ruby>び<ruby>込<rt>こ</rt></ruby>む"
        );
    }

    #[test]
    fn test_render_empty_ruby_as_plain() {
        let phrase = Phrase::new(vec![Segment::with_ruby("日", ""), Segment::plain("の")]);
        assert_eq!(render_ruby_html(&phrase), "日の");
    }

    #[test]
    fn test_render_escapes_markup() {
        assert_eq!(render_ruby_html(&Phrase::plain("<b>")), "&lt;b&gt;");
    }

    #[test]
    fn test_list_and_totals() {
        let mut buffer = Vec::new();
        {
            let mut formatter = MarkdownFormatter::new(&mut buffer);
            let analysis = ruby_from_tokens(&[Token::known("桜", "サクラ")]);
            formatter.format_phrase("-", &analysis).unwrap();
            let report = assess(&[Phrase::plain("ふるいけや")], &Config::default());
            formatter.format_report("-", &report).unwrap();
            formatter.finish().unwrap();
        }
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.contains("1. <ruby>桜<rt>さくら</rt></ruby>"));
        assert!(output.contains("2. ふるいけや ✗ *expected 3 phrases, got 1*"));
        assert!(output.contains("---"));
        assert!(output.contains("*Total items: 2*"));
        assert!(output.contains("*Rejected: 1*"));
    }
}
