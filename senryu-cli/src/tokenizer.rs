//! External analyzer process
//!
//! Runs a MeCab-compatible command once per phrase: the phrase is written
//! to its stdin and the MeCab output it prints is parsed into tokens.

use crate::error::CliError;
use senryu_api::tokenizer::parse_mecab;
use senryu_api::{ApiError, Tokenizer};
use senryu_core::Token;
use std::io::Write;
use std::process::{Command, Stdio};

/// A [`Tokenizer`] backed by an external command such as `mecab`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTokenizer {
    program: String,
    args: Vec<String>,
}

impl CommandTokenizer {
    /// Split a command line on whitespace into program and arguments
    pub fn parse(command_line: &str) -> Result<Self, CliError> {
        let mut words = command_line.split_whitespace().map(str::to_string);
        let program = words
            .next()
            .ok_or_else(|| CliError::TokenizerCommand("empty command".to_string()))?;
        Ok(Self {
            program,
            args: words.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Tokenizer for CommandTokenizer {
    fn tokenize(&self, text: &str) -> senryu_api::Result<Vec<Token>> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| ApiError::Tokenizer(format!("failed to start {}: {e}", self.program)))?;

        if let Some(mut stdin) = child.stdin.take() {
            // A command that exits without reading is judged by its status
            if let Err(e) = writeln!(stdin, "{text}") {
                if e.kind() != std::io::ErrorKind::BrokenPipe {
                    return Err(e.into());
                }
            }
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(ApiError::Tokenizer(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|_| ApiError::Tokenizer(format!("{} printed invalid UTF-8", self.program)))?;
        log::trace!("{} output for {:?}:\n{}", self.program, text, stdout);

        // One input line gives one EOS block
        Ok(parse_mecab(&stdout)?.into_iter().flatten().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_line() {
        let tokenizer = CommandTokenizer::parse("mecab -d /usr/lib/mecab/dic/ipadic").unwrap();
        assert_eq!(tokenizer.program(), "mecab");
        assert_eq!(tokenizer.args(), ["-d", "/usr/lib/mecab/dic/ipadic"]);
    }

    #[test]
    fn test_empty_command_is_rejected() {
        assert!(matches!(
            CommandTokenizer::parse("   "),
            Err(CliError::TokenizerCommand(_))
        ));
    }

    #[test]
    fn test_missing_program_is_tokenizer_error() {
        let tokenizer = CommandTokenizer::parse("senryu-test-no-such-analyzer").unwrap();
        assert!(matches!(
            tokenizer.tokenize("桜"),
            Err(ApiError::Tokenizer(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_reads_mecab_output_from_command() {
        // cat echoes the analyzer output it is given
        let tokenizer = CommandTokenizer::parse("cat").unwrap();
        let tokens = tokenizer
            .tokenize("桜\t名詞,一般,*,*,*,*,桜,サクラ,サクラ\nEOS")
            .unwrap();
        assert_eq!(tokens, vec![Token::known("桜", "サクラ")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_command() {
        let tokenizer = CommandTokenizer::parse("false").unwrap();
        assert!(matches!(
            tokenizer.tokenize("桜"),
            Err(ApiError::Tokenizer(_))
        ));
    }
}
