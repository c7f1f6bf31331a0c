//! File reading utilities

use anyhow::{Context, Result};
use senryu_api::tokenizer::{parse_kuromoji_json, parse_mecab};
use senryu_core::Token;
use std::fs;
use std::path::Path;

/// Layout of a file holding analyzer output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum TokenFormat {
    /// kuromoji for `.json` files, MeCab otherwise
    #[default]
    Auto,
    /// MeCab/IPADIC text output, one phrase per EOS block
    Mecab,
    /// kuromoji JSON, a token array or an array of token arrays
    Kuromoji,
}

impl TokenFormat {
    /// Resolve `Auto` from the file extension
    pub fn for_path(self, path: &Path) -> TokenFormat {
        match self {
            TokenFormat::Auto => {
                let is_json = path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
                if is_json {
                    TokenFormat::Kuromoji
                } else {
                    TokenFormat::Mecab
                }
            }
            other => other,
        }
    }
}

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Non-blank lines, trimmed; each is one phrase
    pub fn read_phrases(path: &Path) -> Result<Vec<String>> {
        let content = Self::read_text(path)?;
        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Parse analyzer output into one token list per phrase
    pub fn read_token_lists(path: &Path, format: TokenFormat) -> Result<Vec<Vec<Token>>> {
        let content = Self::read_text(path)?;
        let lists = match format.for_path(path) {
            TokenFormat::Kuromoji => parse_kuromoji_json(&content),
            _ => parse_mecab(&content),
        }
        .with_context(|| format!("Failed to parse tokens in {}", path.display()))?;

        log::debug!("{}: {} phrase(s)", path.display(), lists.len());
        Ok(lists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use senryu_core::WordType;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_read_text_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");

        let content = "古池や\n蛙飛び込む\n水の音\n";
        fs::write(&file_path, content).unwrap();

        let result = FileReader::read_text(&file_path).unwrap();
        assert_eq!(result, content);
    }

    #[test]
    fn test_read_text_nonexistent_file() {
        let path = Path::new("/nonexistent/file.txt");
        let result = FileReader::read_text(path);

        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to read file"));
    }

    #[test]
    fn test_read_phrases_skips_blank_lines() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("raw.txt");
        fs::write(&file_path, "古池や\n\n  蛙飛び込む \r\n水の音").unwrap();

        let phrases = FileReader::read_phrases(&file_path).unwrap();
        assert_eq!(phrases, vec!["古池や", "蛙飛び込む", "水の音"]);
    }

    #[test]
    fn test_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.txt");
        File::create(&file_path).unwrap();

        assert!(FileReader::read_phrases(&file_path).unwrap().is_empty());
        assert!(FileReader::read_token_lists(&file_path, TokenFormat::Mecab)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_auto_format_from_extension() {
        assert_eq!(
            TokenFormat::Auto.for_path(Path::new("a.JSON")),
            TokenFormat::Kuromoji
        );
        assert_eq!(
            TokenFormat::Auto.for_path(Path::new("a.mecab")),
            TokenFormat::Mecab
        );
        assert_eq!(
            TokenFormat::Mecab.for_path(Path::new("a.json")),
            TokenFormat::Mecab
        );
    }

    #[test]
    fn test_read_mecab_tokens() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("sakura.txt");
        fs::write(
            &file_path,
            "桜\t名詞,一般,*,*,*,*,桜,サクラ,サクラ\nEOS\n",
        )
        .unwrap();

        let lists = FileReader::read_token_lists(&file_path, TokenFormat::Auto).unwrap();
        assert_eq!(lists, vec![vec![Token::known("桜", "サクラ")]]);
    }

    #[test]
    fn test_read_kuromoji_tokens() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("tokens.json");
        fs::write(
            &file_path,
            r#"[{"surface_form": "ぴえん", "word_type": "UNKNOWN"}]"#,
        )
        .unwrap();

        let lists = FileReader::read_token_lists(&file_path, TokenFormat::Auto).unwrap();
        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0][0].word_type, WordType::Unknown);
    }

    #[test]
    fn test_parse_error_names_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("broken.txt");
        fs::write(&file_path, "no tab here\nEOS\n").unwrap();

        let error = FileReader::read_token_lists(&file_path, TokenFormat::Mecab).unwrap_err();
        assert!(error.to_string().contains("broken.txt"));
    }
}
