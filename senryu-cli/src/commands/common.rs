//! Arguments and helpers shared by the file-processing commands

use crate::config::CliConfig;
use crate::input::{resolve_patterns, PhraseSource, TokenFormat};
use crate::output::{create_formatter, OutputFormat, OutputFormatter};
use crate::progress::ProgressReporter;
use crate::tokenizer::CommandTokenizer;
use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use senryu_api::RubyAnalysis;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Where phrases are read from
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Layout of token files (ignored with --tokenizer-cmd)
    #[arg(short, long, value_enum, default_value = "auto")]
    pub tokens: TokenFormat,

    /// Analyze raw text lines with this MeCab-compatible command
    #[arg(long, value_name = "CMD", env = "SENRYU_TOKENIZER")]
    pub tokenizer_cmd: Option<String>,

    /// Number of worker threads (overrides the config file)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,
}

impl InputArgs {
    /// The external analyzer, when one was requested
    pub fn command_tokenizer(&self) -> Result<Option<CommandTokenizer>> {
        self.tokenizer_cmd
            .as_deref()
            .map(CommandTokenizer::parse)
            .transpose()
            .map_err(Into::into)
    }

    /// Resolve the input patterns and align every phrase, file by file
    pub fn load(
        &self,
        config: &CliConfig,
        quiet: bool,
    ) -> Result<Vec<(PathBuf, Vec<RubyAnalysis>)>> {
        let files = resolve_patterns(&self.input)?;
        let tokenizer = self.command_tokenizer()?;
        let source = match &tokenizer {
            Some(tokenizer) => PhraseSource::Command(tokenizer),
            None => PhraseSource::Tokens(self.tokens),
        };

        log::info!("Processing {} file(s)", files.len());
        let worker_threads = self.threads.unwrap_or(config.performance.worker_threads);
        run_in_pool(worker_threads, || load_files(&files, source, quiet))?
    }
}

/// Where and how results are written
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "SENRYU_CONFIG")]
    pub config: Option<PathBuf>,
}

impl OutputArgs {
    pub fn load_config(&self) -> Result<CliConfig> {
        CliConfig::load(self.config.as_deref())
    }

    /// Formatter for the requested format and destination
    pub fn formatter(&self, config: &CliConfig) -> Result<Box<dyn OutputFormatter>> {
        let format = self.format.unwrap_or(config.output.default_format);
        let writer: Box<dyn Write + Send> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        Ok(create_formatter(format, writer, config.output.pretty_json))
    }
}

/// Run `job` on a dedicated pool, or on rayon's global pool when
/// `worker_threads` is 0
pub fn run_in_pool<T: Send>(worker_threads: usize, job: impl FnOnce() -> T + Send) -> Result<T> {
    if worker_threads == 0 {
        return Ok(job());
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(worker_threads)
        .build()
        .context("Failed to build worker pool")?;
    Ok(pool.install(job))
}

fn load_files(
    files: &[PathBuf],
    source: PhraseSource<'_>,
    quiet: bool,
) -> Result<Vec<(PathBuf, Vec<RubyAnalysis>)>> {
    let mut progress = ProgressReporter::new(quiet);
    progress.init_files(files.len() as u64);

    let loaded = files
        .par_iter()
        .map(|path| -> Result<(PathBuf, Vec<RubyAnalysis>)> {
            let analyses = source.load(path)?;
            log_low_confidence(path, &analyses);
            progress.file_completed(&display_name(path));
            Ok((path.clone(), analyses))
        })
        .collect::<Result<Vec<_>>>();

    progress.finish();
    loaded
}

fn log_low_confidence(path: &Path, analyses: &[RubyAnalysis]) {
    for analysis in analyses.iter().filter(|a| !a.is_confident()) {
        for event in &analysis.low_confidence {
            log::info!(
                "{}: uncertain reading for {:?} in {:?} ({:?})",
                path.display(),
                event.surface_form,
                analysis.text,
                event.reason
            );
        }
    }
}

/// Label used for a file in output and progress messages
pub fn display_name(path: &Path) -> String {
    path.display().to_string()
}
