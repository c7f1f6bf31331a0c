//! Check command implementation

use super::common::{display_name, run_in_pool, InputArgs, OutputArgs};
use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use rayon::prelude::*;
use senryu_api::{assess, Config, SubmissionReport};
use senryu_core::{Form, Phrase};
use std::path::PathBuf;

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Verse form (overrides the config file)
    #[arg(long, value_name = "FORM")]
    pub form: Option<Form>,

    /// Accepted deviation in morae per phrase (overrides the config file)
    #[arg(long, value_name = "MORAE")]
    pub tolerance: Option<usize>,
}

impl CheckArgs {
    /// Execute the check command
    ///
    /// Consecutive phrases of each file are grouped by the form's arity;
    /// each group is one submission. Fails when any submission is rejected.
    pub fn execute(&self, quiet: bool) -> Result<()> {
        log::debug!("Arguments: {:?}", self);
        let mut config = self.output.load_config()?;
        if let Some(form) = self.form {
            config.validation.form = form;
        }
        if let Some(tolerance) = self.tolerance {
            config.validation.tolerance = tolerance;
        }
        config
            .validation
            .validate()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        let loaded = self.input.load(&config, quiet)?;
        let worker_threads = self
            .input
            .threads
            .unwrap_or(config.performance.worker_threads);
        let checked = run_in_pool(worker_threads, || {
            loaded
                .into_par_iter()
                .map(|(path, analyses)| {
                    let phrases: Vec<Phrase> =
                        analyses.into_iter().map(|a| a.ruby_data).collect();
                    (path, check_groups(&phrases, &config.validation))
                })
                .collect::<Vec<(PathBuf, Vec<SubmissionReport>)>>()
        })?;

        let mut formatter = self.output.formatter(&config)?;
        let mut total = 0;
        let mut rejected = 0;
        for (path, reports) in &checked {
            let source = display_name(path);
            for report in reports {
                total += 1;
                if !report.is_accepted() {
                    rejected += 1;
                }
                formatter.format_report(&source, report)?;
            }
        }
        formatter.finish()?;

        log::info!("{} submission(s) checked, {} rejected", total, rejected);
        if rejected > 0 {
            return Err(CliError::Rejected { rejected, total }.into());
        }
        Ok(())
    }
}

/// Split phrases into submissions of the form's arity and assess each.
///
/// A short trailing group is still assessed so that it is reported as
/// having the wrong phrase count.
pub fn check_groups(phrases: &[Phrase], config: &Config) -> Vec<SubmissionReport> {
    phrases
        .par_chunks(config.form.arity())
        .map(|group| assess(group, config))
        .collect()
}
