//! Ruby command implementation

use super::common::{display_name, InputArgs, OutputArgs};
use anyhow::Result;
use clap::Args;

/// Arguments for the ruby command
#[derive(Debug, Args)]
pub struct RubyArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl RubyArgs {
    /// Execute the ruby command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        log::debug!("Arguments: {:?}", self);
        let config = self.output.load_config()?;
        let loaded = self.input.load(&config, quiet)?;

        let mut formatter = self.output.formatter(&config)?;
        let mut phrase_count = 0;
        for (path, analyses) in &loaded {
            let source = display_name(path);
            for analysis in analyses {
                formatter.format_phrase(&source, analysis)?;
                phrase_count += 1;
            }
        }
        formatter.finish()?;

        log::info!("Annotated {} phrase(s)", phrase_count);
        Ok(())
    }
}
