//! High-level configuration API

use crate::error::{ApiError, Result};
use senryu_core::mora::{DEFAULT_TOLERANCE, MAX_SYMBOLS};
use senryu_core::Form;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Validation settings for submissions
///
/// ```toml
/// form = "5-7-5"
/// tolerance = 1
/// max_symbols = 4
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Verse pattern every submission must follow
    pub form: Form,
    /// Accepted deviation in morae per phrase
    pub tolerance: usize,
    /// Largest number of punctuation symbols across a submission
    pub max_symbols: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            form: Form::FiveSevenFive,
            tolerance: DEFAULT_TOLERANCE,
            max_symbols: MAX_SYMBOLS,
        }
    }
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse and validate a TOML configuration
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Rejects settings that would accept an empty phrase
    pub fn validate(&self) -> Result<()> {
        let smallest = self.form.targets().iter().copied().min().unwrap_or_default();
        if self.tolerance >= smallest {
            return Err(ApiError::Config(format!(
                "tolerance {} would accept empty phrases for form {} (must be below {})",
                self.tolerance, self.form, smallest
            )));
        }
        Ok(())
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the verse form
    pub fn form(mut self, form: Form) -> Self {
        self.config.form = form;
        self
    }

    /// Set the verse form by name ("5-7-5", "5-7", "7-5")
    pub fn form_name(self, name: &str) -> Result<Self> {
        let form = name
            .parse::<Form>()
            .map_err(|e| ApiError::Config(e.to_string()))?;
        Ok(self.form(form))
    }

    /// Set the mora tolerance
    pub fn tolerance(mut self, tolerance: usize) -> Self {
        self.config.tolerance = tolerance;
        self
    }

    /// Set the symbol limit
    pub fn max_symbols(mut self, max_symbols: usize) -> Self {
        self.config.max_symbols = max_symbols;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}
