//! Configuration management for the CLI.

use crate::cli::Cli;
use crate::error::{CliError, Result};
use benchlink_extractor::ExtractorConfig;
use benchlink_harvester::HarvestConfig;
use benchlink_llm::JudgeConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration, one section per layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// URL scanning and mention finding
    pub extractor: ExtractorConfig,

    /// Judge fallback
    pub judge: JudgeConfig,

    /// Batch driver
    pub harvest: HarvestConfig,
}

impl Config {
    /// Load configuration from `path`, or defaults when no path is given.
    ///
    /// A path that was given but does not exist is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.is_file() {
            return Err(CliError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Apply command-line flags on top of file values.
    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(limit) = cli.limit {
            self.harvest.limit = limit;
        }
        if cli.judge {
            self.judge.enabled = true;
        }
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        self.extractor
            .validate()
            .map_err(|e| CliError::Config(format!("[extractor] {}", e)))?;
        self.judge
            .validate()
            .map_err(|e| CliError::Config(format!("[judge] {}", e)))?;
        self.harvest
            .validate()
            .map_err(|e| CliError::Config(format!("[harvest] {}", e)))?;
        Ok(())
    }

    /// Serialize configuration to TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }
}
