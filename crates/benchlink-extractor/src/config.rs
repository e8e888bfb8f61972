//! Configuration for the extractor

use serde::{Deserialize, Serialize};

/// Window sizes used by the scanners and the dataset name finder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Lines on each side of a URL line included in its context
    pub context_radius: usize,

    /// Siblings on each side of an anchor included in its context
    pub anchor_sibling_radius: usize,

    /// Tokens inspected before a cue word when looking for a hint word
    pub mention_lookback: usize,

    /// Line breaks on each side of a cue word bounding a mention's context
    pub mention_context_markers: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            context_radius: 2,
            anchor_sibling_radius: 4,
            mention_lookback: 4,
            mention_context_markers: 2,
        }
    }
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.mention_lookback == 0 {
            return Err("mention_lookback must be greater than 0".to_string());
        }
        if self.mention_context_markers == 0 {
            return Err("mention_context_markers must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
