//! Configuration for batch harvesting

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Batch driver settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarvestConfig {
    /// Maximum papers per conference run (0 = unlimited)
    pub limit: usize,

    /// Pause between documents (milliseconds)
    pub inter_document_delay_ms: u64,

    /// Timeout for index, API and PDF requests (seconds)
    pub request_timeout_secs: u64,

    /// Notes fetched per API page
    pub page_size: usize,

    /// Text converter executable
    pub pdftotext: String,

    /// Structured (HTML) converter executable
    pub pdftohtml: String,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            limit: 10,
            inter_document_delay_ms: 1_000,
            request_timeout_secs: 60,
            page_size: 1_000,
            pdftotext: "pdftotext".to_string(),
            pdftohtml: "pdftohtml".to_string(),
        }
    }
}

impl HarvestConfig {
    /// Pause between documents as a Duration
    pub fn inter_document_delay(&self) -> Duration {
        Duration::from_millis(self.inter_document_delay_ms)
    }

    /// Request timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Apply the paper limit to a list of PDF URLs
    pub fn apply_limit(&self, urls: &mut Vec<String>) {
        if self.limit > 0 && urls.len() > self.limit {
            urls.truncate(self.limit);
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be greater than 0".to_string());
        }
        if self.page_size == 0 {
            return Err("page_size must be greater than 0".to_string());
        }
        if self.pdftotext.trim().is_empty() || self.pdftohtml.trim().is_empty() {
            return Err("converter commands cannot be empty".to_string());
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
