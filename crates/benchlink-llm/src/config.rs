//! Configuration for the judge and its invoker

use crate::invoker::{BoxedJudge, JudgeInvoker};
use crate::rate_limit::{RateLimiter, RetryPolicy};
use crate::{ollama, openai, JudgeError, OllamaJudge, OpenAiJudge};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which judge backend to talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum JudgeProvider {
    /// Local Ollama server
    #[default]
    Ollama,
    /// OpenAI-compatible chat completions endpoint
    OpenAi,
}

/// Configuration for the judge stage
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JudgeConfig {
    /// Whether the judge fallback runs at all
    pub enabled: bool,

    /// Backend to use
    pub provider: JudgeProvider,

    /// API base URL
    pub endpoint: String,

    /// Model name
    pub model: String,

    /// Environment variable holding the API key (OpenAI-compatible only)
    pub api_key_env: String,

    /// Per-request timeout (seconds)
    pub timeout_secs: u64,

    /// Minimum interval between consecutive calls (milliseconds)
    pub min_interval_ms: u64,

    /// Total attempts per call, including the first
    pub retry_attempts: u32,

    /// Backoff base multiplier (milliseconds)
    pub backoff_multiplier_ms: u64,

    /// Backoff floor (milliseconds)
    pub backoff_min_ms: u64,

    /// Backoff ceiling (milliseconds)
    pub backoff_max_ms: u64,
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            provider: JudgeProvider::Ollama,
            endpoint: ollama::DEFAULT_ENDPOINT.to_string(),
            model: "llama3".to_string(),
            api_key_env: openai::DEFAULT_API_KEY_ENV.to_string(),
            timeout_secs: ollama::DEFAULT_TIMEOUT_SECS,
            min_interval_ms: 3_000,
            retry_attempts: 3,
            backoff_multiplier_ms: 1_000,
            backoff_min_ms: 2_000,
            backoff_max_ms: 20_000,
        }
    }
}

impl JudgeConfig {
    /// Request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Minimum call interval as a Duration
    pub fn min_interval(&self) -> Duration {
        Duration::from_millis(self.min_interval_ms)
    }

    /// Retry policy described by this configuration
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.retry_attempts,
            multiplier: Duration::from_millis(self.backoff_multiplier_ms),
            min: Duration::from_millis(self.backoff_min_ms),
            max: Duration::from_millis(self.backoff_max_ms),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.retry_attempts == 0 {
            return Err("retry_attempts must be greater than 0".to_string());
        }
        if self.backoff_min_ms > self.backoff_max_ms {
            return Err("backoff_min_ms cannot exceed backoff_max_ms".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        if self.enabled && self.endpoint.trim().is_empty() {
            return Err("endpoint must be set when the judge is enabled".to_string());
        }
        if self.enabled && self.model.trim().is_empty() {
            return Err("model must be set when the judge is enabled".to_string());
        }
        Ok(())
    }

    /// Build the configured judge backend
    pub fn build_judge(&self) -> Result<BoxedJudge, JudgeError> {
        let judge: BoxedJudge = match self.provider {
            JudgeProvider::Ollama => Box::new(OllamaJudge::with_timeout(
                self.endpoint.clone(),
                self.model.clone(),
                self.timeout(),
            )?),
            JudgeProvider::OpenAi => Box::new(OpenAiJudge::from_env(
                self.endpoint.clone(),
                self.model.clone(),
                &self.api_key_env,
                self.timeout(),
            )?),
        };
        Ok(judge)
    }

    /// Build the rate-limited invoker, or `None` when the judge is disabled
    pub fn build_invoker(&self) -> Result<Option<JudgeInvoker>, JudgeError> {
        if !self.enabled {
            return Ok(None);
        }
        let judge = self.build_judge()?;
        Ok(Some(JudgeInvoker::from_boxed(
            judge,
            RateLimiter::new(self.min_interval()),
            self.retry_policy(),
        )))
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = JudgeConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.enabled);
    }

    #[test]
    fn test_default_retry_policy_matches_constants() {
        let config = JudgeConfig::default();
        assert_eq!(config.retry_policy(), RetryPolicy::default());
        assert_eq!(config.min_interval(), Duration::from_secs(3));
    }

    #[test]
    fn test_invalid_backoff_bounds() {
        let config = JudgeConfig {
            backoff_min_ms: 30_000,
            ..JudgeConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let config = JudgeConfig {
            retry_attempts: 0,
            ..JudgeConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_disabled_builds_no_invoker() {
        let config = JudgeConfig::default();
        assert!(config.build_invoker().unwrap().is_none());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = JudgeConfig::from_toml(
            r#"
            enabled = true
            provider = "openai"
            model = "gpt-4"
            "#,
        )
        .unwrap();
        assert!(config.enabled);
        assert_eq!(config.provider, JudgeProvider::OpenAi);
        assert_eq!(config.model, "gpt-4");
        assert_eq!(config.min_interval_ms, 3_000);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = JudgeConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = JudgeConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config.endpoint, parsed.endpoint);
        assert_eq!(config.retry_attempts, parsed.retry_attempts);
        assert_eq!(config.provider, parsed.provider);
    }
}
