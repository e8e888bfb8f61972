//! Benchlink Judge Layer
//!
//! Pluggable implementations of the `Judge` trait from `benchlink-domain`,
//! plus the rate-limited, retrying invoker the classifier calls through.
//!
//! # Providers
//!
//! - `MockJudge`: Deterministic mock for testing
//! - `OllamaJudge`: Local Ollama API integration
//! - `OpenAiJudge`: Any OpenAI-compatible chat completions endpoint
//!
//! # Examples
//!
//! ```
//! use benchlink_llm::{is_affirmative, MockJudge};
//! use benchlink_domain::traits::Judge;
//!
//! let judge = MockJudge::new("YES, this is a dataset download page.");
//! let answer = judge.judge("https://zenodo.org/record/1", "data available at").unwrap();
//! assert!(is_affirmative(&answer));
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod invoker;
pub mod ollama;
pub mod openai;
pub mod prompt;
pub mod rate_limit;

use benchlink_domain::traits::Judge;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use config::{JudgeConfig, JudgeProvider};
pub use invoker::{BoxedJudge, JudgeInvoker};
pub use ollama::OllamaJudge;
pub use openai::OpenAiJudge;
pub use rate_limit::{RateLimiter, RetryPolicy};

/// Token whose presence in a judge response means "yes, dataset"
pub const AFFIRMATIVE_TOKEN: &str = "YES";

/// Errors that can occur during judge operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum JudgeError {
    /// Request did not complete in time
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Could not reach the provider
    #[error("Connection error: {0}")]
    Connection(String),

    /// Provider answered with an error status
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from provider
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// API key missing from the environment
    #[error("Missing API key: environment variable {0} is not set")]
    MissingApiKey(String),

    /// Generic error
    #[error("Judge error: {0}")]
    Other(String),
}

impl JudgeError {
    /// Whether the failure is a transient network/timeout condition worth retrying
    pub fn is_transient(&self) -> bool {
        matches!(self, JudgeError::Timeout(_) | JudgeError::Connection(_))
    }
}

impl From<reqwest::Error> for JudgeError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            JudgeError::Timeout(e.to_string())
        } else if e.is_connect() {
            JudgeError::Connection(e.to_string())
        } else if e.is_decode() {
            JudgeError::InvalidResponse(e.to_string())
        } else {
            JudgeError::Communication(e.to_string())
        }
    }
}

/// Whether a judge response carries the affirmative token
///
/// The token must appear as a whole word, in any case: "Yes." and
/// "ANSWER: YES" count, "yesterday" does not.
pub fn is_affirmative(response: &str) -> bool {
    response
        .split(|c: char| !c.is_alphanumeric())
        .any(|word| word.eq_ignore_ascii_case(AFFIRMATIVE_TOKEN))
}

/// Mock judge for deterministic testing
///
/// Returns pre-configured responses keyed by URL without making any network
/// calls. Clones share their scripted responses and call counter.
///
/// # Examples
///
/// ```
/// use benchlink_llm::MockJudge;
/// use benchlink_domain::traits::Judge;
///
/// let mut judge = MockJudge::new("NO");
/// judge.add_response("https://a.org/data", "YES");
/// assert_eq!(judge.judge("https://a.org/data", "").unwrap(), "YES");
/// assert_eq!(judge.judge("https://b.org", "").unwrap(), "NO");
/// assert_eq!(judge.call_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct MockJudge {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, String>>>,
    transient_failures: Arc<Mutex<HashMap<String, usize>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockJudge {
    /// Create a new MockJudge with a fixed response for all URLs
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            transient_failures: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Add a specific response for a given URL
    pub fn add_response(&mut self, url: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(url.into(), response.into());
    }

    /// Configure a permanent (non-retryable) error for a specific URL
    pub fn add_error(&mut self, url: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(url.into(), "ERROR".to_string());
    }

    /// Fail the next `times` calls for `url` with a timeout before answering
    pub fn fail_transiently(&mut self, url: impl Into<String>, times: usize) {
        self.transient_failures
            .lock()
            .unwrap()
            .insert(url.into(), times);
    }

    /// Get the number of times judge was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }
}

impl Default for MockJudge {
    fn default() -> Self {
        Self::new("NO")
    }
}

impl Judge for MockJudge {
    type Error = JudgeError;

    fn judge(&self, url: &str, _context: &str) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        if let Some(remaining) = self.transient_failures.lock().unwrap().get_mut(url) {
            if *remaining > 0 {
                *remaining -= 1;
                return Err(JudgeError::Timeout("Mock timeout".to_string()));
            }
        }

        let responses = self.responses.lock().unwrap();
        if let Some(response) = responses.get(url) {
            if response == "ERROR" {
                return Err(JudgeError::Other("Mock error".to_string()));
            }
            return Ok(response.clone());
        }

        Ok(self.default_response.clone())
    }

    fn model_name(&self) -> &str {
        "mock"
    }
}
