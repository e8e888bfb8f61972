//! Ollama Judge Implementation
//!
//! Provides integration with Ollama's local LLM API, for running the judge
//! on a local model.
//!
//! # Features
//!
//! - Blocking HTTP communication with the Ollama API
//! - Configurable endpoint, model and timeout
//! - Timeouts and connection failures surface as transient errors, so the
//!   invoker's backoff handles retries
//!
//! # Examples
//!
//! ```no_run
//! use benchlink_llm::OllamaJudge;
//! use benchlink_domain::traits::Judge;
//!
//! let judge = OllamaJudge::new("http://localhost:11434", "llama3").unwrap();
//! let answer = judge.judge("https://zenodo.org/record/1", "data available at").unwrap();
//! ```

use crate::prompt::build_judge_prompt;
use crate::JudgeError;
use benchlink_domain::traits::Judge;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Ollama API endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";

/// Default timeout for judge requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Ollama API judge for local LLM inference
pub struct OllamaJudge {
    endpoint: String,
    model: String,
    client: reqwest::blocking::Client,
}

/// Request body for Ollama generate API
#[derive(Serialize)]
struct OllamaGenerateRequest<'a> {
    model: &'a str,
    prompt: String,
    stream: bool,
}

/// Response from Ollama generate API
#[derive(Deserialize)]
struct OllamaGenerateResponse {
    response: String,
}

impl OllamaJudge {
    /// Create a new Ollama judge with the default timeout
    ///
    /// # Parameters
    ///
    /// - `endpoint`: Ollama API endpoint (e.g., "http://localhost:11434")
    /// - `model`: Model to use (e.g., "llama3", "mistral")
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Result<Self, JudgeError> {
        Self::with_timeout(endpoint, model, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a new Ollama judge with an explicit request timeout
    pub fn with_timeout(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, JudgeError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| JudgeError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            model: model.into(),
            client,
        })
    }

    /// Create a new Ollama judge on `http://localhost:11434`
    pub fn default_endpoint(model: impl Into<String>) -> Result<Self, JudgeError> {
        Self::new(DEFAULT_ENDPOINT, model)
    }

    /// Configured endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn generate(&self, prompt: String) -> Result<String, JudgeError> {
        let url = format!("{}/api/generate", self.endpoint);

        let request_body = OllamaGenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        let response = self.client.post(&url).json(&request_body).send()?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(JudgeError::ModelNotAvailable(self.model.clone()));
        }
        if !status.is_success() {
            let error_text = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(JudgeError::Communication(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body: OllamaGenerateResponse = response
            .json()
            .map_err(|e| JudgeError::InvalidResponse(format!("Failed to parse response: {}", e)))?;
        Ok(body.response)
    }
}

impl Judge for OllamaJudge {
    type Error = JudgeError;

    fn judge(&self, url: &str, context: &str) -> Result<String, Self::Error> {
        self.generate(build_judge_prompt(url, context))
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
