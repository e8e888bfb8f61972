//! OpenAI-compatible chat completions judge

use crate::prompt::{build_judge_prompt, SYSTEM_MESSAGE};
use crate::JudgeError;
use benchlink_domain::traits::Judge;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default API base
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1";

/// Default environment variable holding the API key
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";

const TEMPERATURE: f32 = 0.1;

/// Judge backed by any endpoint speaking the chat completions protocol
pub struct OpenAiJudge {
    endpoint: String,
    model: String,
    api_key: String,
    client: reqwest::blocking::Client,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl OpenAiJudge {
    /// Create a judge with an explicit API key
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, JudgeError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| JudgeError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: api_key.into(),
            client,
        })
    }

    /// Create a judge reading its key from the environment variable `key_var`
    ///
    /// # Errors
    ///
    /// Returns `MissingApiKey` if the variable is unset or empty.
    pub fn from_env(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        key_var: &str,
        timeout: Duration,
    ) -> Result<Self, JudgeError> {
        let api_key = std::env::var(key_var)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| JudgeError::MissingApiKey(key_var.to_string()))?;
        Self::new(endpoint, model, api_key, timeout)
    }

    /// Configured endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn complete(&self, prompt: String) -> Result<String, JudgeError> {
        let url = format!("{}/chat/completions", self.endpoint);

        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_MESSAGE.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt,
                },
            ],
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()?;

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

        let body: ChatResponse = response
            .json()
            .map_err(|e| JudgeError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        body.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| JudgeError::InvalidResponse("Response has no choices".to_string()))
    }
}

impl Judge for OpenAiJudge {
    type Error = JudgeError;

    fn judge(&self, url: &str, context: &str) -> Result<String, Self::Error> {
        self.complete(build_judge_prompt(url, context))
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
