/// LLM Client — the single point of entry for all completion calls.
///
/// ARCHITECTURAL RULE: No other module may call the Groq API directly.
/// All completion interactions MUST go through this module.
///
/// Model: llama-3.3-70b-versatile (hardcoded — do not make configurable to prevent drift)
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::errors::AppError;

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
/// The model used for all completion calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "llama-3.3-70b-versatile";
const MAX_TOKENS: u32 = 1024;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
pub struct AssistantMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatCompletionResponse {
    /// Extracts the generated text from the first choice, if any.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct GroqError {
    error: GroqErrorBody,
}

#[derive(Debug, Deserialize)]
struct GroqErrorBody {
    message: String,
}

/// The completion capability consumed by the answer relay.
/// Carried in `AppState` as `Arc<dyn Completer>` so tests substitute fakes.
#[async_trait]
pub trait Completer: Send + Sync {
    /// Sends one assembled prompt and returns the raw generated text.
    /// May return an empty string; the caller decides what emptiness means.
    async fn complete(&self, prompt: &str) -> Result<String, AppError>;
}

/// Groq-backed completion client (OpenAI-compatible chat completions API).
#[derive(Clone)]
pub struct GroqClient {
    client: Client,
    api_key: String,
}

impl GroqClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Makes a single call to the chat completions API, returning the full
    /// response object. One attempt only — failures surface to the caller
    /// rather than being retried.
    pub async fn call(&self, prompt: &str) -> Result<ChatCompletionResponse, LlmError> {
        let request_body = ChatCompletionRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(GROQ_API_URL)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse the provider's error message
            let message = serde_json::from_str::<GroqError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;

        if let Some(usage) = &completion.usage {
            debug!(
                "Completion call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(completion)
    }
}

#[async_trait]
impl Completer for GroqClient {
    async fn complete(&self, prompt: &str) -> Result<String, AppError> {
        let completion = self
            .call(prompt)
            .await
            .map_err(|e| AppError::Upstream(e.to_string()))?;
        Ok(completion.text().unwrap_or_default().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_extracts_first_choice_content() {
        let raw = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "first answer"}},
                {"message": {"role": "assistant", "content": "second answer"}}
            ],
            "usage": {"prompt_tokens": 42, "completion_tokens": 7, "total_tokens": 49}
        }"#;
        let response: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.text(), Some("first answer"));
        assert_eq!(response.usage.unwrap().prompt_tokens, 42);
    }

    #[test]
    fn test_text_is_none_without_choices() {
        let response: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices": [], "usage": null}"#).unwrap();
        assert_eq!(response.text(), None);
    }

    #[test]
    fn test_text_is_none_when_content_missing() {
        let response: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices": [{"message": {"role": "assistant"}}]}"#).unwrap();
        assert_eq!(response.text(), None);
    }

    #[test]
    fn test_provider_error_body_parses() {
        let raw = r#"{"error": {"message": "model decommissioned", "type": "invalid_request_error"}}"#;
        let parsed: GroqError = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.error.message, "model decommissioned");
    }
}
