/// LLM Client — the single point of entry for all model calls in Herald.
///
/// ARCHITECTURAL RULE: No other module may call the Anthropic API directly.
/// All text generation MUST go through the `TextGenerator` trait.
///
/// Model: claude-sonnet-4-5 (hardcoded — do not make configurable to prevent drift)
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The model used for all generation calls in Herald.
pub const MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 1024;

/// Output served by the test-mode generator.
pub const CANNED_OUTPUT: &str = "Subject: Internship Application Inquiry\n\n\
    I know you're busy, so I'll keep this short. This draft was produced in \
    test mode; no model call was made. I've attached my resume just in case \
    there's a fit.\n\nBest,\nTest Candidate";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("model returned empty content")]
    EmptyContent,
}

/// The text-generation capability the email pipeline depends on.
///
/// One prompt string in, free text out. Implementations are fallible
/// (transport, timeout, upstream errors) but make no promise about the
/// SHAPE of the returned text — callers parse defensively.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;

    /// Model name reported by `/health`.
    fn model(&self) -> &str;
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct LlmResponse {
    content: Vec<ContentBlock>,
    usage: Usage,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    input_tokens: u32,
    output_tokens: u32,
}

impl LlmResponse {
    /// Extracts the text content from the first text block.
    fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// Claude-backed generator used outside test mode.
///
/// Makes exactly one attempt per call: a failed or timed-out request
/// surfaces immediately with the backend's message, never a retry. The
/// client-level timeout bounds every call.
#[derive(Clone)]
pub struct AnthropicClient {
    client: Client,
    api_key: String,
}

impl AnthropicClient {
    pub fn new(api_key: String, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }
}

#[async_trait]
impl TextGenerator for AnthropicClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = AnthropicRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            messages: vec![AnthropicMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<AnthropicError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let llm_response: LlmResponse = response.json().await?;

        debug!(
            input_tokens = llm_response.usage.input_tokens,
            output_tokens = llm_response.usage.output_tokens,
            "generation call succeeded"
        );

        llm_response
            .text()
            .map(str::to_string)
            .ok_or(LlmError::EmptyContent)
    }

    fn model(&self) -> &str {
        MODEL
    }
}

/// Deterministic generator for test mode and unit tests.
///
/// Returns the same canned output for every prompt and counts invocations,
/// so tests can assert the backend was (or was not) reached.
pub struct CannedGenerator {
    output: String,
    calls: AtomicUsize,
}

impl CannedGenerator {
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for CannedGenerator {
    async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.output.clone())
    }

    fn model(&self) -> &str {
        "canned"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_text_takes_first_text_block() {
        let json = r#"{
            "content": [
                {"type": "thinking", "text": null},
                {"type": "text", "text": "Subject: Hi\n\nBody"},
                {"type": "text", "text": "second block"}
            ],
            "usage": {"input_tokens": 10, "output_tokens": 20}
        }"#;
        let response: LlmResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text(), Some("Subject: Hi\n\nBody"));
    }

    #[test]
    fn test_response_without_text_block_is_none() {
        let json = r#"{
            "content": [],
            "usage": {"input_tokens": 1, "output_tokens": 0}
        }"#;
        let response: LlmResponse = serde_json::from_str(json).unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn test_api_error_body_parses_message() {
        let json = r#"{"type": "error", "error": {"type": "overloaded_error", "message": "Overloaded"}}"#;
        let parsed: AnthropicError = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.error.message, "Overloaded");
    }

    #[tokio::test]
    async fn test_canned_generator_counts_calls() {
        let generator = CannedGenerator::new("Subject: X\n\nY");
        assert_eq!(generator.calls(), 0);
        let output = generator.complete("any prompt").await.unwrap();
        assert_eq!(output, "Subject: X\n\nY");
        assert_eq!(generator.calls(), 1);
    }
}
