//! LLM Client: the single point of entry for all chat-completion calls in Explora.
//!
//! ARCHITECTURAL RULE: No other module may call the completion API directly.
//! All LLM interactions MUST go through `CompletionGateway`.
//!
//! The credential is supplied per call and never stored on the client.
//! One request per call: no retries, no streaming, transport-default timeout.

use std::fmt;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;

pub mod prompts;
#[cfg(test)]
pub mod stub;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("LLM response flagged unusable: {0}")]
    Unusable(String),
}

/// Caller-supplied API key. Borrowed for a single call, never persisted.
pub struct Credential(String);

impl Credential {
    /// Returns `None` for blank input so callers cannot build an unusable key.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// The fixed two-message prompt: a system persona and a user message.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatPrompt {
    pub system: String,
    pub user: String,
}

/// Narrow seam between the report generator and the completion service.
/// `AppState` carries an `Arc<dyn CompletionGateway>`; tests swap in a stub.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    async fn complete(&self, prompt: &ChatPrompt, credential: &Credential)
        -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

impl<'a> ChatCompletionRequest<'a> {
    fn new(model: &'a str, max_tokens: u32, prompt: &'a ChatPrompt) -> Self {
        Self {
            model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &prompt.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt.user,
                },
            ],
            max_tokens,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatCompletionResponse {
    /// Extracts `choices[0].message.content`, rejecting blank or filtered output.
    pub fn into_text(self) -> Result<String, LlmError> {
        let choice = self.choices.into_iter().next().ok_or(LlmError::EmptyContent)?;

        if choice.finish_reason.as_deref() == Some("content_filter") {
            return Err(LlmError::Unusable("content_filter".to_string()));
        }

        match choice.message.content {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(LlmError::EmptyContent),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// The HTTP-backed gateway. Speaks the OpenAI-compatible chat completions format.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_url: String,
    model: String,
    max_tokens: u32,
}

impl LlmClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            api_url: config.llm_api_url.clone(),
            model: config.llm_model.clone(),
            max_tokens: config.llm_max_tokens,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Makes exactly one call to the completion endpoint and returns the raw response.
    pub async fn call(
        &self,
        prompt: &ChatPrompt,
        credential: &Credential,
    ) -> Result<ChatCompletionResponse, LlmError> {
        let request_body = ChatCompletionRequest::new(&self.model, self.max_tokens, prompt);

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(credential.expose())
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            warn!("LLM API returned {}", status);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let completion: ChatCompletionResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &completion.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(completion)
    }
}

#[async_trait]
impl CompletionGateway for LlmClient {
    async fn complete(
        &self,
        prompt: &ChatPrompt,
        credential: &Credential,
    ) -> Result<String, LlmError> {
        self.call(prompt, credential).await?.into_text()
    }
}
