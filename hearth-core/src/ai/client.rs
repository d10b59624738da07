//! AI client trait and the OpenAI-compatible implementation.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

use super::config::AiConfig;
use super::fake::FakeAiClient;
use super::types::{ChatMessage, ChatRequest, ChatResponse, Usage};
use crate::config::{env_or, ConfigError};

#[derive(Error, Debug)]
pub enum AiError {
    #[error("AI request failed: {0}")]
    RequestFailed(String),

    #[error("AI API returned error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse AI response: {0}")]
    ParseError(String),

    #[error("AI configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Trait for chat-completion providers.
#[async_trait]
pub trait AiClient: Send + Sync {
    /// Complete a chat request.
    ///
    /// `prompt_name` identifies the capability making the call, for logging and fakes.
    async fn complete(&self, prompt_name: &str, request: ChatRequest)
        -> Result<ChatResponse, AiError>;
}

/// Client for any OpenAI-compatible `/chat/completions` endpoint (OpenRouter, OpenAI, ...).
#[derive(Debug)]
pub struct OpenAiCompatibleClient {
    config: AiConfig,
    client: reqwest::Client,
}

impl OpenAiCompatibleClient {
    pub fn new(config: AiConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_env() -> Result<Self, AiError> {
        Ok(Self::new(AiConfig::from_env()?))
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

/// Error response from the API.
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[async_trait]
impl AiClient for OpenAiCompatibleClient {
    async fn complete(
        &self,
        prompt_name: &str,
        request: ChatRequest,
    ) -> Result<ChatResponse, AiError> {
        let body = CompletionRequest {
            model: &self.config.model,
            messages: &request.messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            response_format: request.json_response.then_some(ResponseFormat {
                format_type: "json_object",
            }),
        };

        tracing::debug!(
            prompt_name = prompt_name,
            model = &self.config.model,
            "Calling AI API"
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AiError::RequestFailed(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| AiError::RequestFailed(e.to_string()))?;

        if !(200..300).contains(&status) {
            let message = serde_json::from_str::<ApiErrorResponse>(&text)
                .map(|e| e.error.message)
                .unwrap_or(text);
            return Err(AiError::Api { status, message });
        }

        let parsed: CompletionResponse =
            serde_json::from_str(&text).map_err(|e| AiError::ParseError(e.to_string()))?;

        let content = parsed
            .choices
            .into_iter()
            .find_map(|c| c.message.content)
            .ok_or_else(|| AiError::ParseError("No content in response".to_string()))?;

        Ok(ChatResponse {
            content,
            usage: parsed.usage.unwrap_or_default(),
        })
    }
}

/// Build the AI client selected by the environment.
///
/// - `HEARTH_AI_PROVIDER`: "openai" | "fake" (default: "fake")
///
/// The fake provider answers every capability with canned demo data.
pub fn create_ai_client_from_env() -> Result<Arc<dyn AiClient>, AiError> {
    let provider = env_or("HEARTH_AI_PROVIDER", "fake");

    match provider.as_str() {
        "fake" => Ok(Arc::new(FakeAiClient::with_demo_responses())),
        "openai" | "openrouter" => Ok(Arc::new(OpenAiCompatibleClient::from_env()?)),
        other => Err(ConfigError::UnknownProvider {
            kind: "AI",
            name: other.to_string(),
        }
        .into()),
    }
}

/// Parse JSON out of model output, tolerating Markdown code fences around it.
pub fn parse_json_content<T: DeserializeOwned>(content: &str, what: &str) -> Result<T, AiError> {
    let trimmed = content.trim();
    let unfenced = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.trim_end().strip_suffix("```"))
        .unwrap_or(trimmed)
        .trim();

    serde_json::from_str(unfenced)
        .map_err(|e| AiError::ParseError(format!("Failed to parse {} response: {}", what, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Tags {
        tags: Vec<String>,
    }

    #[test]
    fn test_parse_plain_json() {
        let parsed: Tags = parse_json_content(r#"{"tags": ["cozy"]}"#, "test").unwrap();
        assert_eq!(parsed.tags, vec!["cozy".to_string()]);
    }

    #[test]
    fn test_parse_fenced_json() {
        let content = "```json\n{\"tags\": [\"warm\"]}\n```\n";
        let parsed: Tags = parse_json_content(content, "test").unwrap();
        assert_eq!(parsed.tags, vec!["warm".to_string()]);
    }

    #[test]
    fn test_parse_garbage_is_parse_error() {
        let result: Result<Tags, _> = parse_json_content("Sure! Here are tags:", "test");
        assert!(matches!(result, Err(AiError::ParseError(_))));
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let client = OpenAiCompatibleClient::new(AiConfig {
            api_key: "key".to_string(),
            model: "m".to_string(),
            base_url: "https://example.com/v1/".to_string(),
        });
        assert_eq!(client.endpoint(), "https://example.com/v1/chat/completions");
    }
}
