//! Fake AI client for testing and offline development.
//!
//! This client returns deterministic responses based on prompt matching,
//! allowing tests to run without network access or API costs.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::client::{AiClient, AiError};
use super::prompts::{
    EMOTION_TAGS_PROMPT_NAME, INGREDIENT_SUGGESTION_PROMPT_NAME, MOOD_SEARCH_PROMPT_NAME,
    NOSTALGIA_STORY_PROMPT_NAME,
};
use super::types::{ChatRequest, ChatResponse, Usage};

/// A fake AI client.
///
/// A registered pattern matches when it equals the prompt name or appears in any
/// message (case-insensitive). Patterns are tried in registration order.
#[derive(Debug, Default)]
pub struct FakeAiClient {
    responses: Vec<(String, String)>,
    default_response: Option<String>,
    failure: Option<String>,
    calls: AtomicUsize,
}

impl FakeAiClient {
    /// Create a FakeAiClient with no registered responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a FakeAiClient answering prompts matching `pattern` with `response`.
    pub fn with_response(pattern: &str, response: &str) -> Self {
        Self::new().and_response(pattern, response)
    }

    /// Add a response for prompts matching `pattern`.
    pub fn and_response(mut self, pattern: &str, response: &str) -> Self {
        self.responses
            .push((pattern.to_lowercase(), response.to_string()));
        self
    }

    /// Set the response used when no pattern matches.
    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }

    /// Create a client whose every call fails with `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    /// Canned answers for every capability, used when no real provider is configured.
    pub fn with_demo_responses() -> Self {
        Self::new()
            .and_response(
                MOOD_SEARCH_PROMPT_NAME,
                r#"{"matches": [
                    {"id": "mock-kimchi-stew", "score": 0.9, "reason": "A warm stew for a heavy heart."},
                    {"id": "mock-chicken-soup", "score": 0.8, "reason": "Gentle and restoring."},
                    {"id": "mock-pancakes", "score": 0.6, "reason": "Crispy comfort to share."}
                ]}"#,
            )
            .and_response(
                EMOTION_TAGS_PROMPT_NAME,
                r#"{"tags": ["nostalgic", "comforting", "warm", "family"]}"#,
            )
            .and_response(
                INGREDIENT_SUGGESTION_PROMPT_NAME,
                r#"{"suggestions": [
                    {"dishName": "Egg fried rice", "description": "Quick fried rice with whatever is in the fridge.",
                     "matchedIngredients": ["rice", "egg"], "missingIngredients": ["green onion"],
                     "difficulty": "easy", "cookingTime": "fast"}
                ]}"#,
            )
            .and_response(
                NOSTALGIA_STORY_PROMPT_NAME,
                "The kitchen was small, but on those evenings it felt like the warmest place in the world.",
            )
    }

    /// Number of completed or failed calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AiClient for FakeAiClient {
    async fn complete(
        &self,
        prompt_name: &str,
        request: ChatRequest,
    ) -> Result<ChatResponse, AiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = &self.failure {
            return Err(AiError::RequestFailed(message.clone()));
        }

        let name = prompt_name.to_lowercase();
        let contents: Vec<String> = request
            .messages
            .iter()
            .map(|m| m.content.to_lowercase())
            .collect();

        let matched = self.responses.iter().find(|(pattern, _)| {
            name == *pattern || contents.iter().any(|c| c.contains(pattern.as_str()))
        });

        let content = match (matched, &self.default_response) {
            (Some((_, response)), _) => response.clone(),
            (None, Some(response)) => response.clone(),
            (None, None) => {
                return Err(AiError::RequestFailed(format!(
                    "FakeAiClient: no response configured for prompt {}",
                    prompt_name
                )))
            }
        };

        Ok(ChatResponse {
            content,
            usage: Usage::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::ChatMessage;

    fn request(text: &str) -> ChatRequest {
        ChatRequest {
            messages: vec![ChatMessage::user(text)],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_matches_prompt_name() {
        let client = FakeAiClient::with_response("emotion_tags", "{}");
        let result = client.complete("emotion_tags", request("anything")).await.unwrap();
        assert_eq!(result.content, "{}");
        assert_eq!(client.calls(), 1);
    }

    #[tokio::test]
    async fn test_matches_content_case_insensitive() {
        let client = FakeAiClient::with_response("HELLO", "world");
        let result = client.complete("other", request("hello there")).await.unwrap();
        assert_eq!(result.content, "world");
    }

    #[tokio::test]
    async fn test_no_match_without_default_is_error() {
        let client = FakeAiClient::new();
        assert!(client.complete("x", request("random")).await.is_err());

        let client = FakeAiClient::new().with_default_response("default");
        let result = client.complete("x", request("random")).await.unwrap();
        assert_eq!(result.content, "default");
    }

    #[tokio::test]
    async fn test_failing_client_counts_calls() {
        let client = FakeAiClient::failing("provider down");
        let err = client.complete("x", request("y")).await.unwrap_err();
        assert!(err.to_string().contains("provider down"));
        assert_eq!(client.calls(), 1);
    }
}
