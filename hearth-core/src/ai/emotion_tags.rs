//! Emotion tag generation for a dish.

use serde::Deserialize;

use crate::ai::prompts::{render_emotion_tags_prompt, EMOTION_TAGS_PROMPT_NAME};
use crate::ai::{parse_json_content, AiClient, AiError, ChatMessage, ChatRequest, Usage};
use crate::types::normalize_tags;

/// Maximum number of tags returned.
pub const MAX_EMOTION_TAGS: usize = 5;

/// Response format from the AI.
#[derive(Debug, Deserialize)]
struct EmotionTagsResponse {
    #[serde(default)]
    tags: Vec<String>,
}

pub struct EmotionTagsResult {
    pub tags: Vec<String>,
    pub usage: Usage,
}

/// Suggest mood labels for a dish, optionally informed by the cook's note.
pub async fn generate_emotion_tags(
    ai_client: &dyn AiClient,
    dish_name: &str,
    note: Option<&str>,
) -> Result<EmotionTagsResult, AiError> {
    let request = ChatRequest {
        messages: vec![ChatMessage::user(render_emotion_tags_prompt(dish_name, note))],
        json_response: true,
        max_tokens: Some(256),
        temperature: Some(0.5),
    };

    let response = ai_client.complete(EMOTION_TAGS_PROMPT_NAME, request).await?;
    let ai_response: EmotionTagsResponse =
        parse_json_content(&response.content, "emotion tags")?;

    let mut tags = normalize_tags(
        ai_response
            .tags
            .into_iter()
            .map(|t| t.trim().trim_start_matches('#').to_string())
            .collect(),
    );
    tags.truncate(MAX_EMOTION_TAGS);

    Ok(EmotionTagsResult {
        tags,
        usage: response.usage,
    })
}
