//! Nostalgic story generation.

use crate::ai::prompts::{
    render_nostalgia_story_prompt, NOSTALGIA_STORY_PROMPT_NAME, NOSTALGIA_STORY_SYSTEM_PROMPT,
};
use crate::ai::{AiClient, AiError, ChatMessage, ChatRequest, Usage};

pub struct StoryResult {
    pub story: String,
    pub usage: Usage,
}

/// Write a short nostalgic story about a dish, optionally around a given memory.
pub async fn generate_nostalgia_story(
    ai_client: &dyn AiClient,
    dish_name: &str,
    memory: Option<&str>,
) -> Result<StoryResult, AiError> {
    let request = ChatRequest {
        messages: vec![
            ChatMessage::system(NOSTALGIA_STORY_SYSTEM_PROMPT),
            ChatMessage::user(render_nostalgia_story_prompt(dish_name, memory)),
        ],
        json_response: false,
        max_tokens: Some(800),
        temperature: Some(0.8),
    };

    let response = ai_client
        .complete(NOSTALGIA_STORY_PROMPT_NAME, request)
        .await?;

    let story = response.content.trim().to_string();
    if story.is_empty() {
        return Err(AiError::ParseError("Story response was empty".to_string()));
    }

    Ok(StoryResult {
        story,
        usage: response.usage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::FakeAiClient;

    #[tokio::test]
    async fn test_story_is_trimmed() {
        let client =
            FakeAiClient::with_response(NOSTALGIA_STORY_PROMPT_NAME, "\n  Steam rose from the pot.  \n");
        let result = generate_nostalgia_story(&client, "Dumplings", None)
            .await
            .unwrap();
        assert_eq!(result.story, "Steam rose from the pot.");
    }

    #[tokio::test]
    async fn test_empty_story_is_error() {
        let client = FakeAiClient::with_response(NOSTALGIA_STORY_PROMPT_NAME, "   ");
        let result = generate_nostalgia_story(&client, "Dumplings", None).await;
        assert!(matches!(result, Err(AiError::ParseError(_))));
    }
}
