//! Recipe suggestions from the ingredients a user has on hand.

use serde::{Deserialize, Serialize};

use crate::ai::prompts::{
    render_ingredient_suggestion_prompt, INGREDIENT_SUGGESTION_PROMPT_NAME,
};
use crate::ai::{parse_json_content, AiClient, AiError, ChatMessage, ChatRequest, Usage};
use crate::types::{CookingTime, Difficulty};

/// Maximum number of suggestions returned.
pub const MAX_SUGGESTIONS: usize = 5;

/// Response format from the AI.
#[derive(Debug, Deserialize)]
struct SuggestionResponse {
    #[serde(default)]
    suggestions: Vec<RawSuggestion>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSuggestion {
    #[serde(default)]
    dish_name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    matched_ingredients: Vec<String>,
    #[serde(default)]
    missing_ingredients: Vec<String>,
    #[serde(default)]
    difficulty: Option<String>,
    #[serde(default)]
    cooking_time: Option<String>,
}

/// A dish the user could cook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RecipeSuggestion {
    pub dish_name: String,
    pub description: String,
    pub matched_ingredients: Vec<String>,
    pub missing_ingredients: Vec<String>,
    pub difficulty: Option<Difficulty>,
    pub cooking_time: Option<CookingTime>,
}

pub struct SuggestionResult {
    pub suggestions: Vec<RecipeSuggestion>,
    pub usage: Usage,
}

/// Suggest dishes that use `ingredients`.
///
/// Unnamed suggestions are dropped. Difficulty and cooking time the model
/// labels outside the known scales are left empty.
pub async fn suggest_recipes(
    ai_client: &dyn AiClient,
    ingredients: &[String],
) -> Result<SuggestionResult, AiError> {
    let request = ChatRequest {
        messages: vec![ChatMessage::user(render_ingredient_suggestion_prompt(
            ingredients,
        ))],
        json_response: true,
        max_tokens: Some(1024),
        temperature: Some(0.7),
    };

    let response = ai_client
        .complete(INGREDIENT_SUGGESTION_PROMPT_NAME, request)
        .await?;
    let ai_response: SuggestionResponse =
        parse_json_content(&response.content, "ingredient suggestion")?;

    let suggestions = ai_response
        .suggestions
        .into_iter()
        .filter(|s| !s.dish_name.trim().is_empty())
        .take(MAX_SUGGESTIONS)
        .map(|s| RecipeSuggestion {
            dish_name: s.dish_name.trim().to_string(),
            description: s.description.trim().to_string(),
            matched_ingredients: s.matched_ingredients,
            missing_ingredients: s.missing_ingredients,
            difficulty: s.difficulty.as_deref().and_then(parse_scale),
            cooking_time: s.cooking_time.as_deref().and_then(parse_scale),
        })
        .collect();

    Ok(SuggestionResult {
        suggestions,
        usage: response.usage,
    })
}

/// Parse a snake_case scale label ("very_easy", "slow", ...) leniently.
fn parse_scale<T: serde::de::DeserializeOwned>(label: &str) -> Option<T> {
    let normalized = label.trim().to_lowercase().replace([' ', '-'], "_");
    serde_json::from_value(serde_json::Value::String(normalized)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::FakeAiClient;

    #[tokio::test]
    async fn test_suggestions_are_parsed() {
        let client = FakeAiClient::with_response(
            INGREDIENT_SUGGESTION_PROMPT_NAME,
            r#"{"suggestions": [
                {"dishName": " Kimchi fried rice ", "description": "Classic.",
                 "matchedIngredients": ["kimchi", "rice"], "missingIngredients": [],
                 "difficulty": "Very Easy", "cookingTime": "fast"},
                {"dishName": "", "description": "nameless"},
                {"dishName": "Omelette", "difficulty": "trivial", "cookingTime": "very-fast"}
            ]}"#,
        );

        let result = suggest_recipes(&client, &["kimchi".to_string(), "rice".to_string()])
            .await
            .unwrap();

        assert_eq!(result.suggestions.len(), 2);
        let first = &result.suggestions[0];
        assert_eq!(first.dish_name, "Kimchi fried rice");
        assert_eq!(first.difficulty, Some(Difficulty::VeryEasy));
        assert_eq!(first.cooking_time, Some(CookingTime::Fast));

        let second = &result.suggestions[1];
        assert_eq!(second.difficulty, None);
        assert_eq!(second.cooking_time, Some(CookingTime::VeryFast));
    }
}
