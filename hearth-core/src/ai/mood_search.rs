//! Mood-based recipe search.

use serde::{Deserialize, Serialize};

use crate::ai::prompts::{render_mood_search_prompt, MOOD_SEARCH_PROMPT_NAME};
use crate::ai::{parse_json_content, AiClient, AiError, ChatMessage, ChatRequest, Usage};
use crate::types::Recipe;

/// Response format from the AI.
#[derive(Debug, Deserialize)]
struct MoodSearchResponse {
    #[serde(default)]
    matches: Vec<RawMatch>,
}

#[derive(Debug, Deserialize)]
struct RawMatch {
    id: String,
    #[serde(default)]
    score: Option<f32>,
    #[serde(default)]
    reason: Option<String>,
}

/// A recipe picked for a mood.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct MoodMatch {
    pub recipe: Recipe,
    /// Fit between 0.0 and 1.0.
    pub score: f32,
    pub reason: String,
}

pub struct MoodSearchResult {
    pub matches: Vec<MoodMatch>,
    pub usage: Usage,
}

/// Rank `recipes` against a free-text mood.
///
/// Only recipes from `recipes` can be returned: ids the model makes up are
/// dropped, as are repeats. Results are sorted by score, best first.
pub async fn search_by_mood(
    ai_client: &dyn AiClient,
    mood: &str,
    recipes: &[Recipe],
) -> Result<MoodSearchResult, AiError> {
    if recipes.is_empty() {
        return Ok(MoodSearchResult {
            matches: vec![],
            usage: Usage::default(),
        });
    }

    let request = ChatRequest {
        messages: vec![ChatMessage::user(render_mood_search_prompt(mood, recipes))],
        json_response: true,
        max_tokens: Some(1024),
        temperature: Some(0.3),
    };

    let response = ai_client.complete(MOOD_SEARCH_PROMPT_NAME, request).await?;
    let ai_response: MoodSearchResponse = parse_json_content(&response.content, "mood search")?;

    let mut matches: Vec<MoodMatch> = Vec::new();
    for raw in ai_response.matches {
        if matches.iter().any(|m| m.recipe.id == raw.id) {
            continue;
        }
        let Some(recipe) = recipes.iter().find(|r| r.id == raw.id) else {
            tracing::debug!(id = %raw.id, "Dropping mood match for unknown recipe");
            continue;
        };
        let score = raw
            .score
            .filter(|s| s.is_finite())
            .unwrap_or(0.0)
            .clamp(0.0, 1.0);
        matches.push(MoodMatch {
            recipe: recipe.clone(),
            score,
            reason: raw.reason.unwrap_or_default(),
        });
    }

    // Stable, so equal scores keep the model's order.
    matches.sort_by(|a, b| b.score.total_cmp(&a.score));

    Ok(MoodSearchResult {
        matches,
        usage: response.usage,
    })
}
