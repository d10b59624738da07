//! Mood search prompt: pick recipes whose emotion tags fit a mood.

use crate::types::Recipe;

/// Prompt name for logging and fakes.
pub const MOOD_SEARCH_PROMPT_NAME: &str = "mood_search";

/// Render the mood-search prompt for the given mood and candidate recipes.
pub fn render_mood_search_prompt(mood: &str, recipes: &[Recipe]) -> String {
    let catalog = recipes
        .iter()
        .map(|r| {
            let mut line = format!("- id: {} | name: {}", r.id, r.display_name());
            if !r.emotion_tags.is_empty() {
                line.push_str(&format!(" | tags: {}", r.emotion_tags.join(", ")));
            }
            if let Some(note) = &r.note {
                line.push_str(&format!(" | note: {}", note));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"You are a recipe recommendation assistant. A user describes how they feel and you pick the recipes from their collection that best fit that mood, mainly by matching the recipes' emotion tags.

IMPORTANT: Only use ids from the list below. Never invent recipes.

User's mood: {mood}

Recipes:
{catalog}

Return up to 5 matches, best first. Score each from 0.0 to 1.0 and give a one-sentence reason.

Respond with JSON only, no other text: {{"matches": [{{"id": "recipe-id", "score": 0.9, "reason": "..."}}]}}"#,
        mood = mood,
        catalog = catalog
    )
}
