//! AI helper endpoints. Each handler validates its input, makes exactly one
//! AI call, and maps the result.

pub mod emotion_tags;
pub mod mood_search;
pub mod nostalgia;
pub mod suggest;

use crate::error::ApiError;
use crate::state::AppState;
use axum::routing::post;
use axum::Router;
use hearth_core::ai::{MoodMatch, RecipeSuggestion};
use utoipa::OpenApi;

/// Returns the router for /api/ai endpoints (mounted at /api/ai)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/mood-search", post(mood_search::mood_search))
        .route("/emotion-tags", post(emotion_tags::emotion_tags))
        .route("/suggest-recipes", post(suggest::suggest_recipes))
        .route("/nostalgia-story", post(nostalgia::nostalgia_story))
}

/// Trim a required text field, rejecting it when absent or blank.
pub(crate) fn required_text(value: Option<String>, field: &str) -> Result<String, ApiError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::Validation(format!("{} is required", field)))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        mood_search::mood_search,
        emotion_tags::emotion_tags,
        suggest::suggest_recipes,
        nostalgia::nostalgia_story,
    ),
    components(schemas(
        MoodMatch,
        RecipeSuggestion,
        mood_search::MoodSearchRequest,
        mood_search::MoodSearchResponse,
        emotion_tags::EmotionTagsRequest,
        emotion_tags::EmotionTagsResponse,
        suggest::SuggestRecipesRequest,
        suggest::SuggestRecipesResponse,
        nostalgia::NostalgiaStoryRequest,
        nostalgia::NostalgiaStoryResponse,
    ))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert_eq!(
            required_text(Some("  rainy  ".to_string()), "mood").unwrap(),
            "rainy"
        );
        let err = required_text(Some(" ".to_string()), "mood").unwrap_err();
        assert_eq!(err.to_string(), "mood is required");
        assert!(required_text(None, "mood").is_err());
    }
}
