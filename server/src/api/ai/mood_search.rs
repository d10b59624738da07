use crate::api::ErrorResponse;
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use hearth_core::ai::{search_by_mood, MoodMatch};
use hearth_core::Recipe;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::required_text;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct MoodSearchRequest {
    #[serde(default)]
    pub mood: Option<String>,
    /// Candidate recipes to rank.
    #[serde(default)]
    pub recipes: Option<Vec<Recipe>>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MoodSearchResponse {
    pub results: Vec<MoodMatch>,
    pub mood: String,
}

#[utoipa::path(
    post,
    path = "/api/ai/mood-search",
    tag = "ai",
    request_body = MoodSearchRequest,
    responses(
        (status = 200, description = "Recipes ranked by fit to the mood", body = MoodSearchResponse),
        (status = 400, description = "Missing mood or recipes", body = ErrorResponse),
        (status = 500, description = "AI request failed", body = ErrorResponse)
    )
)]
pub async fn mood_search(
    State(state): State<AppState>,
    payload: Result<Json<MoodSearchRequest>, JsonRejection>,
) -> Result<Json<MoodSearchResponse>, ApiError> {
    let Json(request) = payload?;
    let mood = required_text(request.mood, "mood")?;
    let recipes = request
        .recipes
        .ok_or_else(|| ApiError::Validation("recipes is required".to_string()))?;

    let result = search_by_mood(state.ai.as_ref(), &mood, &recipes).await?;

    tracing::info!(
        mood = %mood,
        candidates = recipes.len(),
        matches = result.matches.len(),
        "Mood search complete"
    );

    Ok(Json(MoodSearchResponse {
        results: result.matches,
        mood,
    }))
}
