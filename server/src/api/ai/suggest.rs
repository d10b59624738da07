use crate::api::ErrorResponse;
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use hearth_core::ai::{suggest_recipes as suggest, RecipeSuggestion};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SuggestRecipesRequest {
    #[serde(default)]
    pub ingredients: Vec<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SuggestRecipesResponse {
    pub suggestions: Vec<RecipeSuggestion>,
    /// The ingredients the suggestions were made for, trimmed.
    pub ingredients: Vec<String>,
}

#[utoipa::path(
    post,
    path = "/api/ai/suggest-recipes",
    tag = "ai",
    request_body = SuggestRecipesRequest,
    responses(
        (status = 200, description = "Dishes that use the ingredients", body = SuggestRecipesResponse),
        (status = 400, description = "No ingredients given", body = ErrorResponse),
        (status = 500, description = "AI request failed", body = ErrorResponse)
    )
)]
pub async fn suggest_recipes(
    State(state): State<AppState>,
    payload: Result<Json<SuggestRecipesRequest>, JsonRejection>,
) -> Result<Json<SuggestRecipesResponse>, ApiError> {
    let Json(request) = payload?;
    let ingredients: Vec<String> = request
        .ingredients
        .into_iter()
        .map(|i| i.trim().to_string())
        .filter(|i| !i.is_empty())
        .collect();

    if ingredients.is_empty() {
        return Err(ApiError::Validation(
            "ingredients must be a non-empty list".to_string(),
        ));
    }

    let result = suggest(state.ai.as_ref(), &ingredients).await?;

    Ok(Json(SuggestRecipesResponse {
        suggestions: result.suggestions,
        ingredients,
    }))
}
