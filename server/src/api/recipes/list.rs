use crate::api::ErrorResponse;
use crate::error::ApiError;
use crate::state::AppState;
use axum::{extract::State, Json};
use hearth_core::Recipe;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListRecipesResponse {
    pub recipes: Vec<Recipe>,
}

#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = "recipes",
    responses(
        (status = 200, description = "All recipes in insertion order", body = ListRecipesResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    )
)]
pub async fn list_recipes(
    State(state): State<AppState>,
) -> Result<Json<ListRecipesResponse>, ApiError> {
    let recipes = state.recipes.get_all().await?;
    Ok(Json(ListRecipesResponse { recipes }))
}
