use crate::api::ErrorResponse;
use crate::error::ApiError;
use crate::state::AppState;
use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ResetResponse {
    pub success: bool,
    /// Number of recipes in the collection afterwards.
    pub count: usize,
}

/// Overwrite the recipe collection with the built-in sample recipes.
#[utoipa::path(
    post,
    path = "/api/admin/reset-mock-data",
    tag = "admin",
    responses(
        (status = 200, description = "Collection reset", body = ResetResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    )
)]
pub async fn reset_mock_data(
    State(state): State<AppState>,
) -> Result<Json<ResetResponse>, ApiError> {
    let count = state.recipes.reset_to_mock_data().await?;
    Ok(Json(ResetResponse {
        success: true,
        count,
    }))
}
