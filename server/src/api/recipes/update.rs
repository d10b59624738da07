use crate::api::ErrorResponse;
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use hearth_core::RecipePatch;

use super::get::RecipeResponse;

#[utoipa::path(
    put,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe ID")
    ),
    request_body = RecipePatch,
    responses(
        (status = 200, description = "Recipe updated", body = RecipeResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<RecipePatch>, JsonRejection>,
) -> Result<Json<RecipeResponse>, ApiError> {
    let Json(patch) = payload?;
    let recipe = state.recipes.update(&id, patch).await?;
    Ok(Json(RecipeResponse { recipe }))
}

#[cfg(test)]
mod tests {
    use crate::state::test_support::{json_request, send, Fakes};
    use axum::http::StatusCode;
    use hearth_core::MemoryStorage;
    use serde_json::json;
    use std::sync::Arc;

    fn seeded() -> Fakes {
        Fakes::default().with_storage(Arc::new(MemoryStorage::with_recipes(
            hearth_core::mock_recipes(),
        )))
    }

    #[tokio::test]
    async fn test_update_keeps_identity() {
        let (status, body) = send(
            seeded().app(),
            json_request(
                "PUT",
                "/api/recipes/mock-pancakes",
                json!({"note": "Extra crispy edges", "id": "hijack"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let recipe = &body["recipe"];
        assert_eq!(recipe["id"], "mock-pancakes");
        assert_eq!(recipe["note"], "Extra crispy edges");
        assert_ne!(recipe["updatedAt"], recipe["createdAt"]);
    }

    #[tokio::test]
    async fn test_update_unknown_is_404() {
        let (status, _) = send(
            seeded().app(),
            json_request("PUT", "/api/recipes/missing", json!({"note": "x"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_clearing_both_names_is_400() {
        let (status, _) = send(
            seeded().app(),
            json_request(
                "PUT",
                "/api/recipes/mock-pancakes",
                json!({"dishName": "", "recipeName": ""}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
