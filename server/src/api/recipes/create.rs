use crate::api::ErrorResponse;
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use hearth_core::{NewRecipe, Recipe};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreateRecipeResponse {
    pub recipe: Recipe,
}

#[utoipa::path(
    post,
    path = "/api/recipes",
    tag = "recipes",
    request_body = NewRecipe,
    responses(
        (status = 201, description = "Recipe created", body = CreateRecipeResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    )
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    payload: Result<Json<NewRecipe>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateRecipeResponse>), ApiError> {
    let Json(input) = payload?;
    let recipe = state.recipes.create(input).await?;
    Ok((StatusCode::CREATED, Json(CreateRecipeResponse { recipe })))
}

#[cfg(test)]
mod tests {
    use crate::state::test_support::{empty_request, json_request, send, Fakes};
    use async_trait::async_trait;
    use axum::http::StatusCode;
    use hearth_core::{Recipe, RecipeStorage, StorageError};
    use serde_json::json;
    use std::sync::Arc;

    struct BrokenStorage;

    #[async_trait]
    impl RecipeStorage for BrokenStorage {
        async fn load(&self) -> Result<Vec<Recipe>, StorageError> {
            Ok(vec![])
        }

        async fn save(&self, _recipes: &[Recipe]) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("disk full".to_string()))
        }

        async fn is_initialized(&self) -> Result<bool, StorageError> {
            Ok(true)
        }
    }

    #[tokio::test]
    async fn test_create_assigns_identity() {
        let fakes = Fakes::default();
        let (status, body) = send(
            fakes.app(),
            json_request(
                "POST",
                "/api/recipes",
                json!({"dishName": "Kimchi fried rice", "emotionTags": ["cozy"], "id": "ignored"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        let recipe = &body["recipe"];
        assert_ne!(recipe["id"], "ignored");
        assert!(!recipe["id"].as_str().unwrap().is_empty());
        assert_eq!(recipe["recipeName"], "Kimchi fried rice");
        assert!(recipe["createdAt"].is_string());

        let (_, listed) = send(fakes.app(), empty_request("GET", "/api/recipes")).await;
        assert_eq!(listed["recipes"][0], *recipe);
    }

    #[tokio::test]
    async fn test_create_without_names_is_400() {
        let fakes = Fakes::default();
        let (status, body) = send(
            fakes.app(),
            json_request("POST", "/api/recipes", json!({"dishName": "  ", "note": "x"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("required"));

        let (_, listed) = send(fakes.app(), empty_request("GET", "/api/recipes")).await;
        assert_eq!(listed["recipes"], json!([]));
    }

    #[tokio::test]
    async fn test_create_malformed_json_is_400() {
        let request = axum::http::Request::builder()
            .method("POST")
            .uri("/api/recipes")
            .header("content-type", "application/json")
            .body(axum::body::Body::from("{not json"))
            .unwrap();
        let (status, body) = send(Fakes::default().app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_create_write_failure_is_500() {
        let app = Fakes::default().with_storage(Arc::new(BrokenStorage)).app();
        let (status, body) = send(
            app,
            json_request("POST", "/api/recipes", json!({"dishName": "Soup"})),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("disk full"));
    }
}
