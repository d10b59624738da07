use crate::api::ErrorResponse;
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
};

#[utoipa::path(
    delete,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe ID")
    ),
    responses(
        (status = 204, description = "Recipe deleted"),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.recipes.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use crate::state::test_support::{empty_request, send, Fakes};
    use axum::http::StatusCode;
    use hearth_core::MemoryStorage;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_delete_then_404() {
        let fakes = Fakes::default().with_storage(Arc::new(MemoryStorage::with_recipes(
            hearth_core::mock_recipes(),
        )));

        let (status, body) = send(fakes.app(), empty_request("DELETE", "/api/recipes/mock-tteokbokki")).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_null());

        let (status, _) = send(fakes.app(), empty_request("DELETE", "/api/recipes/mock-tteokbokki")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
