pub mod admin;
pub mod ai;
pub mod audio;
mod multipart;
pub mod recipes;
pub mod speech;
pub mod testing;

use axum::extract::DefaultBodyLimit;
use axum::{middleware, Router};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::error::json_method_not_allowed;
use crate::state::AppState;

/// Largest accepted request body. Above the audio limits so oversized uploads
/// reach validation and get a 400 instead of a transport error.
pub const MAX_REQUEST_BODY: usize = 26 * 1024 * 1024;

/// Shared error response used by all endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// All `/api` routes with their state applied.
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/api/test", testing::router())
        .nest("/api/recipes", recipes::router())
        .nest("/api/admin", admin::router())
        .nest("/api/ai", ai::router())
        .nest("/api/speech", speech::router())
        .nest("/api/audio", audio::router())
        .layer(middleware::map_response(json_method_not_allowed))
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY))
        .with_state(state)
}

/// Generate the complete OpenAPI spec by merging all module specs
pub fn openapi() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Hearth API", description = "Recipes, AI helpers, speech-to-text and audio memos"),
        components(schemas(ErrorResponse))
    )]
    struct BaseApi;

    let mut spec = BaseApi::openapi();

    let modules: Vec<utoipa::openapi::OpenApi> = vec![
        testing::ApiDoc::openapi(),
        recipes::ApiDoc::openapi(),
        admin::ApiDoc::openapi(),
        ai::ApiDoc::openapi(),
        speech::ApiDoc::openapi(),
        audio::ApiDoc::openapi(),
    ];

    for module_spec in modules {
        spec.paths.paths.extend(module_spec.paths.paths);

        if let Some(module_components) = module_spec.components {
            if let Some(spec_components) = spec.components.as_mut() {
                spec_components.schemas.extend(module_components.schemas);
            }
        }
    }

    spec
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::{empty_request, send, Fakes};
    use axum::http::StatusCode;

    #[test]
    fn test_openapi_lists_every_endpoint() {
        let spec = openapi();
        for path in [
            "/api/recipes",
            "/api/recipes/{id}",
            "/api/admin/reset-mock-data",
            "/api/ai/mood-search",
            "/api/ai/emotion-tags",
            "/api/ai/suggest-recipes",
            "/api/ai/nostalgia-story",
            "/api/speech/transcribe",
            "/api/speech/stream",
            "/api/audio",
            "/api/test/ping",
        ] {
            assert!(spec.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[tokio::test]
    async fn test_unsupported_method_returns_json_405() {
        let app = Fakes::default().app();
        let (status, body) = send(app, empty_request("GET", "/api/ai/mood-search")).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["error"], "Method not allowed");
    }

    #[tokio::test]
    async fn test_unsupported_method_on_collection() {
        let app = Fakes::default().app();
        let (status, body) = send(app, empty_request("DELETE", "/api/recipes")).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["error"], "Method not allowed");
    }

    #[tokio::test]
    async fn test_ping() {
        let app = Fakes::default().app();
        let (status, body) = send(app, empty_request("GET", "/api/test/ping")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "pong");
    }
}
