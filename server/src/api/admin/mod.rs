pub mod reset;

use crate::state::AppState;
use axum::routing::post;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/admin endpoints (mounted at /api/admin)
pub fn router() -> Router<AppState> {
    Router::new().route("/reset-mock-data", post(reset::reset_mock_data))
}

#[derive(OpenApi)]
#[openapi(paths(reset::reset_mock_data), components(schemas(reset::ResetResponse)))]
pub struct ApiDoc;
