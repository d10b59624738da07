pub mod upload;

use crate::state::AppState;
use axum::routing::post;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/audio endpoints (mounted at /api/audio)
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(upload::upload_audio))
}

#[derive(OpenApi)]
#[openapi(
    paths(upload::upload_audio),
    components(schemas(upload::UploadAudioRequest, upload::UploadAudioResponse))
)]
pub struct ApiDoc;
