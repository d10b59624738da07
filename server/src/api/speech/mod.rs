pub mod stream;
pub mod transcribe;

use crate::state::AppState;
use axum::routing::post;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/speech endpoints (mounted at /api/speech)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/transcribe", post(transcribe::transcribe))
        .route("/stream", post(stream::transcribe_stream))
}

#[derive(OpenApi)]
#[openapi(
    paths(transcribe::transcribe, stream::transcribe_stream),
    components(schemas(
        transcribe::TranscribeRequest,
        transcribe::TranscribeResponse,
        stream::StreamTranscribeResponse,
    ))
)]
pub struct ApiDoc;
