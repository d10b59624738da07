use crate::api::multipart::read_form;
use crate::api::ErrorResponse;
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use hearth_core::audio::validate_audio_with_limit;
use hearth_core::{TranscriptionRequest, MAX_TRANSCRIPTION_SIZE};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(ToSchema)]
#[allow(dead_code)]
pub struct TranscribeRequest {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
    /// Language hint, e.g. "ko" or "en".
    pub lang: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TranscribeResponse {
    pub success: bool,
    pub text: String,
    /// The provider's untouched response.
    #[schema(value_type = Object)]
    pub raw: serde_json::Value,
}

#[utoipa::path(
    post,
    path = "/api/speech/transcribe",
    tag = "speech",
    request_body(content_type = "multipart/form-data", content = TranscribeRequest),
    responses(
        (status = 200, description = "Transcribed text", body = TranscribeResponse),
        (status = 400, description = "Missing, oversized or unsupported file", body = ErrorResponse),
        (status = 500, description = "Transcription failed", body = ErrorResponse)
    )
)]
pub async fn transcribe(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<TranscribeResponse>, ApiError> {
    let form = read_form(multipart?, "file").await?;
    let language = form.text("lang").map(str::to_string);
    let (file, _) = form.require_file()?;

    let mime_type = validate_audio_with_limit(
        &file.data,
        file.content_type.as_deref(),
        file.filename.as_deref(),
        MAX_TRANSCRIPTION_SIZE,
    )?;

    tracing::debug!(bytes = file.data.len(), mime = %mime_type, "Transcribing uploaded file");

    let transcription = state
        .file_transcriber
        .transcribe_file(TranscriptionRequest {
            audio: file.data,
            filename: file.filename.unwrap_or_else(|| "audio".to_string()),
            mime_type,
            language,
        })
        .await?;

    Ok(Json(TranscribeResponse {
        success: true,
        text: transcription.text,
        raw: transcription.raw,
    }))
}
