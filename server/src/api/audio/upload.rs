use crate::api::multipart::read_form;
use crate::api::ErrorResponse;
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    Json,
};
use hearth_core::{validate_audio, AudioUpload};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(ToSchema)]
#[allow(dead_code)]
#[schema(rename_all = "camelCase")]
pub struct UploadAudioRequest {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
    pub user_id: Option<String>,
    /// Sub-folder to group memos under (default "memos").
    pub folder: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadAudioResponse {
    pub success: bool,
    pub audio_url: String,
    pub filename: String,
    pub size: usize,
}

#[utoipa::path(
    post,
    path = "/api/audio",
    tag = "audio",
    request_body(content_type = "multipart/form-data", content = UploadAudioRequest),
    responses(
        (status = 201, description = "Audio memo stored", body = UploadAudioResponse),
        (status = 400, description = "Missing, oversized or unsupported file", body = ErrorResponse),
        (status = 500, description = "Storage failed", body = ErrorResponse)
    )
)]
pub async fn upload_audio(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<UploadAudioResponse>), ApiError> {
    let form = read_form(multipart?, "file").await?;
    let user_id = form.text("userId").map(str::to_string);
    let folder = form.text("folder").map(str::to_string);
    let (file, _) = form.require_file()?;

    // Size and type are checked before the store sees anything.
    let content_type = validate_audio(
        &file.data,
        file.content_type.as_deref(),
        file.filename.as_deref(),
    )?;

    let stored = state
        .audio
        .store(AudioUpload {
            data: file.data,
            content_type,
            user_id,
            folder,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(UploadAudioResponse {
            success: true,
            audio_url: stored.url,
            filename: stored.filename,
            size: stored.size,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use crate::state::test_support::{json_request, multipart_request, send, Fakes};
    use axum::http::StatusCode;
    use hearth_core::MAX_AUDIO_SIZE;

    #[tokio::test]
    async fn test_upload_stores_memo() {
        let fakes = Fakes::default();
        let request = multipart_request(
            "/api/audio",
            &[
                ("file", Some("memo.ogg"), Some("audio/ogg"), &b"OggS"[..]),
                ("userId", None, None, &b"user-7"[..]),
                ("folder", None, None, &b"stories"[..]),
            ],
        );
        let (status, body) = send(fakes.app(), request).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["success"], true);
        assert_eq!(body["filename"], "memo-1.ogg");
        assert_eq!(body["audioUrl"], "memory://audio/memo-1.ogg");
        assert_eq!(body["size"], 4);
        assert_eq!(fakes.audio.calls(), 1);
    }

    #[tokio::test]
    async fn test_oversized_upload_is_400_before_storage() {
        let fakes = Fakes::default();
        let data = vec![0u8; MAX_AUDIO_SIZE + 1];
        let request = multipart_request(
            "/api/audio",
            &[("file", Some("long.webm"), Some("audio/webm"), &data[..])],
        );
        let (status, body) = send(fakes.app(), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("too large"));
        assert_eq!(fakes.audio.calls(), 0);
    }

    #[tokio::test]
    async fn test_disallowed_type_is_400() {
        let fakes = Fakes::default();
        let request = multipart_request(
            "/api/audio",
            &[("file", Some("photo.png"), Some("image/png"), &b"\x89PNG"[..])],
        );
        let (status, body) = send(fakes.app(), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("Unsupported audio type"));
        assert_eq!(fakes.audio.calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_file_is_400() {
        let fakes = Fakes::default();
        let request = multipart_request("/api/audio", &[("userId", None, None, &b"u"[..])]);
        let (status, _) = send(fakes.app(), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(fakes.audio.calls(), 0);
    }

    #[tokio::test]
    async fn test_non_multipart_body_is_json_400() {
        let fakes = Fakes::default();
        let request = json_request("POST", "/api/audio", serde_json::json!({ "file": "memo.ogg" }));
        let (status, body) = send(fakes.app(), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("boundary"));
        assert_eq!(fakes.audio.calls(), 0);
    }
}
