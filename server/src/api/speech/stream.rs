use crate::api::ErrorResponse;
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, QueryRejection},
        Query, State,
    },
    http::{header, HeaderMap},
    Json,
};
use hearth_core::audio::validate_audio_with_limit;
use hearth_core::{TranscriptionRequest, MAX_TRANSCRIPTION_SIZE};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Browsers record with MediaRecorder, which produces webm by default.
const DEFAULT_STREAM_TYPE: &str = "audio/webm";

#[derive(Debug, Deserialize, IntoParams)]
pub struct StreamParams {
    /// Language hint; detected by the provider when absent.
    pub lang: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StreamTranscribeResponse {
    pub success: bool,
    pub text: String,
    pub language: Option<String>,
    #[schema(value_type = Object)]
    pub raw: serde_json::Value,
}

#[utoipa::path(
    post,
    path = "/api/speech/stream",
    tag = "speech",
    params(StreamParams),
    request_body(content_type = "application/octet-stream", content = String, description = "Raw audio bytes"),
    responses(
        (status = 200, description = "Transcribed text", body = StreamTranscribeResponse),
        (status = 400, description = "Empty or unsupported audio", body = ErrorResponse),
        (status = 500, description = "Transcription failed", body = ErrorResponse)
    )
)]
pub async fn transcribe_stream(
    State(state): State<AppState>,
    params: Result<Query<StreamParams>, QueryRejection>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<StreamTranscribeResponse>, ApiError> {
    let Query(params) = params?;
    let body = body?;
    let declared = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(DEFAULT_STREAM_TYPE);

    let mime_type = validate_audio_with_limit(&body, Some(declared), None, MAX_TRANSCRIPTION_SIZE)
        .or_else(|err| match err {
            // Generic binary uploads are taken to be browser recordings.
            hearth_core::AudioError::UnsupportedType(_)
                if declared.starts_with("application/octet-stream") =>
            {
                Ok(DEFAULT_STREAM_TYPE.to_string())
            }
            other => Err(other),
        })?;

    let language = params
        .lang
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty());

    let transcription = state
        .stream_transcriber
        .transcribe_stream(TranscriptionRequest {
            audio: body.to_vec(),
            filename: "stream".to_string(),
            mime_type,
            language,
        })
        .await?;

    Ok(Json(StreamTranscribeResponse {
        success: true,
        text: transcription.text,
        language: transcription.language,
        raw: transcription.raw,
    }))
}

#[cfg(test)]
mod tests {
    use crate::api::MAX_REQUEST_BODY;
    use crate::state::test_support::{send, Fakes};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};

    fn stream_request(uri: &str, content_type: Option<&str>, body: &'static [u8]) -> Request<Body> {
        let mut builder = Request::builder().method("POST").uri(uri);
        if let Some(ct) = content_type {
            builder = builder.header("content-type", ct);
        }
        builder.body(Body::from(body)).unwrap()
    }

    #[tokio::test]
    async fn test_streams_audio_with_language() {
        let fakes = Fakes::default();
        let (status, body) = send(
            fakes.app(),
            stream_request("/api/speech/stream?lang=ko", Some("audio/webm;codecs=opus"), b"opus"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["text"], "hello kitchen");
        assert_eq!(body["language"], "ko");
        assert_eq!(fakes.transcriber.calls(), 1);
    }

    #[tokio::test]
    async fn test_octet_stream_is_treated_as_webm() {
        let fakes = Fakes::default();
        let (status, body) = send(
            fakes.app(),
            stream_request("/api/speech/stream", Some("application/octet-stream"), b"data"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["language"].is_null());
    }

    #[tokio::test]
    async fn test_empty_body_is_400() {
        let fakes = Fakes::default();
        let (status, body) = send(fakes.app(), stream_request("/api/speech/stream", None, b"")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No audio data provided");
        assert_eq!(fakes.transcriber.calls(), 0);
    }

    #[tokio::test]
    async fn test_non_audio_is_400() {
        let fakes = Fakes::default();
        let (status, _) = send(
            fakes.app(),
            stream_request("/api/speech/stream", Some("text/plain"), b"hello"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_body_over_request_limit_is_json_400() {
        let fakes = Fakes::default();
        let request = Request::builder()
            .method("POST")
            .uri("/api/speech/stream")
            .header("content-type", "audio/webm")
            .body(Body::from(vec![0u8; MAX_REQUEST_BODY + 1024 * 1024]))
            .unwrap();
        let (status, body) = send(fakes.app(), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("length limit exceeded"));
        assert_eq!(fakes.transcriber.calls(), 0);
    }
}
