//! OpenAI-compatible (Whisper) file transcription.
//!
//! Multipart form upload with `model` and `file` fields, Bearer auth, JSON
//! response with a `text` field.

use async_trait::async_trait;
use std::time::Duration;

use super::{
    FileTranscriber, SpeechError, Transcription, TranscriptionRequest, WhisperConfig,
    DEFAULT_TIMEOUT_SECS,
};

#[derive(Debug)]
pub struct WhisperTranscriber {
    config: WhisperConfig,
    client: reqwest::Client,
}

impl WhisperTranscriber {
    pub fn new(config: WhisperConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();
        Self { config, client }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/audio/transcriptions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Text fields sent alongside the `file` part.
    fn form_fields(&self, language: Option<&str>) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("model", self.config.model.clone()),
            ("response_format", "json".to_string()),
        ];
        if let Some(lang) = language {
            fields.push(("language", lang.to_string()));
        }
        fields
    }
}

fn extract_text(raw: &serde_json::Value) -> Option<String> {
    raw.get("text")?.as_str().map(|t| t.trim().to_string())
}

#[async_trait]
impl FileTranscriber for WhisperTranscriber {
    async fn transcribe_file(
        &self,
        request: TranscriptionRequest,
    ) -> Result<Transcription, SpeechError> {
        let part = reqwest::multipart::Part::bytes(request.audio)
            .file_name(request.filename)
            .mime_str(&request.mime_type)
            .map_err(|e| SpeechError::RequestFailed(format!("Invalid audio type: {}", e)))?;

        let form = self
            .form_fields(request.language.as_deref())
            .into_iter()
            .fold(reqwest::multipart::Form::new(), |form, (name, value)| {
                form.text(name, value)
            })
            .part("file", part);

        tracing::debug!(model = %self.config.model, "Sending audio to transcription API");

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| SpeechError::RequestFailed(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SpeechError::RequestFailed(e.to_string()))?;

        if !status.is_success() {
            return Err(SpeechError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let raw: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| SpeechError::ParseError(e.to_string()))?;
        let text = extract_text(&raw)
            .ok_or_else(|| SpeechError::ParseError("Response has no text field".to_string()))?;

        Ok(Transcription {
            text,
            language: request.language,
            raw,
        })
    }

    fn provider_name(&self) -> &'static str {
        "whisper"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn transcriber() -> WhisperTranscriber {
        WhisperTranscriber::new(WhisperConfig {
            api_key: "key".to_string(),
            model: "whisper-1".to_string(),
            base_url: "https://example.com/v1/".to_string(),
        })
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        assert_eq!(
            transcriber().endpoint(),
            "https://example.com/v1/audio/transcriptions"
        );
    }

    #[test]
    fn test_form_fields_include_language_only_when_set() {
        let fields = transcriber().form_fields(None);
        assert!(fields.contains(&("model", "whisper-1".to_string())));
        assert!(fields.iter().all(|(name, _)| *name != "language"));

        let fields = transcriber().form_fields(Some("ko"));
        assert!(fields.contains(&("language", "ko".to_string())));
    }

    #[test]
    fn test_extract_text() {
        let raw = json!({"text": " 된장찌개 레시피 알려줘 \n"});
        assert_eq!(extract_text(&raw).as_deref(), Some("된장찌개 레시피 알려줘"));
    }

    #[test]
    fn test_extract_text_missing() {
        assert!(extract_text(&json!({"error": {"message": "bad"}})).is_none());
        assert!(extract_text(&json!({"text": 42})).is_none());
    }
}
