//! Deepgram transcription of raw audio blobs.

use async_trait::async_trait;
use std::time::Duration;

use super::{
    DeepgramConfig, SpeechError, StreamTranscriber, Transcription, TranscriptionRequest,
    DEFAULT_TIMEOUT_SECS,
};

#[derive(Debug)]
pub struct DeepgramTranscriber {
    config: DeepgramConfig,
    client: reqwest::Client,
}

impl DeepgramTranscriber {
    pub fn new(config: DeepgramConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();
        Self { config, client }
    }

    fn query(&self, language: Option<&str>) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("model", self.config.model.clone()),
            ("smart_format", "true".to_string()),
            ("punctuate", "true".to_string()),
        ];
        match language {
            Some(lang) => query.push(("language", lang.to_string())),
            None => query.push(("detect_language", "true".to_string())),
        }
        query
    }
}

/// Pull the best transcript and detected language out of a Deepgram response.
fn extract_transcript(raw: &serde_json::Value) -> Option<(String, Option<String>)> {
    let channel = raw.pointer("/results/channels/0")?;
    let transcript = channel
        .pointer("/alternatives/0/transcript")?
        .as_str()?
        .trim()
        .to_string();
    let language = channel
        .get("detected_language")
        .and_then(|l| l.as_str())
        .map(str::to_string);
    Some((transcript, language))
}

#[async_trait]
impl StreamTranscriber for DeepgramTranscriber {
    async fn transcribe_stream(
        &self,
        request: TranscriptionRequest,
    ) -> Result<Transcription, SpeechError> {
        let url = format!("{}/listen", self.config.base_url.trim_end_matches('/'));

        tracing::debug!(model = %self.config.model, bytes = request.audio.len(), "Streaming audio to Deepgram");

        let response = self
            .client
            .post(url)
            .query(&self.query(request.language.as_deref()))
            .header("Authorization", format!("Token {}", self.config.api_key))
            .header("Content-Type", request.mime_type.as_str())
            .body(request.audio)
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
        let (text, detected) = extract_transcript(&raw)
            .ok_or_else(|| SpeechError::ParseError("Response has no transcript".to_string()))?;

        Ok(Transcription {
            text,
            language: request.language.or(detected),
            raw,
        })
    }

    fn provider_name(&self) -> &'static str {
        "deepgram"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn transcriber() -> DeepgramTranscriber {
        DeepgramTranscriber::new(DeepgramConfig {
            api_key: "key".to_string(),
            model: "nova-2".to_string(),
            base_url: "https://example.com/v1".to_string(),
        })
    }

    #[test]
    fn test_extract_transcript() {
        let raw = json!({
            "results": {"channels": [{
                "detected_language": "ko",
                "alternatives": [{"transcript": " 김치찌개 끓이는 법 ", "confidence": 0.97}]
            }]}
        });
        let (text, language) = extract_transcript(&raw).unwrap();
        assert_eq!(text, "김치찌개 끓이는 법");
        assert_eq!(language.as_deref(), Some("ko"));
    }

    #[test]
    fn test_extract_transcript_missing() {
        assert!(extract_transcript(&json!({"results": {}})).is_none());
    }

    #[test]
    fn test_query_detects_language_when_unset() {
        let query = transcriber().query(None);
        assert!(query.contains(&("detect_language", "true".to_string())));

        let query = transcriber().query(Some("en"));
        assert!(query.contains(&("language", "en".to_string())));
    }
}
