//! Fake transcriber for tests and offline development.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{
    FileTranscriber, SpeechError, StreamTranscriber, Transcription, TranscriptionRequest,
};

/// Returns a fixed transcript (or a fixed failure) for every request.
#[derive(Debug, Default)]
pub struct FakeTranscriber {
    text: String,
    failure: Option<String>,
    calls: AtomicUsize,
}

impl FakeTranscriber {
    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Self::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn respond(&self, request: &TranscriptionRequest) -> Result<Transcription, SpeechError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = &self.failure {
            return Err(SpeechError::RequestFailed(message.clone()));
        }

        Ok(Transcription {
            text: self.text.clone(),
            language: request.language.clone(),
            raw: serde_json::json!({
                "text": self.text,
                "bytes": request.audio.len(),
                "provider": "fake",
            }),
        })
    }
}

#[async_trait]
impl FileTranscriber for FakeTranscriber {
    async fn transcribe_file(
        &self,
        request: TranscriptionRequest,
    ) -> Result<Transcription, SpeechError> {
        self.respond(&request)
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }
}

#[async_trait]
impl StreamTranscriber for FakeTranscriber {
    async fn transcribe_stream(
        &self,
        request: TranscriptionRequest,
    ) -> Result<Transcription, SpeechError> {
        self.respond(&request)
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }
}
