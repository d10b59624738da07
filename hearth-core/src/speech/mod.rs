//! Speech-to-text ports.
//!
//! Two capabilities are kept separate because they talk to different
//! providers with different contracts:
//! - `FileTranscriber`: a complete uploaded file (Whisper-style multipart API)
//! - `StreamTranscriber`: a raw audio blob posted as the request body (Deepgram)

mod config;
mod deepgram;
mod fake;
mod whisper;

pub use config::{DeepgramConfig, WhisperConfig};
pub use deepgram::DeepgramTranscriber;
pub use fake::FakeTranscriber;
pub use whisper::WhisperTranscriber;

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

use crate::config::{env_or, ConfigError};

/// Default timeout for transcription requests (seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Maximum accepted upload size for transcription (25 MiB, the Whisper API limit).
pub const MAX_TRANSCRIPTION_SIZE: usize = 25 * 1024 * 1024;

#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("Transcription request failed: {0}")]
    RequestFailed(String),

    #[error("Transcription API returned error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse transcription response: {0}")]
    ParseError(String),

    #[error("Transcription configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Audio to transcribe.
#[derive(Debug, Clone)]
pub struct TranscriptionRequest {
    pub audio: Vec<u8>,
    pub filename: String,
    pub mime_type: String,
    /// BCP-47 or ISO-639-1 language hint; `None` lets the provider detect it.
    pub language: Option<String>,
}

/// Transcribed text plus the provider's untouched response.
#[derive(Debug, Clone, Serialize)]
pub struct Transcription {
    pub text: String,
    pub language: Option<String>,
    pub raw: serde_json::Value,
}

/// Transcribes complete audio files.
#[async_trait]
pub trait FileTranscriber: Send + Sync {
    async fn transcribe_file(
        &self,
        request: TranscriptionRequest,
    ) -> Result<Transcription, SpeechError>;

    fn provider_name(&self) -> &'static str;
}

/// Transcribes audio blobs streamed as a request body.
#[async_trait]
pub trait StreamTranscriber: Send + Sync {
    async fn transcribe_stream(
        &self,
        request: TranscriptionRequest,
    ) -> Result<Transcription, SpeechError>;

    fn provider_name(&self) -> &'static str;
}

/// Build the file transcriber selected by the environment.
///
/// - `HEARTH_STT_PROVIDER`: "openai" | "fake" (default: "fake")
pub fn create_file_transcriber_from_env() -> Result<Arc<dyn FileTranscriber>, SpeechError> {
    match env_or("HEARTH_STT_PROVIDER", "fake").as_str() {
        "fake" => Ok(Arc::new(FakeTranscriber::with_text(
            "This is a demo transcription.",
        ))),
        "openai" | "whisper" => Ok(Arc::new(WhisperTranscriber::new(WhisperConfig::from_env()?))),
        other => Err(ConfigError::UnknownProvider {
            kind: "speech-to-text",
            name: other.to_string(),
        }
        .into()),
    }
}

/// Build the stream transcriber selected by the environment.
///
/// - `HEARTH_STREAM_STT_PROVIDER`: "deepgram" | "fake" (default: "fake")
pub fn create_stream_transcriber_from_env() -> Result<Arc<dyn StreamTranscriber>, SpeechError> {
    match env_or("HEARTH_STREAM_STT_PROVIDER", "fake").as_str() {
        "fake" => Ok(Arc::new(FakeTranscriber::with_text(
            "This is a demo transcription.",
        ))),
        "deepgram" => Ok(Arc::new(DeepgramTranscriber::new(DeepgramConfig::from_env()?))),
        other => Err(ConfigError::UnknownProvider {
            kind: "streaming speech-to-text",
            name: other.to_string(),
        }
        .into()),
    }
}
