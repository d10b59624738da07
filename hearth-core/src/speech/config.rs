//! Speech provider configuration from environment variables.

use crate::config::{env_or, require_any, ConfigError};

pub const DEFAULT_WHISPER_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_WHISPER_MODEL: &str = "whisper-1";
pub const DEFAULT_DEEPGRAM_BASE_URL: &str = "https://api.deepgram.com/v1";
pub const DEFAULT_DEEPGRAM_MODEL: &str = "nova-2";

/// Configuration for an OpenAI-compatible transcription API.
#[derive(Debug, Clone)]
pub struct WhisperConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl WhisperConfig {
    /// Required: `OPENAI_API_KEY` (or `HEARTH_STT_API_KEY`).
    /// Optional: `HEARTH_STT_MODEL`, `HEARTH_STT_BASE_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: require_any(&["HEARTH_STT_API_KEY", "OPENAI_API_KEY"])?,
            model: env_or("HEARTH_STT_MODEL", DEFAULT_WHISPER_MODEL),
            base_url: env_or("HEARTH_STT_BASE_URL", DEFAULT_WHISPER_BASE_URL),
        })
    }
}

/// Configuration for Deepgram's pre-recorded transcription API.
#[derive(Debug, Clone)]
pub struct DeepgramConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl DeepgramConfig {
    /// Required: `DEEPGRAM_API_KEY`.
    /// Optional: `HEARTH_STREAM_STT_MODEL`, `HEARTH_STREAM_STT_BASE_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: require_any(&["DEEPGRAM_API_KEY"])?,
            model: env_or("HEARTH_STREAM_STT_MODEL", DEFAULT_DEEPGRAM_MODEL),
            base_url: env_or("HEARTH_STREAM_STT_BASE_URL", DEFAULT_DEEPGRAM_BASE_URL),
        })
    }
}
