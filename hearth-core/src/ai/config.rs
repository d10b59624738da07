//! AI configuration from environment variables.

use crate::config::{env_or, require_any, ConfigError};

/// Default OpenRouter base URL.
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Default model to use.
pub const DEFAULT_MODEL: &str = "openai/gpt-4o-mini";

/// AI client configuration.
#[derive(Debug, Clone)]
pub struct AiConfig {
    /// API key for the OpenAI-compatible endpoint.
    pub api_key: String,
    /// Model name (e.g., "openai/gpt-4o-mini").
    pub model: String,
    /// Base URL for the API, without the trailing `/chat/completions`.
    pub base_url: String,
}

impl AiConfig {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `HEARTH_AI_API_KEY` or `OPENROUTER_API_KEY`
    ///
    /// Optional:
    /// - `HEARTH_AI_MODEL`: Model name (default: "openai/gpt-4o-mini")
    /// - `HEARTH_AI_BASE_URL`: API base URL (default: "https://openrouter.ai/api/v1")
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = require_any(&["HEARTH_AI_API_KEY", "OPENROUTER_API_KEY"])?;

        Ok(Self {
            api_key,
            model: env_or("HEARTH_AI_MODEL", DEFAULT_MODEL),
            base_url: env_or("HEARTH_AI_BASE_URL", DEFAULT_BASE_URL),
        })
    }
}
