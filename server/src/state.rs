use std::sync::Arc;

use hearth_core::ai::{create_ai_client_from_env, AiClient, AiError};
use hearth_core::speech::{create_file_transcriber_from_env, create_stream_transcriber_from_env};
use hearth_core::store::RECIPES_COLLECTION;
use hearth_core::{
    AudioStore, FileTranscriber, JsonFileStorage, LocalAudioStore, RecipeRepository,
    SpeechError, StreamTranscriber,
};
use thiserror::Error;

use crate::config::ServerConfig;

/// Application state shared across all handlers
pub type AppState = Arc<AppServices>;

/// Handles to the recipe store and every external capability.
pub struct AppServices {
    pub recipes: RecipeRepository,
    pub ai: Arc<dyn AiClient>,
    pub file_transcriber: Arc<dyn FileTranscriber>,
    pub stream_transcriber: Arc<dyn StreamTranscriber>,
    pub audio: Arc<dyn AudioStore>,
}

#[derive(Error, Debug)]
pub enum StartupError {
    #[error(transparent)]
    Ai(#[from] AiError),

    #[error(transparent)]
    Speech(#[from] SpeechError),

    #[error("Failed to seed recipes: {0}")]
    Seed(#[from] hearth_core::RecipeError),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

impl AppServices {
    /// Wire up the file-backed store and the providers selected by the environment.
    pub fn from_config(config: &ServerConfig) -> Result<Self, StartupError> {
        let storage = JsonFileStorage::new(&config.data_dir, RECIPES_COLLECTION);
        tracing::info!("Recipe collection at {}", storage.path().display());

        let ai = create_ai_client_from_env()?;
        let file_transcriber = create_file_transcriber_from_env()?;
        let stream_transcriber = create_stream_transcriber_from_env()?;
        tracing::info!(
            file_stt = file_transcriber.provider_name(),
            stream_stt = stream_transcriber.provider_name(),
            "Speech-to-text providers configured"
        );

        Ok(Self {
            recipes: RecipeRepository::new(Arc::new(storage)),
            ai,
            file_transcriber,
            stream_transcriber,
            audio: Arc::new(LocalAudioStore::new(&config.media_dir, &config.public_url)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_from_config_seeds_once() {
        let dir = TempDir::new().unwrap();
        let config = ServerConfig {
            bind_addr: "127.0.0.1:0".to_string(),
            data_dir: dir.path().join("data"),
            media_dir: dir.path().join("media"),
            public_url: "http://localhost:3000".to_string(),
            seed_on_start: true,
        };

        let services = AppServices::from_config(&config).unwrap();
        assert!(services.recipes.seed_if_uninitialized().await.unwrap());
        assert!(!services.recipes.seed_if_uninitialized().await.unwrap());

        let stored: PathBuf = config.data_dir.join("recipes.json");
        assert!(stored.exists());
    }
}
