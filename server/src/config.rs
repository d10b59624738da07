//! Server configuration from environment variables.

use std::env;
use std::path::PathBuf;

use hearth_core::config::env_flag;
use hearth_core::{JsonFileStorage, LocalAudioStore};

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub data_dir: PathBuf,
    pub media_dir: PathBuf,
    pub public_url: String,
    pub seed_on_start: bool,
}

impl ServerConfig {
    /// Load configuration, logging every default that gets used.
    pub fn from_env() -> Self {
        Self {
            bind_addr: load("HEARTH_BIND_ADDR", || "0.0.0.0:3000".to_string()),
            data_dir: PathBuf::from(load("HEARTH_DATA_DIR", || {
                JsonFileStorage::default_dir().display().to_string()
            })),
            media_dir: PathBuf::from(load("HEARTH_MEDIA_DIR", || {
                LocalAudioStore::default_dir().display().to_string()
            })),
            public_url: load("HEARTH_PUBLIC_URL", || "http://localhost:3000".to_string()),
            seed_on_start: env_flag("HEARTH_SEED_ON_START", true),
        }
    }
}

fn load(key: &str, default: impl FnOnce() -> String) -> String {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => {
            let default = default();
            tracing::info!("{key} not set, using default: {default}");
            default
        }
    }
}
