//! Audio memos stored as files under a media directory.

use async_trait::async_trait;
use chrono::Utc;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use super::{extension_for, AudioError, AudioStore, AudioUpload, StoredAudio};

const DEFAULT_FOLDER: &str = "memos";
const ANONYMOUS_USER: &str = "anonymous";

/// Writes uploads to `<media_dir>/<folder>/<user>/<timestamp>-<uuid>.<ext>`
/// and returns URLs under `<public_url>/media/`.
#[derive(Debug, Clone)]
pub struct LocalAudioStore {
    media_dir: PathBuf,
    public_url: String,
}

impl LocalAudioStore {
    pub fn new(media_dir: impl Into<PathBuf>, public_url: &str) -> Self {
        Self {
            media_dir: media_dir.into(),
            public_url: public_url.trim_end_matches('/').to_string(),
        }
    }

    /// Default media directory (~/.hearth/media).
    pub fn default_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".hearth")
            .join("media")
    }

    pub fn media_dir(&self) -> &Path {
        &self.media_dir
    }
}

/// Reduce a client-supplied path segment to `[A-Za-z0-9_-]`.
fn sanitize_segment(segment: Option<&str>, fallback: &str) -> String {
    let cleaned: String = segment
        .unwrap_or_default()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();
    if cleaned.is_empty() {
        fallback.to_string()
    } else {
        cleaned
    }
}

#[async_trait]
impl AudioStore for LocalAudioStore {
    async fn store(&self, upload: AudioUpload) -> Result<StoredAudio, AudioError> {
        let ext = extension_for(&upload.content_type)
            .ok_or_else(|| AudioError::UnsupportedType(upload.content_type.clone()))?;
        let folder = sanitize_segment(upload.folder.as_deref(), DEFAULT_FOLDER);
        let user = sanitize_segment(upload.user_id.as_deref(), ANONYMOUS_USER);
        let filename = format!(
            "{}-{}.{}",
            Utc::now().timestamp_millis(),
            Uuid::new_v4().simple(),
            ext
        );

        let dir = self.media_dir.join(&folder).join(&user);
        tokio::fs::create_dir_all(&dir).await?;
        tokio::fs::write(dir.join(&filename), &upload.data).await?;

        let relative = format!("{}/{}/{}", folder, user, filename);
        tracing::info!(path = %relative, bytes = upload.data.len(), "Stored audio memo");

        Ok(StoredAudio {
            url: format!("{}/media/{}", self.public_url, relative),
            filename: relative,
            size: upload.data.len(),
        })
    }
}
