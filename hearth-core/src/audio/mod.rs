//! Audio memo validation and storage.
//!
//! Uploads pass through [`validate_audio`] before any storage call; the
//! storage itself sits behind the [`AudioStore`] port.

mod local;

pub use local::LocalAudioStore;

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use thiserror::Error;

/// Maximum file size for audio memos (20MB).
pub const MAX_AUDIO_SIZE: usize = 20 * 1024 * 1024;

/// Allowed audio content types, paired with the extension used when storing them.
pub const ALLOWED_AUDIO_TYPES: &[(&str, &str)] = &[
    ("audio/webm", "webm"),
    ("video/webm", "webm"),
    ("audio/wav", "wav"),
    ("audio/x-wav", "wav"),
    ("audio/wave", "wav"),
    ("audio/mpeg", "mp3"),
    ("audio/mp3", "mp3"),
    ("audio/mp4", "m4a"),
    ("audio/m4a", "m4a"),
    ("audio/x-m4a", "m4a"),
    ("audio/ogg", "ogg"),
    ("audio/aac", "aac"),
    ("audio/flac", "flac"),
    ("audio/x-flac", "flac"),
];

#[derive(Error, Debug)]
pub enum AudioError {
    #[error("No audio data provided")]
    Empty,

    #[error("File too large. Maximum size is {max} bytes (got {size})")]
    TooLarge { size: usize, max: usize },

    #[error("Unsupported audio type: {0}. Allowed: webm, wav, mp3, m4a, ogg, aac, flac")]
    UnsupportedType(String),

    #[error("Failed to store audio: {0}")]
    Io(#[from] std::io::Error),
}

/// Strip parameters (`; codecs=opus`) and normalize case.
fn essence(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

fn guess_type(filename: &str) -> Option<&'static str> {
    let (_, ext) = filename.rsplit_once('.')?;
    match ext.to_ascii_lowercase().as_str() {
        "webm" => Some("audio/webm"),
        "wav" => Some("audio/wav"),
        "mp3" => Some("audio/mpeg"),
        "m4a" | "mp4" => Some("audio/mp4"),
        "ogg" | "oga" | "opus" => Some("audio/ogg"),
        "aac" => Some("audio/aac"),
        "flac" => Some("audio/flac"),
        _ => None,
    }
}

/// File extension used for a validated content type.
pub fn extension_for(content_type: &str) -> Option<&'static str> {
    let essence = essence(content_type);
    ALLOWED_AUDIO_TYPES
        .iter()
        .find(|(mime, _)| *mime == essence)
        .map(|(_, ext)| *ext)
}

/// Validate audio data: non-empty, within `max_size`, and of an allowed type.
///
/// The content type comes from the upload; when it is missing or generic
/// (`application/octet-stream`) it is guessed from the filename.
/// Returns the normalized content type on success (e.g., "audio/webm").
pub fn validate_audio_with_limit(
    data: &[u8],
    content_type: Option<&str>,
    filename: Option<&str>,
    max_size: usize,
) -> Result<String, AudioError> {
    if data.is_empty() {
        return Err(AudioError::Empty);
    }

    if data.len() > max_size {
        return Err(AudioError::TooLarge {
            size: data.len(),
            max: max_size,
        });
    }

    let declared = content_type
        .map(essence)
        .filter(|ct| !ct.is_empty() && ct != "application/octet-stream");

    let content_type = match declared {
        Some(ct) => ct,
        None => filename
            .and_then(guess_type)
            .map(str::to_string)
            .ok_or_else(|| {
                AudioError::UnsupportedType(filename.unwrap_or("unknown").to_string())
            })?,
    };

    if extension_for(&content_type).is_none() {
        return Err(AudioError::UnsupportedType(content_type));
    }

    Ok(content_type)
}

/// [`validate_audio_with_limit`] with the memo ceiling, [`MAX_AUDIO_SIZE`].
pub fn validate_audio(
    data: &[u8],
    content_type: Option<&str>,
    filename: Option<&str>,
) -> Result<String, AudioError> {
    validate_audio_with_limit(data, content_type, filename, MAX_AUDIO_SIZE)
}

/// A validated audio upload.
#[derive(Debug, Clone)]
pub struct AudioUpload {
    pub data: Vec<u8>,
    pub content_type: String,
    pub user_id: Option<String>,
    pub folder: Option<String>,
}

/// Where an upload ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredAudio {
    pub url: String,
    pub filename: String,
    pub size: usize,
}

/// Storage for audio memos.
#[async_trait]
pub trait AudioStore: Send + Sync {
    async fn store(&self, upload: AudioUpload) -> Result<StoredAudio, AudioError>;
}

/// In-memory store that records how many uploads it received.
#[derive(Debug, Default)]
pub struct FakeAudioStore {
    calls: AtomicUsize,
}

impl FakeAudioStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AudioStore for FakeAudioStore {
    async fn store(&self, upload: AudioUpload) -> Result<StoredAudio, AudioError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        let ext = extension_for(&upload.content_type).unwrap_or("bin");
        let filename = format!("memo-{}.{}", n, ext);
        Ok(StoredAudio {
            url: format!("memory://audio/{}", filename),
            filename,
            size: upload.data.len(),
        })
    }
}
