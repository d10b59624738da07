//! JSON file storage: one file per named collection.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::RecipeStorage;
use crate::error::StorageError;
use crate::types::Recipe;

/// Current on-disk format version.
const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct StoredCollection {
    version: u32,
    recipes: Vec<Recipe>,
}

/// Stores a collection as `<dir>/<collection>.json`.
///
/// Saves write a sibling temp file and rename it over the target, so a failed
/// save leaves the previous file intact.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(dir: impl Into<PathBuf>, collection: &str) -> Self {
        Self {
            path: dir.into().join(format!("{}.json", collection)),
        }
    }

    /// Get the default data directory: ~/.hearth/data
    pub fn default_dir() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".hearth").join("data"))
            .unwrap_or_else(|| PathBuf::from("data"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

#[async_trait]
impl RecipeStorage for JsonFileStorage {
    async fn load(&self) -> Result<Vec<Recipe>, StorageError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let stored: StoredCollection = serde_json::from_str(&content)
            .map_err(|e| StorageError::Corrupt(format!("{}: {}", self.path.display(), e)))?;

        if stored.version > FORMAT_VERSION {
            return Err(StorageError::Corrupt(format!(
                "{}: unsupported format version {}",
                self.path.display(),
                stored.version
            )));
        }

        Ok(stored.recipes)
    }

    async fn save(&self, recipes: &[Recipe]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let stored = StoredCollection {
            version: FORMAT_VERSION,
            recipes: recipes.to_vec(),
        };
        let json = serde_json::to_string_pretty(&stored)?;

        let temp = self.temp_path();
        tokio::fs::write(&temp, json).await?;
        if let Err(e) = tokio::fs::rename(&temp, &self.path).await {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(e.into());
        }

        tracing::debug!(path = %self.path.display(), count = recipes.len(), "Saved recipe collection");
        Ok(())
    }

    async fn is_initialized(&self) -> Result<bool, StorageError> {
        Ok(tokio::fs::try_exists(&self.path).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::mock_recipes;

    #[tokio::test]
    async fn test_missing_file_reads_empty_and_uninitialized() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path(), "recipes");

        assert!(storage.load().await.unwrap().is_empty());
        assert!(!storage.is_initialized().await.unwrap());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("nested"), "recipes");
        let recipes = mock_recipes();

        storage.save(&recipes).await.unwrap();

        assert!(storage.is_initialized().await.unwrap());
        assert_eq!(storage.load().await.unwrap(), recipes);
        assert!(storage.path().ends_with("nested/recipes.json"));
    }

    #[tokio::test]
    async fn test_failed_save_keeps_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path(), "recipes");
        let recipes = mock_recipes();
        storage.save(&recipes[..1]).await.unwrap();

        // A directory squatting on the temp path makes the write fail.
        std::fs::create_dir(storage.temp_path()).unwrap();
        let result = storage.save(&recipes).await;
        assert!(matches!(result, Err(StorageError::Io(_))));

        assert_eq!(storage.load().await.unwrap(), recipes[..1].to_vec());
    }

    #[tokio::test]
    async fn test_malformed_file_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path(), "recipes");
        std::fs::write(storage.path(), "{not json").unwrap();

        let result = storage.load().await;
        assert!(matches!(result, Err(StorageError::Corrupt(_))));
    }
}
