//! In-process recipe storage for tests and ephemeral runs.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::RecipeStorage;
use crate::error::StorageError;
use crate::types::Recipe;

/// Holds the collection in memory. `None` means the collection was never written.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    recipes: RwLock<Option<Vec<Recipe>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already-written collection.
    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes: RwLock::new(Some(recipes)),
        }
    }
}

#[async_trait]
impl RecipeStorage for MemoryStorage {
    async fn load(&self) -> Result<Vec<Recipe>, StorageError> {
        Ok(self.recipes.read().await.clone().unwrap_or_default())
    }

    async fn save(&self, recipes: &[Recipe]) -> Result<(), StorageError> {
        *self.recipes.write().await = Some(recipes.to_vec());
        Ok(())
    }

    async fn is_initialized(&self) -> Result<bool, StorageError> {
        Ok(self.recipes.read().await.is_some())
    }
}
