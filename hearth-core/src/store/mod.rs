//! Recipe persistence.
//!
//! `RecipeRepository` is the CRUD façade used by the server. It owns no data
//! itself: every operation goes through a `RecipeStorage` handle, so tests and
//! deployments can swap the backing store.

mod file;
mod memory;

pub use file::JsonFileStorage;
pub use memory::MemoryStorage;

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::{RecipeError, StorageError};
use crate::seed::mock_recipes;
use crate::types::{NewRecipe, Recipe, RecipePatch};

/// Name of the single recipe collection.
pub const RECIPES_COLLECTION: &str = "recipes";

/// A backing store holding one ordered collection of recipes.
#[async_trait]
pub trait RecipeStorage: Send + Sync {
    /// Read the whole collection. A store that was never written reads as empty.
    async fn load(&self) -> Result<Vec<Recipe>, StorageError>;

    /// Replace the whole collection. Must not leave a partially written collection behind.
    async fn save(&self, recipes: &[Recipe]) -> Result<(), StorageError>;

    /// Whether the collection has ever been written.
    async fn is_initialized(&self) -> Result<bool, StorageError>;
}

/// CRUD façade over a `RecipeStorage`.
///
/// Mutations are load-modify-save. They are serialized within this process;
/// separate processes sharing a store race with last-write-wins.
pub struct RecipeRepository {
    storage: Arc<dyn RecipeStorage>,
    write_lock: Mutex<()>,
}

impl RecipeRepository {
    pub fn new(storage: Arc<dyn RecipeStorage>) -> Self {
        Self {
            storage,
            write_lock: Mutex::new(()),
        }
    }

    /// All recipes, in insertion order.
    pub async fn get_all(&self) -> Result<Vec<Recipe>, RecipeError> {
        Ok(self.storage.load().await?)
    }

    pub async fn get(&self, id: &str) -> Result<Recipe, RecipeError> {
        self.storage
            .load()
            .await?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| RecipeError::NotFound(id.to_string()))
    }

    /// Validate and append a new recipe, assigning `id`, `createdAt` and `updatedAt`.
    pub async fn create(&self, input: NewRecipe) -> Result<Recipe, RecipeError> {
        // Validate before touching the store.
        let mut recipe = input.into_recipe(Uuid::new_v4().to_string(), Utc::now())?;

        let _guard = self.write_lock.lock().await;
        let mut recipes = self.storage.load().await?;
        while recipes.iter().any(|r| r.id == recipe.id) {
            recipe.id = Uuid::new_v4().to_string();
        }

        recipes.push(recipe.clone());
        self.storage.save(&recipes).await?;

        tracing::info!(recipe_id = %recipe.id, name = recipe.display_name(), "Created recipe");
        Ok(recipe)
    }

    pub async fn update(&self, id: &str, patch: RecipePatch) -> Result<Recipe, RecipeError> {
        let _guard = self.write_lock.lock().await;
        let mut recipes = self.storage.load().await?;

        let recipe = recipes
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| RecipeError::NotFound(id.to_string()))?;
        patch.apply(recipe, Utc::now())?;
        let updated = recipe.clone();

        self.storage.save(&recipes).await?;

        tracing::info!(recipe_id = %id, "Updated recipe");
        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> Result<(), RecipeError> {
        let _guard = self.write_lock.lock().await;
        let mut recipes = self.storage.load().await?;

        let before = recipes.len();
        recipes.retain(|r| r.id != id);
        if recipes.len() == before {
            return Err(RecipeError::NotFound(id.to_string()));
        }

        self.storage.save(&recipes).await?;

        tracing::info!(recipe_id = %id, "Deleted recipe");
        Ok(())
    }

    /// Replace the whole collection with the built-in seed set. Returns the number of recipes.
    pub async fn reset_to_mock_data(&self) -> Result<usize, RecipeError> {
        let _guard = self.write_lock.lock().await;
        let seed = mock_recipes();
        self.storage.save(&seed).await?;

        tracing::info!(count = seed.len(), "Reset recipes to mock data");
        Ok(seed.len())
    }

    /// Install the seed set if the store has never been written. Returns true if it did.
    pub async fn seed_if_uninitialized(&self) -> Result<bool, RecipeError> {
        if self.storage.is_initialized().await? {
            return Ok(false);
        }
        self.reset_to_mock_data().await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Difficulty;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn repo() -> (Arc<MemoryStorage>, RecipeRepository) {
        let storage = Arc::new(MemoryStorage::new());
        let repo = RecipeRepository::new(storage.clone());
        (storage, repo)
    }

    fn named(name: &str) -> NewRecipe {
        NewRecipe {
            dish_name: Some(name.to_string()),
            ..Default::default()
        }
    }

    /// Wraps a MemoryStorage and fails every save while `fail_saves` is set.
    struct FlakyStorage {
        inner: MemoryStorage,
        fail_saves: AtomicBool,
    }

    #[async_trait]
    impl RecipeStorage for FlakyStorage {
        async fn load(&self) -> Result<Vec<Recipe>, StorageError> {
            self.inner.load().await
        }

        async fn save(&self, recipes: &[Recipe]) -> Result<(), StorageError> {
            if self.fail_saves.load(Ordering::SeqCst) {
                return Err(StorageError::Unavailable("disk full".to_string()));
            }
            self.inner.save(recipes).await
        }

        async fn is_initialized(&self) -> Result<bool, StorageError> {
            self.inner.is_initialized().await
        }
    }

    #[tokio::test]
    async fn test_get_all_empty_store() {
        let (_, repo) = repo();
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_assigns_unique_ids() {
        let (_, repo) = repo();
        let a = repo.create(named("Kimchi stew")).await.unwrap();
        let b = repo.create(named("Kimchi stew")).await.unwrap();

        assert_ne!(a.id, b.id);
        assert!(!a.id.is_empty());
        assert_eq!(a.created_at, a.updated_at);
        assert_eq!(repo.get_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_create_then_get_all_returns_record_unchanged() {
        let (_, repo) = repo();
        let input = NewRecipe {
            dish_name: Some("Japchae".to_string()),
            difficulty: Some(Difficulty::Medium),
            emotion_tags: vec!["festive".to_string()],
            ..Default::default()
        };
        let created = repo.create(input).await.unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all, vec![created.clone()]);
        assert_eq!(created.difficulty, Some(Difficulty::Medium));
        assert_eq!(created.emotion_tags, vec!["festive".to_string()]);
    }

    #[tokio::test]
    async fn test_create_without_names_fails_and_leaves_store_untouched() {
        let (storage, repo) = repo();
        repo.create(named("Existing")).await.unwrap();

        let result = repo.create(NewRecipe::default()).await;
        assert!(matches!(result, Err(RecipeError::Validation(_))));

        let all = storage.load().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].display_name(), "Existing");
    }

    #[tokio::test]
    async fn test_reset_returns_exact_seed_set() {
        let (_, repo) = repo();
        repo.create(named("Will be wiped")).await.unwrap();

        let count = repo.reset_to_mock_data().await.unwrap();
        let all = repo.get_all().await.unwrap();

        assert_eq!(count, all.len());
        assert_eq!(all, mock_recipes());

        // Idempotent.
        repo.reset_to_mock_data().await.unwrap();
        assert_eq!(repo.get_all().await.unwrap(), mock_recipes());
    }

    #[tokio::test]
    async fn test_update_sets_updated_at_and_keeps_created_at() {
        let (_, repo) = repo();
        let created = repo.create(named("Tteokbokki")).await.unwrap();

        let updated = repo
            .update(
                &created.id,
                RecipePatch {
                    story: Some("After school snack".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(updated.story.as_deref(), Some("After school snack"));
        assert_eq!(repo.get(&created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_and_delete_unknown_id() {
        let (_, repo) = repo();
        let update = repo.update("missing", RecipePatch::default()).await;
        assert!(matches!(update, Err(RecipeError::NotFound(_))));

        let delete = repo.delete("missing").await;
        assert!(matches!(delete, Err(RecipeError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_removes_only_target() {
        let (_, repo) = repo();
        let a = repo.create(named("A")).await.unwrap();
        let b = repo.create(named("B")).await.unwrap();

        repo.delete(&a.id).await.unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all, vec![b]);
    }

    #[tokio::test]
    async fn test_failed_write_keeps_prior_collection() {
        let storage = Arc::new(FlakyStorage {
            inner: MemoryStorage::new(),
            fail_saves: AtomicBool::new(false),
        });
        let repo = RecipeRepository::new(storage.clone());
        let kept = repo.create(named("Kept")).await.unwrap();

        storage.fail_saves.store(true, Ordering::SeqCst);
        let result = repo.create(named("Lost")).await;
        assert!(matches!(result, Err(RecipeError::Storage(_))));
        let result = repo.reset_to_mock_data().await;
        assert!(matches!(result, Err(RecipeError::Storage(_))));

        assert_eq!(repo.get_all().await.unwrap(), vec![kept]);
    }

    #[tokio::test]
    async fn test_seed_if_uninitialized_only_seeds_once() {
        let (_, repo) = repo();
        assert!(repo.seed_if_uninitialized().await.unwrap());

        let created = repo.create(named("Mine")).await.unwrap();
        assert!(!repo.seed_if_uninitialized().await.unwrap());
        assert!(repo.get_all().await.unwrap().contains(&created));
    }

    #[tokio::test]
    async fn test_seed_skipped_for_explicitly_emptied_store() {
        let (storage, repo) = repo();
        storage.save(&[]).await.unwrap();
        assert!(!repo.seed_if_uninitialized().await.unwrap());
        assert!(repo.get_all().await.unwrap().is_empty());
    }
}
