use log::warn;

use crate::storage::{KeyValueStorage, StorageError};
use crate::Recipe;

/// Storage key holding the JSON-encoded recipe list.
pub const RECIPES_KEY: &str = "recipes";

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Failed to access recipe storage: {0}")]
    Storage(#[from] StorageError),
    #[error("Failed to do some JSON: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Reads and writes the whole recipe list under a single storage key.
#[derive(Debug, Clone)]
pub struct RecipeRepository<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> RecipeRepository<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, RECIPES_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Decodes the stored list. A missing key or a stored `null` is an empty
    /// list; anything else that is not a list of recipes is an error.
    pub fn try_load(&self) -> Result<Vec<Recipe>, RepositoryError> {
        let Some(stored) = self.storage.get_item(&self.key)? else {
            return Ok(vec![]);
        };
        let recipes = serde_json::from_str::<Option<Vec<Recipe>>>(&stored)?;
        Ok(recipes.unwrap_or_default())
    }

    /// Same as [`RecipeRepository::try_load`], but unreadable data loads as
    /// an empty list.
    pub fn load(&self) -> Vec<Recipe> {
        self.try_load().unwrap_or_else(|err| {
            warn!("Treating stored recipes under {} as empty: {err}", self.key);
            vec![]
        })
    }

    /// Replaces the stored list with `recipes`.
    pub fn save(&self, recipes: &[Recipe]) -> Result<(), RepositoryError> {
        let encoded = serde_json::to_string(recipes)?;
        self.storage.set_item(&self.key, &encoded)?;
        Ok(())
    }

    pub fn clear(&self) -> Result<(), RepositoryError> {
        self.save(&[])
    }
}
