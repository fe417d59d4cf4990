use std::cell::RefCell;

use log::debug;

use crate::repository::{RecipeRepository, RepositoryError};
use crate::storage::KeyValueStorage;
use crate::Recipe;

/// Where recipe cards are shown.
pub trait CardContainer {
    /// Adds one card after the existing ones.
    fn append(&self, recipe: Recipe);
    /// Removes every card.
    fn clear(&self);
}

impl CardContainer for RefCell<Vec<Recipe>> {
    fn append(&self, recipe: Recipe) {
        self.borrow_mut().push(recipe);
    }

    fn clear(&self) {
        self.borrow_mut().clear();
    }
}

/// Ties the stored recipe list to the cards on screen.
///
/// Every handler re-reads storage instead of caching the list, so the page
/// never holds state of its own beyond the two collaborators.
#[derive(Debug, Clone)]
pub struct RecipePage<S, C> {
    repository: RecipeRepository<S>,
    container: C,
}

impl<S: KeyValueStorage, C: CardContainer> RecipePage<S, C> {
    pub fn new(repository: RecipeRepository<S>, container: C) -> Self {
        Self {
            repository,
            container,
        }
    }

    pub fn repository(&self) -> &RecipeRepository<S> {
        &self.repository
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    /// Page load: render everything in storage. Returns what was loaded.
    pub fn init(&self) -> Vec<Recipe> {
        let recipes = self.repository.load();
        self.render_all(&recipes);
        recipes
    }

    pub fn render_all(&self, recipes: &[Recipe]) {
        for recipe in recipes {
            self.render_one(recipe.clone());
        }
    }

    pub fn render_one(&self, recipe: Recipe) {
        self.container.append(recipe);
    }

    /// Form submission. The card is shown before the list is saved, so it
    /// stays on screen even when the write fails.
    pub fn submit<I, K, V>(&self, entries: I) -> Result<Recipe, RepositoryError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let recipe = Recipe::from_entries(entries);
        self.render_one(recipe.clone());

        let mut recipes = self.repository.load();
        recipes.push(recipe.clone());
        self.repository.save(&recipes)?;
        debug!("Saved recipe, {} stored", recipes.len());
        Ok(recipe)
    }

    /// Clear-all. Cards are only removed once storage has been emptied.
    pub fn clear(&self) -> Result<(), RepositoryError> {
        self.repository.clear()?;
        self.container.clear();
        debug!("Cleared stored recipes under {}", self.repository.key());
        Ok(())
    }
}
