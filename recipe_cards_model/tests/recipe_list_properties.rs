use std::cell::RefCell;

use proptest::prelude::*;
use recipe_cards_model::{MemoryStorage, Recipe, RecipePage, RecipeRepository};

fn recipe_strategy() -> impl Strategy<Value = Recipe> {
    proptest::collection::vec(("[a-z_]{1,12}", "\\PC{0,24}"), 0..6)
        .prop_map(|entries: Vec<(String, String)>| Recipe::from_entries(entries))
}

fn recipes_strategy() -> impl Strategy<Value = Vec<Recipe>> {
    proptest::collection::vec(recipe_strategy(), 0..12)
}

proptest! {
    #[test]
    fn prop_save_then_load_is_identity(recipes in recipes_strategy()) {
        let repository = RecipeRepository::new(MemoryStorage::new());
        repository.save(&recipes).unwrap();
        let loaded = repository.load();
        for (loaded, saved) in loaded.iter().zip(&recipes) {
            prop_assert!(loaded.fields().eq(saved.fields()));
        }
        prop_assert_eq!(loaded, recipes);
    }

    #[test]
    fn prop_render_all_shows_every_recipe_in_order(recipes in recipes_strategy()) {
        let page = RecipePage::new(RecipeRepository::new(MemoryStorage::new()), RefCell::new(vec![]));
        page.render_all(&recipes);
        prop_assert_eq!(page.container().borrow().clone(), recipes);
    }

    #[test]
    fn prop_submissions_only_ever_append(
        stored in recipes_strategy(),
        submitted in recipes_strategy(),
    ) {
        let storage = MemoryStorage::new();
        RecipeRepository::new(&storage).save(&stored).unwrap();
        let page = RecipePage::new(RecipeRepository::new(&storage), RefCell::new(vec![]));
        page.init();

        for (count, recipe) in submitted.iter().enumerate() {
            let before = page.repository().load().len();
            let entries = recipe.fields().map(|(key, value)| (key.to_string(), value.to_string()));
            prop_assert_eq!(&page.submit(entries).unwrap(), recipe);
            prop_assert_eq!(page.repository().load().len(), before + 1);
            prop_assert_eq!(page.container().borrow().len(), stored.len() + count + 1);
        }

        let expected: Vec<Recipe> = stored.iter().chain(submitted.iter()).cloned().collect();
        prop_assert_eq!(page.repository().load(), expected.clone());
        prop_assert_eq!(page.container().borrow().clone(), expected);
    }

    #[test]
    fn prop_clear_always_empties(stored in recipes_strategy()) {
        let storage = MemoryStorage::new();
        RecipeRepository::new(&storage).save(&stored).unwrap();
        let page = RecipePage::new(RecipeRepository::new(&storage), RefCell::new(vec![]));
        page.init();

        page.clear().unwrap();
        prop_assert!(page.repository().try_load().unwrap().is_empty());
        prop_assert!(page.container().borrow().is_empty());
    }
}
