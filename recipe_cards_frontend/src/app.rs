use leptos::*;
use log::{error, info};
use recipe_cards_model::{RecipePage, RecipeRepository};

use crate::cards::{CardSignals, RecipeCards};
use crate::config::AppConfig;
use crate::form::RecipeForm;
use crate::local_storage::LocalStorage;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let cards = CardSignals::new();
    let body = match LocalStorage::from_window() {
        Ok(storage) => {
            let repository = RecipeRepository::with_key(storage, config.storage_key);
            let page = RecipePage::new(repository, cards);
            let recipes = page.init();
            info!("Loaded {} recipes", recipes.len());
            view! {
                <RecipeForm page />
                <RecipeCards cards />
            }
            .into_view()
        }
        Err(err) => {
            error!("Cannot use local storage: {err}");
            view! { <StorageUnavailable message = err.to_string() /> }.into_view()
        }
    };

    view! {
        <div class = "bg-base-100 w-full h-screen overflow-auto md:overflow-x-hidden">
            <TopBar />
            <div class = "grid grid-cols-1 gap-4 ml-5 mr-5 mt-3">
                {body}
            </div>
        </div>
    }
}

#[component]
fn TopBar() -> impl IntoView {
    view! {
        <div class = "h-24 flex border border-b-1 border-base-content shadow-md shadow-base-300 z-50">
            <div class = "h-24 flex-1 pt-5 pl-5">
                <span class = "prose"><h1>Recipe Cards</h1></span>
            </div>
        </div>
    }
}

#[component]
fn StorageUnavailable(message: String) -> impl IntoView {
    view! {
        <div class = "alert alert-error">
            <span>"Recipes can't be saved in this browser: "{message}</span>
        </div>
    }
}
