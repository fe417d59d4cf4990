pub mod app;
pub mod cards;
pub mod config;
pub mod form;
pub mod local_storage;
pub mod recipe_card;
pub mod util;

use recipe_cards_model::RecipePage;

use cards::CardSignals;
use local_storage::LocalStorage;

/// The page controller as wired in the browser.
pub type BrowserPage = RecipePage<LocalStorage, CardSignals>;
