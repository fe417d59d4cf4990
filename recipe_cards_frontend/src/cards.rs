use leptos::*;
use recipe_cards_model::{CardContainer, Recipe};

use crate::recipe_card::RecipeCard;

pub type IndexedRecipe = (usize, Recipe);

/// Reactive list backing the `<main>` card container.
///
/// Keys only ever grow, so a card appended after a clear never reuses the
/// key of a removed one.
#[derive(Clone, Copy)]
pub struct CardSignals {
    cards: RwSignal<Vec<IndexedRecipe>>,
    next_key: StoredValue<usize>,
}

impl CardSignals {
    pub fn new() -> Self {
        Self {
            cards: create_rw_signal(vec![]),
            next_key: store_value(0),
        }
    }

    pub fn cards(&self) -> ReadSignal<Vec<IndexedRecipe>> {
        self.cards.read_only()
    }
}

impl Default for CardSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl CardContainer for CardSignals {
    fn append(&self, recipe: Recipe) {
        let key = self.next_key.get_value();
        self.next_key.set_value(key + 1);
        self.cards.update(|cards| cards.push((key, recipe)));
    }

    fn clear(&self) {
        self.cards.update(Vec::clear);
    }
}

#[component]
pub fn RecipeCards(cards: CardSignals) -> impl IntoView {
    let cards = cards.cards();
    view! {
        <main class = "grid md:grid-cols-2 gap-4 lg:grid-cols-3 sm:grid-cols-1">
            <For
                each = move || cards.get()
                key = |(key, _)| *key
                children = move |(_, recipe)| {
                    view! {
                        <RecipeCard recipe />
                    }
                }
            />
        </main>
    }
}
