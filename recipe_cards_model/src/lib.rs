pub mod page;
pub mod repository;
pub mod storage;

pub use page::{CardContainer, RecipePage};
pub use repository::{RecipeRepository, RepositoryError, RECIPES_KEY};
pub use storage::{KeyValueStorage, MemoryStorage, StorageError};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const NAME: &str = "name";
pub const IMAGE_SRC: &str = "image_src";
pub const IMAGE_ALT: &str = "image_alt";
pub const LINK: &str = "link";
pub const ORGANIZATION: &str = "organization";
pub const RATING: &str = "rating";
pub const NUM_RATINGS: &str = "num_ratings";
pub const LENGTH_TIME: &str = "length_time";
pub const INGREDIENTS: &str = "ingredients";
pub const DIRECTIONS: &str = "directions";

/// Field names the form emits and the card knows how to lay out.
pub const KNOWN_FIELDS: [&str; 10] = [
    NAME,
    IMAGE_SRC,
    IMAGE_ALT,
    LINK,
    ORGANIZATION,
    RATING,
    NUM_RATINGS,
    LENGTH_TIME,
    INGREDIENTS,
    DIRECTIONS,
];

/// A single user-entered recipe.
///
/// There is no fixed schema: whatever field names the form submits become
/// keys. Serialized as a flat JSON object of string values, fields in the
/// order they were first submitted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct Recipe {
    fields: IndexMap<String, String>,
}

impl Recipe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a recipe from `(name, value)` pairs. When a name repeats, the
    /// last value wins and the field keeps its first position.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut recipe = Self::new();
        for (key, value) in entries {
            recipe.insert(key, value);
        }
        recipe
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.fields.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Like [`Recipe::get`] but treats blank values as missing.
    pub fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).map(str::trim).filter(|value| !value.is_empty())
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Recipe {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self::from_entries(iter)
    }
}
