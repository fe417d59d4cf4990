use leptos::*;
use recipe_cards_model::{
    Recipe, DIRECTIONS, IMAGE_ALT, IMAGE_SRC, INGREDIENTS, KNOWN_FIELDS, LENGTH_TIME, LINK, NAME,
    NUM_RATINGS, ORGANIZATION, RATING,
};

use crate::util::markdown_to_html;

pub const MAX_RATING: u8 = 5;
const UNTITLED: &str = "Untitled recipe";

/// Whole stars out of [`MAX_RATING`], rounding to the nearest star.
pub fn star_count(rating: &str) -> Option<u8> {
    let rating = rating.trim().parse::<f64>().ok()?;
    if !rating.is_finite() {
        return None;
    }
    Some(rating.round().clamp(0.0, MAX_RATING as f64) as u8)
}

pub fn stars(count: u8) -> String {
    let filled = count.min(MAX_RATING) as usize;
    let empty = MAX_RATING as usize - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

pub fn rating_label(recipe: &Recipe) -> String {
    match recipe.non_empty(RATING).and_then(star_count) {
        Some(count) => match recipe.non_empty(NUM_RATINGS) {
            Some(num_ratings) => format!("{} ({num_ratings})", stars(count)),
            None => stars(count),
        },
        None => "No reviews".to_string(),
    }
}

/// Splits the free-text ingredient field into list items.
pub fn ingredient_items(ingredients: &str) -> Vec<String> {
    ingredients
        .split(['\n', ','])
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Non-empty fields the card has no dedicated slot for, in form order.
pub fn extra_fields(recipe: &Recipe) -> Vec<(String, String)> {
    recipe
        .fields()
        .filter(|(key, _)| !KNOWN_FIELDS.contains(key))
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

#[component]
pub fn RecipeCard(recipe: Recipe) -> impl IntoView {
    let title = recipe.non_empty(NAME).unwrap_or(UNTITLED).to_string();
    let title = match recipe.non_empty(LINK) {
        Some(link) => view! { <a class = "link link-hover" href = {link.to_string()}>{title}</a> }
            .into_view(),
        None => title.into_view(),
    };

    let image = recipe.non_empty(IMAGE_SRC).map(|src| {
        let alt = recipe.get(IMAGE_ALT).unwrap_or_default().to_string();
        view! {
            <figure class = "max-h-48 overflow-hidden">
                <img src = {src.to_string()} alt = alt />
            </figure>
        }
    });

    let organization = recipe
        .non_empty(ORGANIZATION)
        .map(|organization| view! { <p class = "text-sm opacity-70">{organization.to_string()}</p> });

    let length_time = recipe
        .non_empty(LENGTH_TIME)
        .map(|time| view! { <time class = "text-sm">{time.to_string()}</time> });

    let ingredients = recipe
        .get(INGREDIENTS)
        .map(ingredient_items)
        .filter(|items| !items.is_empty())
        .map(|items| {
            view! {
                <ul class = "list-disc list-inside">
                    {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
                </ul>
            }
        });

    let directions = recipe.non_empty(DIRECTIONS).map(|directions| {
        view! { <div class = "prose-xs" inner_html = markdown_to_html(directions) /> }
    });

    let extras = extra_fields(&recipe);
    let extras = (!extras.is_empty()).then(move || {
        view! {
            <dl class = "text-xs">
                {extras
                    .into_iter()
                    .map(|(key, value)| view! { <dt class = "font-bold">{key}</dt><dd>{value}</dd> })
                    .collect_view()}
            </dl>
        }
    });

    view! {
        <article class = "card prose-xs bg-base-100 border border-base-content shadow-md shadow-base-300">
            {image}
            <div class = "card-body">
                <h2 class = "card-title">{title}</h2>
                {organization}
                <p class = "text-sm">{rating_label(&recipe)}</p>
                {length_time}
                {ingredients}
                {directions}
                {extras}
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_rounds_and_clamps() {
        assert_eq!(star_count("4"), Some(4));
        assert_eq!(star_count(" 3.6 "), Some(4));
        assert_eq!(star_count("9"), Some(5));
        assert_eq!(star_count("-1"), Some(0));
        assert_eq!(star_count("NaN"), None);
        assert_eq!(star_count("great"), None);
    }

    #[test]
    fn rating_label_includes_review_count() {
        let recipe = Recipe::from_entries([(RATING, "3"), (NUM_RATINGS, "120")]);
        assert_eq!(rating_label(&recipe), "★★★☆☆ (120)");
        let recipe = Recipe::from_entries([(RATING, "5")]);
        assert_eq!(rating_label(&recipe), "★★★★★");
    }

    #[test]
    fn missing_rating_means_no_reviews() {
        assert_eq!(rating_label(&Recipe::new()), "No reviews");
        let recipe = Recipe::from_entries([(RATING, ""), (NUM_RATINGS, "4")]);
        assert_eq!(rating_label(&recipe), "No reviews");
    }

    #[test]
    fn ingredients_split_on_lines_and_commas() {
        assert_eq!(
            ingredient_items("2 eggs, 1 cup flour\n\n salt ,"),
            vec!["2 eggs", "1 cup flour", "salt"]
        );
        assert!(ingredient_items(" \n ").is_empty());
    }

    #[test]
    fn extra_fields_skip_known_and_blank() {
        let recipe = Recipe::from_entries([
            (NAME, "Soup"),
            ("servings", "4"),
            ("notes", " "),
            ("cuisine", "Thai"),
        ]);
        assert_eq!(
            extra_fields(&recipe),
            vec![
                ("servings".to_string(), "4".to_string()),
                ("cuisine".to_string(), "Thai".to_string())
            ]
        );
    }
}
