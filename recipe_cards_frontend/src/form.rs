use leptos::*;
use log::{debug, warn};
use recipe_cards_model::{
    Recipe, DIRECTIONS, IMAGE_ALT, IMAGE_SRC, INGREDIENTS, LENGTH_TIME, LINK, NAME, NUM_RATINGS,
    ORGANIZATION, RATING,
};
use wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlFormElement, SubmitEvent};

use crate::recipe_card::MAX_RATING;
use crate::util::FrontErr;
use crate::BrowserPage;

/// Named text entries of `form`, in document order. File entries are
/// skipped.
pub fn form_entries(form: &HtmlFormElement) -> Result<Vec<(String, String)>, FrontErr> {
    let form_data = FormData::new_with_form(form)?;
    let entries = js_sys::try_iter(&form_data)?
        .ok_or_else(|| FrontErr::Message("FormData is not iterable".into()))?;

    let mut fields = vec![];
    for entry in entries {
        let entry: js_sys::Array = entry?.unchecked_into();
        let name = entry
            .get(0)
            .as_string()
            .ok_or_else(|| FrontErr::Message("Form entry without a name".into()))?;
        match entry.get(1).as_string() {
            Some(value) => fields.push((name, value)),
            None => debug!("Skipping non-text form entry {name}"),
        }
    }
    Ok(fields)
}

fn submitted_form(ev: &SubmitEvent) -> Result<HtmlFormElement, FrontErr> {
    ev.target()
        .ok_or_else(|| FrontErr::Message("Failed to get event target for submit event".into()))?
        .dyn_into::<HtmlFormElement>()
        .map_err(|err| {
            FrontErr::Message(format!(
                "Failed to convert submit event target to form element: {err:?}"
            ))
        })
}

fn add_recipe(page: &BrowserPage, form: &HtmlFormElement) -> Result<Recipe, FrontErr> {
    let entries = form_entries(form)?;
    Ok(page.submit(entries)?)
}

#[component]
fn TextField(name: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <label class = "label" for = name>
            <span class = "label-text">{label}</span>
        </label>
        <input class = "input input-bordered input-primary input-sm bg-base-300 w-full" type = "text" id = name name = name />
    }
}

#[component]
fn RatingField() -> impl IntoView {
    view! {
        <fieldset class = "join">
            <legend class = "label-text">Rating</legend>
            {(0..=MAX_RATING)
                .map(|rating| {
                    let id = format!("rating-{rating}");
                    view! {
                        <label class = "label cursor-pointer gap-1" for = id.clone()>
                            <input class = "radio radio-primary radio-xs" type = "radio" id = id name = RATING value = rating.to_string() />
                            <span class = "label-text">{rating}</span>
                        </label>
                    }
                })
                .collect_view()}
        </fieldset>
    }
}

/// The "add recipe" form and the clear-storage button.
#[component]
pub fn RecipeForm(page: BrowserPage) -> impl IntoView {
    let submit_page = page.clone();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = match submitted_form(&ev) {
            Ok(form) => form,
            Err(err) => {
                warn!("{err}");
                return;
            }
        };
        match add_recipe(&submit_page, &form) {
            Ok(recipe) => {
                debug!("Added recipe {:?}", recipe.get(NAME));
                form.reset();
            }
            Err(err) => warn!("Failed to add recipe: {err}"),
        }
    };

    let clear_page = page;
    let on_clear = move |_: ev::MouseEvent| {
        if let Err(err) = clear_page.clear() {
            warn!("Failed to clear recipes: {err}");
        }
    };

    view! {
        <div class = "card w-full bg-base-100 border border-base-content shadow-md shadow-base-300">
            <div class = "card-body">
                <form class = "form-control gap-1" on:submit = on_submit>
                    <TextField name = NAME label = "Title" />
                    <TextField name = LINK label = "Link" />
                    <TextField name = IMAGE_SRC label = "Image source" />
                    <TextField name = IMAGE_ALT label = "Image description" />
                    <TextField name = ORGANIZATION label = "Organization" />
                    <RatingField />
                    <TextField name = NUM_RATINGS label = "Number of ratings" />
                    <TextField name = LENGTH_TIME label = "Total time" />
                    <label class = "label" for = INGREDIENTS>
                        <span class = "label-text">Ingredients</span>
                    </label>
                    <textarea class = "textarea textarea-bordered textarea-primary bg-base-300 w-full" id = INGREDIENTS name = INGREDIENTS />
                    <label class = "label" for = DIRECTIONS>
                        <span class = "label-text">Directions</span>
                    </label>
                    <textarea class = "textarea textarea-bordered textarea-primary bg-base-300 w-full h-32" id = DIRECTIONS name = DIRECTIONS />
                    <button class = "btn btn-primary btn-sm mt-2" type = "submit">Add recipe</button>
                </form>
                <button class = "btn btn-error btn-sm" type = "button" on:click = on_clear>
                    Clear local storage
                </button>
            </div>
        </div>
    }
}
