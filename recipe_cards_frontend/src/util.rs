use pulldown_cmark::{html, Event, Options, Parser};
use recipe_cards_model::RepositoryError;
use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum FrontErr {
    #[error("{0}")]
    Message(String),
    #[error("JS error: {0}")]
    Js(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl From<JsValue> for FrontErr {
    fn from(value: JsValue) -> Self {
        FrontErr::Js(js_error_message(&value))
    }
}

/// Best-effort text for a thrown JS value.
pub fn js_error_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Renders Markdown to HTML. Raw HTML in the source is escaped as text,
/// since recipes come straight out of editable storage.
pub fn markdown_to_html(markdown_str: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(markdown_str, options).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        event => event,
    });

    // Write to String buffer.
    let mut html_output: String = String::with_capacity(markdown_str.len() * 2);
    html::push_html(&mut html_output, parser);
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_numbered_steps() {
        let html = markdown_to_html("1. Boil water\n2. Add salt");
        assert!(html.starts_with("<ol>"));
        assert!(html.contains("<li>Boil water</li>"));
    }

    #[test]
    fn strikethrough_is_enabled() {
        assert_eq!(markdown_to_html("~~salt~~"), "<p><del>salt</del></p>\n");
    }

    #[test]
    fn raw_html_block_is_escaped() {
        let html = markdown_to_html("<img src=x onerror=alert(1)>");
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"), "{html}");
        assert!(!html.contains("<img"), "{html}");
    }

    #[test]
    fn inline_html_is_escaped() {
        let html = markdown_to_html("Boil <b onclick=alert(1)>water</b>");
        assert!(html.starts_with("<p>Boil &lt;b"), "{html}");
        assert!(!html.contains("<b"), "{html}");
    }
}
