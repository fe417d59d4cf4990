use leptos::*;
use log::{info, warn};
use recipe_cards_frontend::app::App;
use recipe_cards_frontend::config::AppConfig;

fn main() {
    let config = AppConfig::load();
    let level = config
        .as_ref()
        .map(|config| config.log_level)
        .unwrap_or(AppConfig::default().log_level);
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();

    let config = config.unwrap_or_else(|err| {
        warn!("Falling back to default config: {err}");
        AppConfig::default()
    });
    info!("Starting with {config:?}");
    mount_to_body(move || {
        view! {
            <App config />
        }
    })
}
