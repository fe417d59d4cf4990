use std::str::FromStr;

use log::Level;
use recipe_cards_model::RECIPES_KEY;

use crate::util::js_error_message;

pub const STORAGE_KEY_PARAM: &str = "storage_key";
pub const LOG_LEVEL_PARAM: &str = "log_level";

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to parse page url: {0}")]
    Url(#[from] url::ParseError),
    #[error("Invalid log level provided: {0}")]
    LogLevel(String),
    #[error("Failed to read page location: {0}")]
    Location(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub storage_key: String,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: RECIPES_KEY.to_string(),
            log_level: Level::Debug,
        }
    }
}

impl AppConfig {
    /// Defaults, overridden by `storage_key` and `log_level` query
    /// parameters of the current page.
    pub fn load() -> Result<Self, ConfigError> {
        let window = web_sys::window()
            .ok_or_else(|| ConfigError::Location("no window in this context".into()))?;
        let href = window
            .location()
            .href()
            .map_err(|err| ConfigError::Location(js_error_message(&err)))?;
        Self::from_url(&href)
    }

    pub fn from_url(href: &str) -> Result<Self, ConfigError> {
        let url = url::Url::parse(href)?;
        let mut config = Self::default();
        for (name, value) in url.query_pairs() {
            match name.as_ref() {
                STORAGE_KEY_PARAM if !value.trim().is_empty() => {
                    config.storage_key = value.trim().to_string();
                }
                LOG_LEVEL_PARAM => {
                    config.log_level = Level::from_str(&value)
                        .map_err(|_| ConfigError::LogLevel(value.to_string()))?;
                }
                _ => {}
            }
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_url_gives_defaults() {
        let config = AppConfig::from_url("http://localhost:8080/").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.storage_key, "recipes");
    }

    #[test]
    fn query_overrides_defaults() {
        let config =
            AppConfig::from_url("http://localhost:8080/?storage_key=lab-recipes&log_level=warn")
                .unwrap();
        assert_eq!(config.storage_key, "lab-recipes");
        assert_eq!(config.log_level, Level::Warn);
    }

    #[test]
    fn blank_storage_key_is_ignored() {
        let config = AppConfig::from_url("http://localhost/?storage_key=%20&utm_source=x").unwrap();
        assert_eq!(config.storage_key, RECIPES_KEY);
    }

    #[test]
    fn unknown_log_level_is_an_error() {
        let err = AppConfig::from_url("http://localhost/?log_level=loud").unwrap_err();
        assert_eq!(err, ConfigError::LogLevel("loud".into()));
    }

    #[test]
    fn relative_url_is_an_error() {
        assert!(matches!(
            AppConfig::from_url("/index.html"),
            Err(ConfigError::Url(_))
        ));
    }
}
