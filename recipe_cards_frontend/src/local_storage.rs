use recipe_cards_model::{KeyValueStorage, StorageError};

use crate::util::js_error_message;

/// The page's `window.localStorage`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    pub fn from_window() -> Result<Self, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window in this context".into()))?;
        let storage = window
            .local_storage()
            .map_err(|err| StorageError::Unavailable(js_error_message(&err)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".into()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(|err| StorageError::Read {
            key: key.to_string(),
            cause: js_error_message(&err),
        })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|err| StorageError::Write {
                key: key.to_string(),
                cause: js_error_message(&err),
            })
    }
}
