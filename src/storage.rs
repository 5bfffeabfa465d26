//! Joke Persistence
//!
//! The joke list lives in localStorage as one JSON array under a fixed key.
//! Reads never fail: anything missing or unreadable is an empty list.

use crate::error::StorageError;
use crate::jokes::dedup_by_id;
use crate::models::Joke;

/// Raw key-value slot holding the serialized list
pub trait JokeStorage {
    fn read(&self) -> Option<String>;
    fn write(&self, raw: &str) -> Result<(), StorageError>;
}

/// `window.localStorage` under one key
#[derive(Clone, Debug)]
pub struct BrowserStorage {
    key: String,
}

impl BrowserStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl JokeStorage for BrowserStorage {
    fn read(&self) -> Option<String> {
        Self::local_storage()?.get_item(&self.key).ok().flatten()
    }

    fn write(&self, raw: &str) -> Result<(), StorageError> {
        let storage = Self::local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(&self.key, raw)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

/// Load the persisted list, falling back to empty
pub fn load_jokes(storage: &impl JokeStorage) -> Vec<Joke> {
    let Some(raw) = storage.read() else {
        return Vec::new();
    };
    match serde_json::from_str::<Option<Vec<Joke>>>(&raw) {
        Ok(jokes) => dedup_by_id(jokes.unwrap_or_default()),
        Err(e) => {
            log::warn!("[STORAGE] ignoring unreadable joke list: {}", e);
            Vec::new()
        }
    }
}

/// Overwrite the persisted list
pub fn save_jokes(storage: &impl JokeStorage, jokes: &[Joke]) -> Result<(), StorageError> {
    let raw = serde_json::to_string(jokes).map_err(|e| StorageError::Encode(e.to_string()))?;
    storage.write(&raw)
}
