use crate::error::TokenStoreError;
use crate::token_store::KeyValueStore;

use common::ErrorLocation;

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[track_caller]
    fn with_entries<T>(
        &self,
        f: impl FnOnce(&mut HashMap<String, String>) -> T,
    ) -> Result<T, TokenStoreError> {
        let mut entries = self.entries.lock().map_err(|_| TokenStoreError::Poisoned {
            location: ErrorLocation::from(Location::caller()),
        })?;
        Ok(f(&mut entries))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, TokenStoreError> {
        self.with_entries(|entries| entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), TokenStoreError> {
        self.with_entries(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<(), TokenStoreError> {
        self.with_entries(|entries| {
            entries.remove(key);
        })
    }
}
