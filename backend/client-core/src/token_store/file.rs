use crate::error::TokenStoreError;
use crate::token_store::KeyValueStore;

use common::ErrorLocation;

use std::collections::BTreeMap;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::{debug, warn};

type Entries = BTreeMap<String, String>;

/// Key-value store persisted as a single JSON object.
///
/// Every mutation rewrites the whole file through a temp file + rename, so a
/// crash mid-write leaves the previous contents intact. A missing file reads
/// as an empty store.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    write_guard: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_guard: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Entries, TokenStoreError> {
        if !self.path.exists() {
            debug!("Store file {} not found, treating as empty", self.path.display());
            return Ok(Entries::new());
        }

        let contents =
            std::fs::read_to_string(&self.path).map_err(|e| TokenStoreError::ReadError {
                location: ErrorLocation::from(Location::caller()),
                path: self.path.clone(),
                source: e,
            })?;

        if contents.trim().is_empty() {
            return Ok(Entries::new());
        }

        serde_json::from_str(&contents).map_err(|e| {
            warn!("Store file {} is corrupt: {}", self.path.display(), e);
            TokenStoreError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: self.path.clone(),
                reason: e.to_string(),
            }
        })
    }

    fn write_entries(&self, entries: &Entries) -> Result<(), TokenStoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| TokenStoreError::WriteError {
                location: ErrorLocation::from(Location::caller()),
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let json =
            serde_json::to_string_pretty(entries).map_err(|e| TokenStoreError::SerializeError {
                location: ErrorLocation::from(Location::caller()),
                reason: e.to_string(),
            })?;

        let mut temp_name = self.path.as_os_str().to_owned();
        temp_name.push(".tmp");
        let temp_path = PathBuf::from(temp_name);

        std::fs::write(&temp_path, json).map_err(|e| TokenStoreError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: temp_path.clone(),
            source: e,
        })?;

        std::fs::rename(&temp_path, &self.path).map_err(|e| TokenStoreError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: self.path.clone(),
            source: e,
        })
    }

    #[track_caller]
    fn modify(&self, f: impl FnOnce(&mut Entries)) -> Result<(), TokenStoreError> {
        let _guard = self.write_guard.lock().map_err(|_| TokenStoreError::Poisoned {
            location: ErrorLocation::from(Location::caller()),
        })?;

        let mut entries = self.read_entries()?;
        f(&mut entries);
        self.write_entries(&entries)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, TokenStoreError> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), TokenStoreError> {
        self.modify(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<(), TokenStoreError> {
        if !self.path.exists() {
            return Ok(());
        }
        self.modify(|entries| {
            entries.remove(key);
        })
    }
}
