//! Durable mirror of the session token.
//!
//! The token lives under the well-known key [`TOKEN_KEY`] of a small
//! key-value blob store. Its absence means the session is anonymous.
//!
//! # Backends
//! - [`FileStore`]: JSON object on disk, written atomically
//! - [`MemoryStore`]: process-local map, for tests and throwaway sessions

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::TokenStoreError;

use common::RedactedToken;

use std::sync::Arc;

use log::debug;

/// Key under which the session token is persisted.
pub const TOKEN_KEY: &str = "token";

/// Minimal get/set/remove contract of a persistent string store.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, TokenStoreError>;

    fn set(&self, key: &str, value: &str) -> Result<(), TokenStoreError>;

    /// Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), TokenStoreError>;
}

/// Token persistence bound to [`TOKEN_KEY`].
///
/// Cheap to clone; all clones share the same backend.
#[derive(Clone)]
pub struct TokenStore {
    backend: Arc<dyn KeyValueStore>,
}

impl TokenStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Store backed by a fresh [`MemoryStore`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::default()))
    }

    pub fn store_token(&self, token: &str) -> Result<(), TokenStoreError> {
        self.backend.set(TOKEN_KEY, token)?;
        debug!("Session token persisted ({} chars)", token.len());
        Ok(())
    }

    /// Returns `None` when no token is persisted. An empty stored value counts as absent.
    pub fn retrieve_token(&self) -> Result<Option<RedactedToken>, TokenStoreError> {
        let token = self
            .backend
            .get(TOKEN_KEY)?
            .filter(|value| !value.is_empty())
            .map(RedactedToken::new);
        Ok(token)
    }

    pub fn clear_token(&self) -> Result<(), TokenStoreError> {
        self.backend.remove(TOKEN_KEY)?;
        debug!("Session token cleared");
        Ok(())
    }
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStore").finish_non_exhaustive()
    }
}
