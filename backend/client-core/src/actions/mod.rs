//! Side-effecting operations of the client.
//!
//! [`Messenger`] is the explicit context handed to every command and view:
//! it bundles the API gateway, the token store and the state store. There is
//! no ambient global; anything that needs session state receives a Messenger.
//!
//! Every network operation follows the same shape:
//! 1. take a ticket for its [`OperationKey`](crate::store::OperationKey)
//! 2. issue exactly one request through the gateway
//! 3. collapse any failure to its fixed literal and complete the ticket
//!
//! Completions whose ticket was superseded are dropped by the store, and the
//! action reports its failure literal since its outcome was never applied.

pub mod auth;
pub mod directory;
pub mod messages;

use crate::config::AppConfig;
use crate::error::{CoreError, StoreError};
use crate::gateway::ApiGateway;
use crate::state::{AppState, SessionEvent};
use crate::store::{OperationKey, Store};
use crate::token_store::{FileStore, TokenStore};

use models::{MessageList, Session, UserDirectory};

use std::path::Path;
use std::sync::Arc;

use log::{debug, error, info, warn};

#[derive(Clone, Debug)]
pub struct Messenger {
    gateway: ApiGateway,
    tokens: TokenStore,
    store: Store,
}

impl Messenger {
    /// Wire a context. Call [`Messenger::initialize`] before dispatching actions.
    pub fn new(gateway: ApiGateway, tokens: TokenStore) -> Self {
        Self {
            gateway,
            tokens,
            store: Store::new(),
        }
    }

    /// Wire a context from configuration, persisting into `data_dir`.
    pub fn from_config(config: &AppConfig, data_dir: &Path) -> Result<Self, CoreError> {
        let store_path = data_dir.join(&config.storage.store_file);
        debug!("Token store at {}", store_path.display());

        let tokens = TokenStore::new(Arc::new(FileStore::new(store_path)));
        let gateway = ApiGateway::new(
            &config.server.base_url,
            tokens.clone(),
            config.server.request_timeout(),
        )?;

        Ok(Self::new(gateway, tokens))
    }

    /// Restore the session from the persisted token.
    ///
    /// An unreadable store is logged and treated as an anonymous session.
    pub async fn initialize(&self) -> Result<(), CoreError> {
        let persisted = match self.tokens.retrieve_token() {
            Ok(token) => token,
            Err(e) => {
                warn!("Could not read persisted token, starting anonymous: {e}");
                None
            }
        };

        if persisted.is_some() {
            info!("Restored persisted session");
        } else {
            info!("No persisted session, starting anonymous");
        }

        self.store
            .apply(SessionEvent::Initialized(persisted))
            .await?;
        Ok(())
    }

    /// Zero the session error without touching authentication.
    pub async fn clear_error(&self) -> Result<(), CoreError> {
        self.store.apply(SessionEvent::ErrorCleared).await?;
        Ok(())
    }

    pub async fn snapshot(&self) -> AppState {
        self.store.snapshot().await
    }

    pub async fn session(&self) -> Session {
        self.store.session().await
    }

    pub async fn directory(&self) -> UserDirectory {
        self.store.directory().await
    }

    pub async fn messages(&self) -> MessageList {
        self.store.messages().await
    }

    pub async fn is_in_flight(&self, key: OperationKey) -> bool {
        self.store.is_in_flight(key).await
    }

    pub fn gateway(&self) -> &ApiGateway {
        &self.gateway
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }
}

/// Final outcome of an action once its completion reached the store.
///
/// A superseded ticket means nothing was applied, so the caller gets
/// `superseded` instead of an outcome the state does not reflect.
fn settle<E>(
    key: OperationKey,
    completion: Result<bool, StoreError>,
    result: Result<(), E>,
    superseded: E,
) -> Result<(), E> {
    match completion {
        Ok(true) => result,
        Ok(false) => {
            debug!("{key} result discarded, a newer request was issued");
            Err(superseded)
        }
        Err(e) => {
            log_store_failure(key, &e);
            result
        }
    }
}

/// The store actor lives as long as any Messenger clone, so this only fires if
/// the runtime is shutting down. The action's own outcome is still reported.
fn log_store_failure(key: OperationKey, e: &StoreError) {
    error!("Could not record {key} outcome: {e}");
}
