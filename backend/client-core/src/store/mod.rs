//! Client state store using the actor pattern.
//!
//! All mutations go through one task that owns the write side:
//! - Commands arrive on an mpsc channel and are processed sequentially
//! - Each command replies on a oneshot, so callers observe their own update
//! - Reads take a snapshot through `Arc<RwLock<T>>`
//!
//! The actor also owns the [`InFlightTracker`], so issuing a ticket and
//! checking it on completion are serialized with the state updates they guard.

pub mod in_flight;

pub use in_flight::{InFlightTracker, OperationKey, Ticket};

use crate::error::StoreError;
use crate::state::{AppState, StateEvent};

use common::ErrorLocation;
use models::{MessageList, Session, UserDirectory};

use std::panic::Location;
use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::{Mutex, RwLock, mpsc, oneshot};

const COMMAND_CHANNEL_CAPACITY: usize = 100;

/// Commands processed by the store actor.
#[derive(Debug)]
pub enum StoreCommand {
    /// Issue a ticket for a network operation about to start.
    Begin {
        key: OperationKey,
        reply: oneshot::Sender<Ticket>,
    },

    /// Apply an operation's outcome if its ticket is still current.
    Complete {
        ticket: Ticket,
        event: StateEvent,
        reply: oneshot::Sender<bool>,
    },

    /// Apply an event that is not tied to a network operation.
    Apply {
        event: StateEvent,
        reply: oneshot::Sender<()>,
    },
}

/// Shared handle to the client state.
///
/// `Clone` is cheap; all clones talk to the same actor and read the same state.
#[derive(Clone, Debug)]
pub struct Store {
    /// Channel to send commands to the actor
    command_tx: Arc<Mutex<Option<mpsc::Sender<StoreCommand>>>>,

    state: Arc<RwLock<AppState>>,

    in_flight: Arc<RwLock<InFlightTracker>>,

    /// Track if actor has been initialized
    actor_init: Arc<Mutex<bool>>,
}

impl Store {
    /// Create an empty store. The actor is spawned lazily on first command.
    pub fn new() -> Self {
        Self {
            command_tx: Arc::new(Mutex::new(None)),
            state: Arc::new(RwLock::new(AppState::default())),
            in_flight: Arc::new(RwLock::new(InFlightTracker::default())),
            actor_init: Arc::new(Mutex::new(false)),
        }
    }

    pub async fn begin(&self, key: OperationKey) -> Result<Ticket, StoreError> {
        let (reply, response) = oneshot::channel();
        self.send(StoreCommand::Begin { key, reply }).await?;
        Self::await_reply(response).await
    }

    /// Returns `true` if the event was applied, `false` if the ticket was stale.
    pub async fn complete(
        &self,
        ticket: Ticket,
        event: impl Into<StateEvent>,
    ) -> Result<bool, StoreError> {
        let (reply, response) = oneshot::channel();
        self.send(StoreCommand::Complete {
            ticket,
            event: event.into(),
            reply,
        })
        .await?;
        Self::await_reply(response).await
    }

    pub async fn apply(&self, event: impl Into<StateEvent>) -> Result<(), StoreError> {
        let (reply, response) = oneshot::channel();
        self.send(StoreCommand::Apply {
            event: event.into(),
            reply,
        })
        .await?;
        Self::await_reply(response).await
    }

    pub async fn snapshot(&self) -> AppState {
        self.state.read().await.clone()
    }

    pub async fn session(&self) -> Session {
        self.state.read().await.session.clone()
    }

    pub async fn directory(&self) -> UserDirectory {
        self.state.read().await.directory.clone()
    }

    pub async fn messages(&self) -> MessageList {
        self.state.read().await.messages.clone()
    }

    pub async fn is_in_flight(&self, key: OperationKey) -> bool {
        self.in_flight.read().await.is_in_flight(key)
    }

    async fn send(&self, cmd: StoreCommand) -> Result<(), StoreError> {
        self.ensure_actor().await;

        let tx_guard = self.command_tx.lock().await;
        let tx = tx_guard.as_ref().ok_or_else(|| StoreError::ActorUnavailable {
            message: "State actor not initialized".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        tx.send(cmd).await.map_err(|e| StoreError::ActorUnavailable {
            message: format!("State actor died: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    async fn await_reply<T>(response: oneshot::Receiver<T>) -> Result<T, StoreError> {
        response.await.map_err(|e| StoreError::ActorUnavailable {
            message: format!("State actor dropped reply: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    async fn ensure_actor(&self) {
        let mut init_guard = self.actor_init.lock().await;
        if !*init_guard {
            let (tx, rx) = mpsc::channel(COMMAND_CHANNEL_CAPACITY);

            // Store tx BEFORE spawning to avoid race
            let mut tx_guard = self.command_tx.lock().await;
            *tx_guard = Some(tx);
            drop(tx_guard);

            tokio::spawn(state_actor(
                rx,
                Arc::clone(&self.state),
                Arc::clone(&self.in_flight),
            ));
            *init_guard = true;
            info!("State actor spawned");
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns the write side of the state and processes commands in arrival order.
///
/// Runs until every [`Store`] handle is dropped.
async fn state_actor(
    mut command_rx: mpsc::Receiver<StoreCommand>,
    state: Arc<RwLock<AppState>>,
    in_flight: Arc<RwLock<InFlightTracker>>,
) {
    debug!("State actor started");

    while let Some(cmd) = command_rx.recv().await {
        match cmd {
            StoreCommand::Begin { key, reply } => {
                let ticket = in_flight.write().await.begin(key);
                debug!("Issued {key} ticket #{}", ticket.generation);
                let _ = reply.send(ticket);
            }
            StoreCommand::Complete {
                ticket,
                event,
                reply,
            } => {
                let current = in_flight.write().await.finish(&ticket);
                if current {
                    apply_event(&state, event).await;
                } else {
                    warn!(
                        "Dropping stale {} response (ticket #{}); a newer request is in flight",
                        ticket.key, ticket.generation
                    );
                }
                let _ = reply.send(current);
            }
            StoreCommand::Apply { event, reply } => {
                apply_event(&state, event).await;
                let _ = reply.send(());
            }
        }
    }

    debug!("State actor stopped");
}

async fn apply_event(state: &RwLock<AppState>, event: StateEvent) {
    let mut state_write = state.write().await;
    let current = std::mem::take(&mut *state_write);
    *state_write = current.apply(event);
}
