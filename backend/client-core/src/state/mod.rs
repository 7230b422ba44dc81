//! Pure state transitions.
//!
//! Every slice is updated by a `(State, Event) -> State` function with no I/O.
//! Side effects (network calls, token persistence) stay in
//! [`crate::actions`]; the [`crate::store::Store`] actor only applies these.

pub mod directory;
pub mod messages;
pub mod session;

pub use directory::{DirectoryEvent, reduce_directory};
pub use messages::{MessageEvent, reduce_messages};
pub use session::{SessionEvent, reduce_session};

use models::{MessageList, Session, UserDirectory};

/// All client state, owned by the store actor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub session: Session,
    pub directory: UserDirectory,
    pub messages: MessageList,
}

/// An event addressed to one slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateEvent {
    Session(SessionEvent),
    Directory(DirectoryEvent),
    Messages(MessageEvent),
}

impl AppState {
    pub fn apply(self, event: StateEvent) -> Self {
        let AppState {
            session,
            directory,
            messages,
        } = self;

        match event {
            StateEvent::Session(event) => AppState {
                session: reduce_session(session, event),
                directory,
                messages,
            },
            StateEvent::Directory(event) => AppState {
                session,
                directory: reduce_directory(directory, event),
                messages,
            },
            StateEvent::Messages(event) => AppState {
                session,
                directory,
                messages: reduce_messages(messages, event),
            },
        }
    }
}

impl From<SessionEvent> for StateEvent {
    fn from(event: SessionEvent) -> Self {
        StateEvent::Session(event)
    }
}

impl From<DirectoryEvent> for StateEvent {
    fn from(event: DirectoryEvent) -> Self {
        StateEvent::Directory(event)
    }
}

impl From<MessageEvent> for StateEvent {
    fn from(event: MessageEvent) -> Self {
        StateEvent::Messages(event)
    }
}
