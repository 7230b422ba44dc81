//! Per-operation in-flight markers.
//!
//! Each network action takes a [`Ticket`] before it is issued. When the
//! response arrives, its completion is applied only if the ticket is still the
//! latest one handed out for that [`OperationKey`]; older responses are stale
//! and dropped, whatever order the network settles them in.

use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKey {
    Login,
    Register,
    Logout,
    FetchUsers,
    FetchMessages,
    SendMessage,
}

impl fmt::Display for OperationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperationKey::Login => "login",
            OperationKey::Register => "register",
            OperationKey::Logout => "logout",
            OperationKey::FetchUsers => "fetch_users",
            OperationKey::FetchMessages => "fetch_messages",
            OperationKey::SendMessage => "send_message",
        };
        f.write_str(name)
    }
}

/// Proof that an operation was issued, in issue order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub key: OperationKey,
    pub generation: u64,
}

#[derive(Debug, Default)]
pub struct InFlightTracker {
    next_generation: u64,
    latest: HashMap<OperationKey, u64>,
}

impl InFlightTracker {
    /// Issue a ticket that supersedes every earlier ticket for `key`.
    pub fn begin(&mut self, key: OperationKey) -> Ticket {
        self.next_generation += 1;
        let generation = self.next_generation;
        self.latest.insert(key, generation);
        Ticket { key, generation }
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.latest.get(&ticket.key) == Some(&ticket.generation)
    }

    /// Retire `ticket` if it is current. Returns whether it was.
    ///
    /// A stale ticket leaves the newer marker in place.
    pub fn finish(&mut self, ticket: &Ticket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.latest.remove(&ticket.key);
        true
    }

    pub fn is_in_flight(&self, key: OperationKey) -> bool {
        self.latest.contains_key(&key)
    }
}
