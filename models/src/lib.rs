//! Domain models for Parley.
//!
//! This crate contains pure data structures representing the core
//! concepts of the messaging client. Models carry validation but no I/O;
//! they are passed between the gateway, the store and the views.
//!
//! ## Architecture
//!
//! - **models** (this crate): Pure data structures
//! - **client-core**: Business logic operating on models
//! - **parley**: Application wiring everything together

pub mod credentials;
pub mod error;
pub mod outgoing_message;
pub mod records;
pub mod session;
pub mod slices;

#[cfg(test)]
mod tests;

pub use common::ErrorLocation;
pub use credentials::Credentials;
pub use error::action_error::{AuthError, FetchError, MessageListError, SendError};
pub use error::model_error::ModelError;
pub use outgoing_message::OutgoingMessage;
pub use outgoing_message::builder::OutgoingMessageBuilder;
pub use records::{LoginResponse, MessageRecord, UserRecord};
pub use session::Session;
pub use slices::{MessageList, UserDirectory};
