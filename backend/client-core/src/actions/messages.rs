use crate::actions::{Messenger, log_store_failure, settle};
use crate::gateway::MESSAGES_ENDPOINT;
use crate::state::MessageEvent;
use crate::store::OperationKey;

use models::{FetchError, MessageRecord, OutgoingMessage, SendError};

use log::{debug, info, warn};
use serde_json::Value;

impl Messenger {
    /// Replace the message list with the server's list, in server order.
    pub async fn fetch_messages(&self) -> Result<(), FetchError> {
        let key = OperationKey::FetchMessages;
        let ticket = self.store.begin(key).await.map_err(|e| {
            log_store_failure(key, &e);
            FetchError::MessagesFailed
        })?;

        let outcome = self
            .gateway
            .get::<Vec<MessageRecord>>(MESSAGES_ENDPOINT)
            .await;

        let (event, result) = match outcome {
            Ok(messages) => {
                debug!("Fetched {} messages", messages.len());
                (MessageEvent::FetchSucceeded(messages), Ok(()))
            }
            Err(e) => {
                warn!("Fetch messages error ({}): {e}", e.error_category());
                (MessageEvent::FetchFailed, Err(FetchError::MessagesFailed))
            }
        };

        let completion = self.store.complete(ticket, event).await;
        settle(key, completion, result, FetchError::MessagesFailed)
    }

    /// Post a message. The local list is not updated; fetch again to see it.
    pub async fn send_message(&self, outgoing: &OutgoingMessage) -> Result<(), SendError> {
        let key = OperationKey::SendMessage;
        let ticket = self.store.begin(key).await.map_err(|e| {
            log_store_failure(key, &e);
            SendError::SendFailed
        })?;

        let outcome = self
            .gateway
            .post::<_, Value>(MESSAGES_ENDPOINT, outgoing)
            .await;

        let (event, result) = match outcome {
            Ok(_) => {
                info!("Message sent to {}", outgoing.message_token());
                (MessageEvent::SendSucceeded, Ok(()))
            }
            Err(e) => {
                warn!("Send message error ({}): {e}", e.error_category());
                (MessageEvent::SendFailed, Err(SendError::SendFailed))
            }
        };

        let completion = self.store.complete(ticket, event).await;
        settle(key, completion, result, SendError::SendFailed)
    }
}
