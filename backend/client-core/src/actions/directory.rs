use crate::actions::{Messenger, log_store_failure, settle};
use crate::gateway::USERS_ENDPOINT;
use crate::state::DirectoryEvent;
use crate::store::OperationKey;

use models::{FetchError, UserRecord};

use log::{debug, warn};

impl Messenger {
    /// Replace the user directory with the server's list.
    ///
    /// On failure the previous list is kept and "Fetch users failed" is recorded.
    pub async fn fetch_users(&self) -> Result<(), FetchError> {
        let key = OperationKey::FetchUsers;
        let ticket = self.store.begin(key).await.map_err(|e| {
            log_store_failure(key, &e);
            FetchError::UsersFailed
        })?;

        let (event, result) = match self.gateway.get::<Vec<UserRecord>>(USERS_ENDPOINT).await {
            Ok(users) => {
                debug!("Fetched {} users", users.len());
                (DirectoryEvent::FetchSucceeded(users), Ok(()))
            }
            Err(e) => {
                warn!("Fetch users error ({}): {e}", e.error_category());
                (DirectoryEvent::FetchFailed, Err(FetchError::UsersFailed))
            }
        };

        let completion = self.store.complete(ticket, event).await;
        settle(key, completion, result, FetchError::UsersFailed)
    }
}
