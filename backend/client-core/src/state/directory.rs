use models::{FetchError, UserDirectory, UserRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryEvent {
    FetchSucceeded(Vec<UserRecord>),
    FetchFailed,
}

/// Success replaces the whole list verbatim; failure leaves it untouched.
pub fn reduce_directory(directory: UserDirectory, event: DirectoryEvent) -> UserDirectory {
    match event {
        DirectoryEvent::FetchSucceeded(users) => UserDirectory { users, error: None },
        DirectoryEvent::FetchFailed => UserDirectory {
            error: Some(FetchError::UsersFailed),
            ..directory
        },
    }
}
