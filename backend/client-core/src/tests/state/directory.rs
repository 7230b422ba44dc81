use crate::state::{DirectoryEvent, reduce_directory};

use models::{FetchError, UserDirectory, UserRecord};

fn user(name: &str) -> UserRecord {
    UserRecord {
        username: name.to_string(),
        message_token: format!("mt-{name}"),
    }
}

/// **VALUE**: Verifies a fetch replaces the list rather than merging.
///
/// **WHY THIS MATTERS**: Deleted users must disappear from the picker.
///
/// **BUG THIS CATCHES**: Would catch an append or merge implementation.
#[test]
fn given_existing_users_when_fetch_succeeds_then_list_replaced_verbatim() {
    let directory = UserDirectory {
        users: vec![user("alice"), user("bob")],
        error: Some(FetchError::UsersFailed),
    };

    let directory = reduce_directory(directory, DirectoryEvent::FetchSucceeded(vec![user("carol")]));

    assert_eq!(directory.users, vec![user("carol")]);
    assert_eq!(directory.error, None);
}

#[test]
fn given_existing_users_when_fetch_fails_then_list_kept_and_error_set() {
    let directory = UserDirectory {
        users: vec![user("alice")],
        error: None,
    };

    let directory = reduce_directory(directory, DirectoryEvent::FetchFailed);

    assert_eq!(directory.users, vec![user("alice")]);
    assert_eq!(directory.error, Some(FetchError::UsersFailed));
}
