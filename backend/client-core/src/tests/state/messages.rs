use crate::state::{MessageEvent, reduce_messages};

use models::{FetchError, MessageList, MessageListError, MessageRecord, SendError};

fn message(id: i64, text: &str) -> MessageRecord {
    MessageRecord {
        id,
        from: String::from("bob"),
        message: text.to_string(),
    }
}

/// **VALUE**: Verifies a failed fetch keeps the previous list.
///
/// **WHY THIS MATTERS**: A flaky network must not blank the user's inbox.
///
/// **BUG THIS CATCHES**: Would catch a failure path that resets messages to empty.
#[test]
fn given_messages_when_fetch_fails_then_list_kept_and_error_is_fetch_literal() {
    let list = MessageList {
        messages: vec![message(1, "hi")],
        error: None,
    };

    let list = reduce_messages(list, MessageEvent::FetchFailed);

    assert_eq!(list.messages, vec![message(1, "hi")]);
    assert_eq!(
        list.error.map(|e| e.to_string()),
        Some(String::from("Fetch messages failed"))
    );
}

#[test]
fn given_messages_when_fetch_succeeds_then_server_order_kept() {
    let list = MessageList::default();

    let list = reduce_messages(
        list,
        MessageEvent::FetchSucceeded(vec![message(9, "late"), message(2, "early")]),
    );

    let ids: Vec<i64> = list.messages.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![9, 2]);
}

/// **VALUE**: Verifies a successful send does not touch the list.
///
/// **WHY THIS MATTERS**: The client never updates optimistically; the sent
/// message appears on the next fetch with its server-assigned id.
///
/// **BUG THIS CATCHES**: Would catch a local append with a made-up id.
#[test]
fn given_send_error_when_send_succeeds_then_error_cleared_and_list_unchanged() {
    let list = MessageList {
        messages: vec![message(1, "hi")],
        error: Some(MessageListError::Send(SendError::SendFailed)),
    };

    let list = reduce_messages(list, MessageEvent::SendSucceeded);

    assert_eq!(list.messages, vec![message(1, "hi")]);
    assert_eq!(list.error, None);
}

#[test]
fn given_fetch_error_when_send_fails_then_send_error_replaces_it() {
    let list = MessageList {
        messages: vec![],
        error: Some(MessageListError::Fetch(FetchError::MessagesFailed)),
    };

    let list = reduce_messages(list, MessageEvent::SendFailed);

    assert_eq!(list.error, Some(MessageListError::Send(SendError::SendFailed)));
}
