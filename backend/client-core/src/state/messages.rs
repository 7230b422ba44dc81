use models::{FetchError, MessageList, MessageListError, MessageRecord, SendError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageEvent {
    FetchSucceeded(Vec<MessageRecord>),
    FetchFailed,
    SendSucceeded,
    SendFailed,
}

/// Fetch and send share one error field.
///
/// A successful send only clears that error; the sent message is not appended
/// locally and shows up on the next fetch.
pub fn reduce_messages(list: MessageList, event: MessageEvent) -> MessageList {
    match event {
        MessageEvent::FetchSucceeded(messages) => MessageList {
            messages,
            error: None,
        },
        MessageEvent::FetchFailed => MessageList {
            error: Some(MessageListError::Fetch(FetchError::MessagesFailed)),
            ..list
        },
        MessageEvent::SendSucceeded => MessageList { error: None, ..list },
        MessageEvent::SendFailed => MessageList {
            error: Some(MessageListError::Send(SendError::SendFailed)),
            ..list
        },
    }
}
