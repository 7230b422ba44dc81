mod credentials;
mod outgoing_message;
mod session;
