pub mod actions;
pub mod config;
pub mod error;
pub mod gateway;
pub mod routing;
pub mod state;
pub mod store;
pub mod token_store;

#[cfg(test)]
mod tests;

pub use actions::Messenger;

pub const DEFAULT_SERVER_HOSTNAME: &str = "127.0.0.1";
pub const DEFAULT_SERVER_PORT: u16 = 3000;
pub const DEFAULT_BASE_URL: &str = const_format::concatcp!(
    "http://",
    DEFAULT_SERVER_HOSTNAME,
    ":",
    DEFAULT_SERVER_PORT,
    "/"
);
