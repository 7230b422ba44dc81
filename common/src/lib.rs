//! Shared building blocks for Parley.
//!
//! Everything here is dependency-light and used by every other crate:
//!
//! - **common** (this crate): error locations, HTTP status helpers, secret strings
//! - **models**: Pure data structures
//! - **client-core**: Session logic, HTTP gateway, persistence and routing
//! - **parley**: Command-line application wiring everything together

pub mod error;
pub mod http_status;
pub mod redacted_token;


pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_token::RedactedToken;
