//! Transport-agnostic core of the user directory.
//!
//! Inbound adapters translate HTTP requests into calls on
//! [`UserDirectory`]; outbound adapters implement the ports in
//! [`ports`]. Nothing in this module knows about Actix or Diesel.

pub mod directory;
pub mod error;
pub mod ports;
pub mod user;

pub use directory::UserDirectory;
pub use error::{DomainError, ErrorCode};
pub use user::{User, UserDraft};

/// Response header carrying the request-scoped trace identifier.
pub const TRACE_ID_HEADER: &str = "Trace-Id";
