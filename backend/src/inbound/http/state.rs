//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on the domain service and remain testable without a real server.

use crate::domain::UserDirectory;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Application service driving the user repository.
    pub directory: UserDirectory,
}

impl HttpState {
    /// Bundle the directory service for handler injection.
    pub fn new(directory: UserDirectory) -> Self {
        Self { directory }
    }
}
