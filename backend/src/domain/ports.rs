//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the domain expects to interact with driven adapters.
//! The trait exposes strongly typed errors so adapters map their failures
//! into predictable variants instead of returning `anyhow::Result`.

use async_trait::async_trait;
use thiserror::Error;

use super::{User, UserDraft};

/// Errors surfaced by the persistence adapter backing the user directory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserRepositoryError {
    /// Database connectivity or pool checkout failures.
    #[error("user repository connection failed: {message}")]
    Connection {
        /// Adapter-supplied description of the failure.
        message: String,
    },
    /// A write violated the name or email uniqueness invariant.
    #[error("user uniqueness violation: {message}")]
    Conflict {
        /// Adapter-supplied description of the violated constraint.
        message: String,
    },
    /// Catch-all for query failures that bubble up from the adapter.
    #[error("user repository query failed: {message}")]
    Query {
        /// Adapter-supplied description of the failure.
        message: String,
    },
}

impl UserRepositoryError {
    /// Helper for connection related adapter errors.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for uniqueness violations.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Persistence port for user records, independent of transport.
///
/// Adapters must guarantee that `insert`, `update`, and `delete` are
/// atomic: a failed write leaves the store exactly as it was.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return every record in natural storage order.
    async fn find_all(&self) -> Result<Vec<User>, UserRepositoryError>;

    /// Look up a single record by id.
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, UserRepositoryError>;

    /// Insert a new record with a system-assigned id and return it.
    async fn insert(&self, draft: &UserDraft) -> Result<User, UserRepositoryError>;

    /// Overwrite both fields of an existing record.
    ///
    /// Returns `None` when no record has the given id.
    async fn update(&self, id: i32, draft: &UserDraft)
    -> Result<Option<User>, UserRepositoryError>;

    /// Remove a record permanently.
    ///
    /// Returns `false` when no record has the given id.
    async fn delete(&self, id: i32) -> Result<bool, UserRepositoryError>;
}
