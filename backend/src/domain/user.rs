//! User data model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A record in the user directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct User {
    /// System-assigned identifier, never reused once issued.
    #[schema(example = 1)]
    pub id: i32,
    /// Display name, unique across all records.
    #[schema(example = "alice")]
    pub name: String,
    /// Email address, unique across all records.
    #[schema(example = "a@x.com")]
    pub email: String,
}

/// Validated input for create and update operations.
///
/// Both fields are always present: updates overwrite both columns
/// unconditionally, so partial drafts do not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    name: String,
    email: String,
}

impl UserDraft {
    /// Build a draft from already-validated field values.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::UserDraft;
    ///
    /// let draft = UserDraft::new("alice", "a@x.com");
    /// assert_eq!(draft.name(), "alice");
    /// ```
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Requested display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Requested email address.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}
