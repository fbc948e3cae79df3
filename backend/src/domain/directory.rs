//! User directory application service.
//!
//! [`UserDirectory`] owns the request-handling contract: it drives the
//! [`UserRepository`] port and translates adapter failures into
//! [`DomainError`] values that inbound adapters can surface verbatim.

use std::sync::Arc;

use tracing::error;

use super::ports::{UserRepository, UserRepositoryError};
use super::{DomainError, User, UserDraft};

/// Generic integrity message returned for uniqueness violations.
const INTEGRITY_ERROR_MESSAGE: &str = "A database integrity error occurred";

/// Message returned whenever an operation targets an unknown id.
const USER_NOT_FOUND_MESSAGE: &str = "user not found";

/// Application service exposing the five directory operations.
///
/// Holds no state of its own between requests; every operation is a
/// single read-modify-write against the repository.
#[derive(Clone)]
pub struct UserDirectory {
    repository: Arc<dyn UserRepository>,
}

impl UserDirectory {
    /// Create a directory service over the given repository.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Return the full set of records. An empty directory is valid.
    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        self.repository
            .find_all()
            .await
            .map_err(map_repository_error)
    }

    /// Insert a new record and return the updated full list.
    ///
    /// A uniqueness violation rolls the write back entirely and surfaces
    /// as a conflict error; the stored set is unchanged.
    pub async fn create(&self, draft: UserDraft) -> Result<Vec<User>, DomainError> {
        self.repository
            .insert(&draft)
            .await
            .map_err(map_repository_error)?;
        self.list().await
    }

    /// Look up a single record by id.
    pub async fn fetch(&self, id: i32) -> Result<User, DomainError> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| DomainError::not_found(USER_NOT_FOUND_MESSAGE))
    }

    /// Overwrite both fields of an existing record and return it.
    ///
    /// Uniqueness violations surface as conflict errors, symmetric with
    /// [`UserDirectory::create`].
    pub async fn update(&self, id: i32, draft: UserDraft) -> Result<User, DomainError> {
        self.repository
            .update(id, &draft)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| DomainError::not_found(USER_NOT_FOUND_MESSAGE))
    }

    /// Remove a record permanently and return the remaining full list.
    pub async fn delete(&self, id: i32) -> Result<Vec<User>, DomainError> {
        let removed = self
            .repository
            .delete(id)
            .await
            .map_err(map_repository_error)?;
        if !removed {
            return Err(DomainError::not_found(USER_NOT_FOUND_MESSAGE));
        }
        self.list().await
    }
}

/// Map repository failures onto the domain error envelope.
fn map_repository_error(error: UserRepositoryError) -> DomainError {
    match error {
        UserRepositoryError::Conflict { .. } => DomainError::conflict(INTEGRITY_ERROR_MESSAGE),
        UserRepositoryError::Connection { message } | UserRepositoryError::Query { message } => {
            error!(%message, "user repository failure");
            DomainError::internal(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicI32, Ordering};

    use async_trait::async_trait;
    use rstest::rstest;

    use super::*;
    use crate::domain::ErrorCode;

    /// Mutex-guarded stand-in enforcing the uniqueness invariant in memory.
    #[derive(Default)]
    struct InMemoryRepository {
        users: Mutex<Vec<User>>,
        next_id: AtomicI32,
    }

    impl InMemoryRepository {
        fn with_users(users: Vec<User>) -> Self {
            let next_id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
            Self {
                users: Mutex::new(users),
                next_id: AtomicI32::new(next_id),
            }
        }

        fn conflicts(&self, users: &[User], draft: &UserDraft, skip_id: Option<i32>) -> bool {
            users.iter().any(|user| {
                Some(user.id) != skip_id
                    && (user.name == draft.name() || user.email == draft.email())
            })
        }
    }

    #[async_trait]
    impl UserRepository for InMemoryRepository {
        async fn find_all(&self) -> Result<Vec<User>, UserRepositoryError> {
            Ok(self.users.lock().expect("lock users").clone())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<User>, UserRepositoryError> {
            let users = self.users.lock().expect("lock users");
            Ok(users.iter().find(|user| user.id == id).cloned())
        }

        async fn insert(&self, draft: &UserDraft) -> Result<User, UserRepositoryError> {
            let mut users = self.users.lock().expect("lock users");
            if self.conflicts(&users, draft, None) {
                return Err(UserRepositoryError::conflict("UNIQUE constraint failed"));
            }
            let user = User {
                id: self.next_id.fetch_add(1, Ordering::SeqCst),
                name: draft.name().to_owned(),
                email: draft.email().to_owned(),
            };
            users.push(user.clone());
            Ok(user)
        }

        async fn update(
            &self,
            id: i32,
            draft: &UserDraft,
        ) -> Result<Option<User>, UserRepositoryError> {
            let mut users = self.users.lock().expect("lock users");
            if !users.iter().any(|user| user.id == id) {
                return Ok(None);
            }
            if self.conflicts(&users, draft, Some(id)) {
                return Err(UserRepositoryError::conflict("UNIQUE constraint failed"));
            }
            let user = users
                .iter_mut()
                .find(|user| user.id == id)
                .expect("existence checked above");
            user.name = draft.name().to_owned();
            user.email = draft.email().to_owned();
            Ok(Some(user.clone()))
        }

        async fn delete(&self, id: i32) -> Result<bool, UserRepositoryError> {
            let mut users = self.users.lock().expect("lock users");
            let before = users.len();
            users.retain(|user| user.id != id);
            Ok(users.len() < before)
        }
    }

    fn directory_with(users: Vec<User>) -> UserDirectory {
        UserDirectory::new(Arc::new(InMemoryRepository::with_users(users)))
    }

    fn alice() -> User {
        User {
            id: 1,
            name: "alice".to_owned(),
            email: "a@x.com".to_owned(),
        }
    }

    #[tokio::test]
    async fn create_grows_the_list_by_one_with_a_fresh_id() {
        let directory = directory_with(vec![alice()]);

        let users = directory
            .create(UserDraft::new("bob", "b@x.com"))
            .await
            .expect("create succeeds");

        assert_eq!(users.len(), 2);
        let bob = users.iter().find(|u| u.name == "bob").expect("bob stored");
        assert_ne!(bob.id, 1);
    }

    #[rstest]
    #[case(UserDraft::new("alice", "fresh@x.com"))]
    #[case(UserDraft::new("fresh", "a@x.com"))]
    #[tokio::test]
    async fn create_with_taken_name_or_email_conflicts_and_stores_nothing(
        #[case] draft: UserDraft,
    ) {
        let directory = directory_with(vec![alice()]);

        let err = directory.create(draft).await.expect_err("conflict");

        assert_eq!(err.code(), ErrorCode::Conflict);
        assert_eq!(err.message(), "A database integrity error occurred");
        let users = directory.list().await.expect("list");
        assert_eq!(users, vec![alice()]);
    }

    #[tokio::test]
    async fn fetch_of_unknown_id_is_not_found() {
        let directory = directory_with(Vec::new());

        let err = directory.fetch(42).await.expect_err("missing record");

        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), "user not found");
    }

    #[tokio::test]
    async fn update_overwrites_both_fields_exactly() {
        let directory = directory_with(vec![alice()]);

        let updated = directory
            .update(1, UserDraft::new("alice2", "a2@x.com"))
            .await
            .expect("update succeeds");

        assert_eq!(updated.name, "alice2");
        assert_eq!(updated.email, "a2@x.com");
        let fetched = directory.fetch(1).await.expect("fetch after update");
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_not_found() {
        let directory = directory_with(Vec::new());

        let err = directory
            .update(7, UserDraft::new("x", "x@x.com"))
            .await
            .expect_err("missing record");

        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn update_into_taken_email_conflicts() {
        let bob = User {
            id: 2,
            name: "bob".to_owned(),
            email: "b@x.com".to_owned(),
        };
        let directory = directory_with(vec![alice(), bob]);

        let err = directory
            .update(2, UserDraft::new("bob", "a@x.com"))
            .await
            .expect_err("conflict");

        assert_eq!(err.code(), ErrorCode::Conflict);
    }

    #[tokio::test]
    async fn delete_removes_the_record_and_returns_the_remainder() {
        let directory = directory_with(vec![alice()]);

        let remaining = directory.delete(1).await.expect("delete succeeds");

        assert!(remaining.is_empty());
        let err = directory.fetch(1).await.expect_err("record gone");
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn delete_of_unknown_id_is_not_found() {
        let directory = directory_with(Vec::new());

        let err = directory.delete(9).await.expect_err("missing record");

        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), "user not found");
    }

    #[tokio::test]
    async fn repository_failures_surface_as_internal_errors() {
        struct BrokenRepository;

        #[async_trait]
        impl UserRepository for BrokenRepository {
            async fn find_all(&self) -> Result<Vec<User>, UserRepositoryError> {
                Err(UserRepositoryError::connection("pool exhausted"))
            }

            async fn find_by_id(&self, _id: i32) -> Result<Option<User>, UserRepositoryError> {
                Err(UserRepositoryError::query("disk I/O error"))
            }

            async fn insert(&self, _draft: &UserDraft) -> Result<User, UserRepositoryError> {
                Err(UserRepositoryError::query("disk I/O error"))
            }

            async fn update(
                &self,
                _id: i32,
                _draft: &UserDraft,
            ) -> Result<Option<User>, UserRepositoryError> {
                Err(UserRepositoryError::query("disk I/O error"))
            }

            async fn delete(&self, _id: i32) -> Result<bool, UserRepositoryError> {
                Err(UserRepositoryError::query("disk I/O error"))
            }
        }

        let directory = UserDirectory::new(Arc::new(BrokenRepository));

        let err = directory.list().await.expect_err("broken repository");

        assert_eq!(err.code(), ErrorCode::InternalError);
    }
}
