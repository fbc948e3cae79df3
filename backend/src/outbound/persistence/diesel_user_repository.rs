//! SQLite-backed `UserRepository` implementation using Diesel ORM.
//!
//! This adapter implements the domain's `UserRepository` port. Writes run
//! inside transactions so a constraint violation rolls back completely
//! and partial state is never observed. Uniqueness violations on the
//! `name` and `email` columns map to the port's `Conflict` variant.

use async_trait::async_trait;
use diesel::prelude::*;
use tracing::debug;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{User, UserDraft};

use super::models::{NewUserRow, UserChangeset, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Idempotent bootstrap DDL.
///
/// `AUTOINCREMENT` keeps SQLite from reusing rowids of deleted records,
/// preserving the id-never-reused invariant.
const CREATE_USERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS users (\
    id INTEGER PRIMARY KEY AUTOINCREMENT, \
    name TEXT NOT NULL UNIQUE, \
    email TEXT NOT NULL UNIQUE\
)";

diesel::define_sql_function! {
    /// Rowid of the most recent successful insert on this connection.
    fn last_insert_rowid() -> diesel::sql_types::Integer;
}

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create the `users` table if it does not exist yet.
    ///
    /// Safe to run on every startup; reruns are no-ops.
    pub async fn ensure_schema(&self) -> Result<(), UserRepositoryError> {
        self.run(|conn| {
            diesel::sql_query(CREATE_USERS_TABLE)
                .execute(conn)
                .map_err(map_diesel_error)?;
            Ok(())
        })
        .await
    }

    /// Run a blocking Diesel operation on the dedicated thread pool.
    ///
    /// Pool checkout happens inside the blocking closure so the async
    /// executor never stalls on a busy pool.
    async fn run<T, F>(&self, op: F) -> Result<T, UserRepositoryError>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T, UserRepositoryError> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(map_pool_error)?;
            op(&mut conn)
        })
        .await
        .map_err(|err| UserRepositoryError::query(format!("blocking task failed: {err}")))?
    }
}

/// Map pool errors to domain repository errors.
fn map_pool_error(error: PoolError) -> UserRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            UserRepositoryError::connection(message)
        }
    }
}

/// Map Diesel errors to domain repository errors.
fn map_diesel_error(error: diesel::result::Error) -> UserRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => UserRepositoryError::query("record not found"),
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            UserRepositoryError::conflict("UNIQUE constraint violated")
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            UserRepositoryError::connection("database connection error")
        }
        DieselError::DatabaseError(_, _) => UserRepositoryError::query("database error"),
        _ => UserRepositoryError::query("database error"),
    }
}

/// Convert a database row to a domain user.
fn row_to_user(row: UserRow) -> User {
    User {
        id: row.id,
        name: row.name,
        email: row.email,
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, UserRepositoryError> {
        self.run(|conn| {
            let rows: Vec<UserRow> = users::table
                .select(UserRow::as_select())
                .load(conn)
                .map_err(map_diesel_error)?;
            Ok(rows.into_iter().map(row_to_user).collect())
        })
        .await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, UserRepositoryError> {
        self.run(move |conn| {
            let row: Option<UserRow> = users::table
                .find(id)
                .select(UserRow::as_select())
                .first(conn)
                .optional()
                .map_err(map_diesel_error)?;
            Ok(row.map(row_to_user))
        })
        .await
    }

    async fn insert(&self, draft: &UserDraft) -> Result<User, UserRepositoryError> {
        let new_row = NewUserRow {
            name: draft.name().to_owned(),
            email: draft.email().to_owned(),
        };
        self.run(move |conn| {
            conn.transaction::<UserRow, diesel::result::Error, _>(|conn| {
                diesel::insert_into(users::table)
                    .values(&new_row)
                    .execute(conn)?;
                let id: i32 = diesel::select(last_insert_rowid()).get_result(conn)?;
                users::table.find(id).select(UserRow::as_select()).first(conn)
            })
            .map(row_to_user)
            .map_err(map_diesel_error)
        })
        .await
    }

    async fn update(
        &self,
        id: i32,
        draft: &UserDraft,
    ) -> Result<Option<User>, UserRepositoryError> {
        let changeset = UserChangeset {
            name: draft.name().to_owned(),
            email: draft.email().to_owned(),
        };
        self.run(move |conn| {
            conn.transaction::<Option<UserRow>, diesel::result::Error, _>(|conn| {
                let affected = diesel::update(users::table.find(id))
                    .set(&changeset)
                    .execute(conn)?;
                if affected == 0 {
                    return Ok(None);
                }
                users::table
                    .find(id)
                    .select(UserRow::as_select())
                    .first(conn)
                    .map(Some)
            })
            .map(|row| row.map(row_to_user))
            .map_err(map_diesel_error)
        })
        .await
    }

    async fn delete(&self, id: i32) -> Result<bool, UserRepositoryError> {
        self.run(move |conn| {
            conn.transaction::<bool, diesel::result::Error, _>(|conn| {
                let affected = diesel::delete(users::table.find(id)).execute(conn)?;
                Ok(affected > 0)
            })
            .map_err(map_diesel_error)
        })
        .await
    }
}
