//! Diesel row models for the `users` table.

use diesel::prelude::*;

use super::schema::users;

/// Row read back from the `users` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users, check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct UserRow {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Insertable row; the id is assigned by the database.
#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow {
    pub name: String,
    pub email: String,
}

/// Changeset overwriting both columns unconditionally.
///
/// Fields are deliberately not `Option`: the update operation replaces
/// the whole record, never merging field by field.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserChangeset {
    pub name: String,
    pub email: String,
}
