//! Diesel table definitions for the SQLite schema.
//!
//! These definitions must match the DDL applied by the idempotent schema
//! bootstrap exactly. They are used by Diesel for compile-time query
//! validation and type-safe SQL generation.

diesel::table! {
    /// User directory table.
    ///
    /// The `id` column is declared `AUTOINCREMENT` in the bootstrap DDL so
    /// identifiers are never reused after a delete.
    users (id) {
        /// Primary key: auto-incrementing integer.
        id -> Integer,
        /// Display name, unique across all rows.
        name -> Text,
        /// Email address, unique across all rows.
        email -> Text,
    }
}
