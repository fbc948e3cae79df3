//! SQLite persistence adapters using Diesel ORM.
//!
//! This module provides the concrete implementation of the domain's
//! [`UserRepository`](crate::domain::ports::UserRepository) port backed by
//! SQLite via Diesel with `r2d2` connection pooling.
//!
//! # Architecture
//!
//! - **Thin adapter**: the repository only translates between Diesel
//!   models and domain types. No business logic resides here.
//! - **Internal models**: Diesel row structs (`models.rs`) and schema
//!   definitions (`schema.rs`) are implementation details, never exposed
//!   to the domain layer.
//! - **Blocking work off the executor**: Diesel's SQLite backend is
//!   synchronous, so every operation hops onto the blocking thread pool.
//! - **Strongly typed errors**: all database errors are mapped to the
//!   domain's repository error variants.

mod diesel_user_repository;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
