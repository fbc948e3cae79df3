//! HTTP server configuration object.

use std::net::SocketAddr;

use clap::Parser;

/// Runtime configuration, parsed from CLI flags with environment
/// fallbacks.
#[derive(Debug, Clone, Parser)]
#[command(name = "user-directory", about = "CRUD service over the user directory")]
pub struct ServerConfig {
    /// Socket address to bind the HTTP listener to.
    #[arg(long, env = "USER_DIRECTORY_BIND_ADDR", default_value = "0.0.0.0:8080")]
    pub bind_addr: SocketAddr,

    /// SQLite database path (`:memory:` for ephemeral storage).
    #[arg(long, env = "USER_DIRECTORY_DATABASE_URL", default_value = "database.db")]
    pub database_url: String,

    /// Maximum number of pooled database connections.
    #[arg(long, env = "USER_DIRECTORY_DB_POOL_MAX_SIZE", default_value_t = 10)]
    pub db_pool_max_size: u32,
}
