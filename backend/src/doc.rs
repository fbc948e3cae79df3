//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: all HTTP endpoints from the inbound layer (users, health,
//!   banner)
//! - **Schemas**: the [`User`] record and the error envelope
//!
//! The generated specification backs Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::domain::{ErrorCode, User};
use crate::inbound::http::ApiError;
use crate::inbound::http::users::UserPayload;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Directory API",
        description = "CRUD over a single user resource backed by a relational table."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
        crate::inbound::http::banner::banner,
    ),
    components(schemas(User, UserPayload, ApiError, ErrorCode)),
    tags(
        (name = "users", description = "Operations on user records"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
