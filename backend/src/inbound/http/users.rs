//! Users API handlers.
//!
//! ```text
//! GET    /api/users          list all records
//! POST   /api/users          create a record, return the refreshed list
//! GET    /api/users/{id}     fetch one record
//! PATCH  /api/users/{id}     overwrite both fields of one record
//! DELETE /api/users/{id}     remove a record, return the remaining list
//! ```

use actix_web::{HttpResponse, delete, get, patch, post, web};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::User;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_user_payload;
use crate::inbound::http::{ApiError, ApiResult};

/// Create/update body shape, documented for the OpenAPI surface.
///
/// Handlers deliberately receive the raw JSON and validate it explicitly
/// so that missing or wrong-typed fields produce field-naming errors.
#[derive(Debug, serde::Deserialize, ToSchema)]
pub struct UserPayload {
    /// Display name, unique across all records.
    #[schema(example = "alice")]
    pub name: String,
    /// Email address, unique across all records.
    #[schema(example = "a@x.com")]
    pub email: String,
}

/// List all user records.
///
/// Always succeeds; an empty directory serialises as `[]`.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All user records", body = [User]),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.directory.list().await?;
    Ok(web::Json(users))
}

/// Create a user record and return the refreshed full list.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "Record created; full list returned", body = [User]),
        (status = 400, description = "Missing field or duplicate name/email", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let draft = parse_user_payload(&payload).map_err(ApiError::from)?;
    let users = state.directory.create(draft).await?;
    Ok(HttpResponse::Created().json(users))
}

/// Fetch a single user record by id.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = i32, Path, description = "Record identifier")),
    responses(
        (status = 200, description = "The matching record", body = User),
        (status = 404, description = "No record with that id", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<User>> {
    let user = state.directory.fetch(path.into_inner()).await?;
    Ok(web::Json(user))
}

/// Overwrite both fields of an existing record.
///
/// Despite the PATCH verb this is a full-field update: `name` and `email`
/// are both required and both overwritten.
#[utoipa::path(
    patch,
    path = "/api/users/{id}",
    params(("id" = i32, Path, description = "Record identifier")),
    request_body = UserPayload,
    responses(
        (status = 200, description = "The updated record", body = User),
        (status = 400, description = "Missing field or duplicate name/email", body = ApiError),
        (status = 404, description = "No record with that id", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[patch("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<Value>,
) -> ApiResult<web::Json<User>> {
    // Validation precedes the lookup, so a malformed body on an unknown id
    // reports 400, not 404.
    let draft = parse_user_payload(&payload).map_err(ApiError::from)?;
    let user = state.directory.update(path.into_inner(), draft).await?;
    Ok(web::Json(user))
}

/// Remove a record permanently and return the remaining full list.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = i32, Path, description = "Record identifier")),
    responses(
        (status = 200, description = "Record removed; remaining list returned", body = [User]),
        (status = 404, description = "No record with that id", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.directory.delete(path.into_inner()).await?;
    Ok(web::Json(users))
}
