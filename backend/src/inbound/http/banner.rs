//! Root banner route.

use actix_web::{HttpResponse, get, http::header::ContentType};

const BANNER_HTML: &str = "<h1>User Directory API</h1>";

/// Static HTML banner served at the site root.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "HTML banner", body = String, content_type = "text/html")
    )
)]
#[get("/")]
pub async fn banner() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(BANNER_HTML)
}
