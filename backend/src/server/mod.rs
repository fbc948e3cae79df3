//! Server construction and route wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::NormalizePath;
use actix_web::{App, HttpServer, web};

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::{DomainError, UserDirectory};
use crate::inbound::http::ApiError;
use crate::inbound::http::banner::banner;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{create_user, delete_user, get_user, list_users, update_user};
use crate::middleware::trace::Trace;
use crate::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Dependency bundle for [`build_app`].
#[derive(Clone)]
pub struct AppDependencies {
    /// Shared probe state.
    pub health_state: web::Data<HealthState>,
    /// Handler state bundle.
    pub http_state: web::Data<HttpState>,
}

/// Keep malformed JSON bodies inside the standard error envelope.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::from(DomainError::invalid_request(err.to_string())).into())
}

/// Keep non-integer `{id}` segments inside the standard error envelope.
fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| ApiError::from(DomainError::invalid_request(err.to_string())).into())
}

/// Assemble the application with routes, middleware, and extractor
/// configuration.
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let api = web::scope("/api")
        .app_data(json_config())
        .app_data(path_config())
        .service(list_users)
        .service(create_user)
        .service(get_user)
        .service(update_user)
        .service(delete_user);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .wrap(NormalizePath::trim())
        .service(api)
        .service(banner)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Build the pool, bootstrap the schema, and bind the HTTP server.
///
/// # Errors
/// Propagates [`std::io::Error`] when the pool cannot be built, the
/// schema bootstrap fails, or the socket cannot be bound.
pub async fn create_server(
    health_state: web::Data<HealthState>,
    config: &ServerConfig,
) -> std::io::Result<Server> {
    let pool_config =
        PoolConfig::new(&config.database_url).with_max_size(config.db_pool_max_size);
    let pool = DbPool::new(&pool_config).map_err(std::io::Error::other)?;

    let repository = DieselUserRepository::new(pool);
    repository
        .ensure_schema()
        .await
        .map_err(std::io::Error::other)?;

    let directory = UserDirectory::new(Arc::new(repository));
    let http_state = web::Data::new(HttpState::new(directory));

    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
