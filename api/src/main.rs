//! CityInfo API Server
//!
//! Serves cities and their points of interest over HTTP, plus a small file
//! download/upload surface. Uses hexagonal (ports & adapters) architecture for
//! clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;
mod logging;
mod negotiation;
mod openapi;

#[cfg(test)]
mod test_utils;


use adapters::{
    database, CloudMailService, DatabaseCityInfoRepository, InMemoryCityInfoRepository,
    LocalMailService,
};
use app::{CityInfoService, FileService};
use config::{AppEnv, Config, MailBackend, StoreBackend};
use domain::ports::{CityInfoRepository, MailService};

/// Room for multipart boundaries and part headers on top of the file itself
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub type DynCityInfoService = CityInfoService<dyn CityInfoRepository, dyn MailService>;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub city_service: Arc<DynCityInfoService>,
    pub file_service: Arc<FileService>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the full router for the given state
///
/// `expose_openapi` adds the OpenAPI document route.
pub fn build_router(state: AppState, expose_openapi: bool) -> Router {
    let upload_limit = state.file_service.max_upload_bytes() + MULTIPART_OVERHEAD_BYTES;

    // JSON or XML resources, picked by Accept negotiation
    let city_routes = Router::new()
        .route("/cities", get(handlers::list_cities))
        .route("/cities/:city_id", get(handlers::get_city))
        .route(
            "/cities/:city_id/pointsofinterest",
            get(handlers::list_points_of_interest).post(handlers::create_point_of_interest),
        )
        .route(
            "/cities/:city_id/pointsofinterest/:id",
            get(handlers::get_point_of_interest)
                .put(handlers::update_point_of_interest)
                .patch(handlers::partially_update_point_of_interest)
                .delete(handlers::delete_point_of_interest),
        )
        .layer(middleware::from_fn(negotiation::negotiate_representation));

    let file_routes = Router::new()
        .route("/files/:file_id", get(handlers::get_file))
        .route(
            "/files",
            post(handlers::upload_file).layer(DefaultBodyLimit::max(upload_limit)),
        );

    let mut router = Router::new()
        .route("/health", get(health))
        .merge(city_routes)
        .merge(file_routes);

    if expose_openapi {
        router = router.route(openapi::OPENAPI_PATH, get(openapi::openapi_json));
    }

    router
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Pick the city store named by the configuration
async fn city_repository(config: &Config) -> anyhow::Result<Arc<dyn CityInfoRepository>> {
    match config.store_backend {
        StoreBackend::Memory => {
            tracing::info!("Using in-memory city store");
            Ok(Arc::new(InMemoryCityInfoRepository::seeded()))
        }
        StoreBackend::Database => {
            tracing::info!("Connecting to database...");
            let db = database::connect(&config.database_url)
                .await
                .context("Failed to connect to database")?;
            database::ensure_schema(&db)
                .await
                .context("Failed to prepare database schema")?;
            tracing::info!("Database connected");
            Ok(Arc::new(DatabaseCityInfoRepository::new(db)))
        }
    }
}

/// Pick the mail backend named by the configuration
fn mail_service(config: &Config) -> anyhow::Result<Arc<dyn MailService>> {
    match config.mail_backend {
        MailBackend::Local => Ok(Arc::new(LocalMailService::new(
            config.mail_to.clone(),
            config.mail_from.clone(),
        ))),
        MailBackend::Cloud => {
            let endpoint = config
                .cloud_mail_url
                .clone()
                .context("CLOUD_MAIL_URL must be set for the cloud mail backend")?;
            let mail = CloudMailService::new(
                endpoint,
                config.cloud_mail_api_key.clone(),
                config.mail_to.clone(),
                config.mail_from.clone(),
                config.mail_timeout,
            )
            .context("Failed to build mail client")?;
            Ok(Arc::new(mail))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration, it names the log directory
    let config = Config::from_env().context("Invalid configuration")?;

    // Initialize tracing, the guard flushes the log file on exit
    let _log_guard = logging::init(&config)?;

    tracing::info!("Starting CityInfo API...");
    tracing::info!(
        env = ?config.app_env,
        store = ?config.store_backend,
        mail = ?config.mail_backend,
        log_dir = %config.log_dir.display(),
        "Configuration loaded"
    );

    // Create adapters
    let cities = city_repository(&config).await?;
    let mail = mail_service(&config)?;

    // Create application services
    let city_service = Arc::new(CityInfoService::new(cities, mail));
    let file_service = Arc::new(FileService::new(
        config.sample_file_path.clone(),
        config.upload_dir.clone(),
        config.max_upload_bytes,
    ));

    let expose_openapi = config.app_env == AppEnv::Development;
    if expose_openapi {
        tracing::info!("Serving OpenAPI document at {}", openapi::OPENAPI_PATH);
    }

    let app = build_router(
        AppState {
            city_service,
            file_service,
        },
        expose_openapi,
    );

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .await
        .context("Server terminated unexpectedly")?;

    Ok(())
}
