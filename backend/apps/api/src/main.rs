//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod config;
mod handlers;

use auth::PgAdminRepository;
use auth::middleware::{admin_page_guard, require_admin};
use auth::router::auth_router;
use axum::{
    Router, http,
    http::{Method, header},
    middleware,
    routing::get,
};
use content::PgContentRepository;
use content::router::{admin_content_router, public_content_router};
use media::router::media_router;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppEnv;
use crate::handlers::EnvReport;

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,auth=info,content=info,media=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Environment snapshot; everything below gets explicit config structs
    let env = AppEnv::from_env()?;

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&env.database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    let auth_config = Arc::new(env.auth_config());
    let media_config = Arc::new(env.media_config());

    let admin_repo = PgAdminRepository::new(pool.clone());
    let content_repo = PgContentRepository::new(pool.clone());

    let env_report = Arc::new(EnvReport {
        imagekit_public_key: !env.imagekit_public_key.is_empty(),
        imagekit_private_key: !env.imagekit_private_key.is_empty(),
        imagekit_url_endpoint: !env.imagekit_url_endpoint.is_empty(),
        app_env: if env.production {
            "production".to_string()
        } else {
            "development".to_string()
        },
    });

    // CORS configuration
    let allowed_origins: Vec<http::HeaderValue> = env
        .frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Mutating content routes sit behind the verified-token middleware;
    // the public reads stay open
    let content_routes = public_content_router(content_repo.clone()).merge(
        admin_content_router(content_repo).route_layer(middleware::from_fn_with_state(
            auth_config.clone(),
            require_admin,
        )),
    );

    let upload_routes = media_router(media_config).route_layer(middleware::from_fn_with_state(
        auth_config.clone(),
        require_admin,
    ));

    // Build router
    let app = Router::new()
        .nest("/api/admin", auth_router(admin_repo, auth_config.clone()))
        .nest("/api", content_routes)
        .nest("/api/upload", upload_routes)
        .route(
            "/api/health",
            get(handlers::health).with_state(env_report),
        )
        // Cookie-presence page guard over the admin prefix
        .layer(middleware::from_fn_with_state(
            auth_config,
            admin_page_guard,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], 8080));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
