use std::sync::{Arc, Mutex};

use anyhow::Context;
use axum::http::HeaderValue;
use axum::routing::{delete, get, patch, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use venuebook::config::AppConfig;
use venuebook::db;
use venuebook::handlers;
use venuebook::services::auth;
use venuebook::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let conn = db::init_db(&config.database_url)?;
    auth::ensure_admin_user(&conn, &config)?;

    let cors = if config.cors_origin == "*" {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origin: HeaderValue = config
            .cors_origin
            .parse()
            .context("CORS_ORIGIN is not a valid header value")?;
        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let state = Arc::new(AppState {
        db: Arc::new(Mutex::new(conn)),
        config: config.clone(),
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/venue", get(handlers::catalog::get_venue))
        .route("/api/menu", get(handlers::catalog::get_menu))
        .route("/api/slots", get(handlers::catalog::get_slots))
        .route("/api/estimate", get(handlers::booking::get_estimate))
        .route("/api/bookings", post(handlers::booking::create_booking))
        .route("/api/contact", post(handlers::contact::create_contact))
        .route("/api/auth/login", post(handlers::auth::login))
        .route("/api/auth/logout", post(handlers::auth::logout))
        .route("/api/admin/stats", get(handlers::admin::get_stats))
        .route("/api/admin/bookings", get(handlers::admin::get_bookings))
        .route("/api/admin/contacts", get(handlers::admin::get_contacts))
        .route(
            "/api/admin/bookings/:id/status",
            patch(handlers::admin::update_booking_status),
        )
        .route(
            "/api/admin/bookings/:id",
            delete(handlers::admin::delete_booking),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
