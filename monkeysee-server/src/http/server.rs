//! Axum server setup
//!
//! Server skeleton with:
//! - Permissive CORS with credentials (mirrors request origin)
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;

use axum::Router;
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::routes;
use crate::db;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:8000)
    pub bind_addr: SocketAddr,

    /// SQLite connection string
    pub database_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://monkeysee.db".to_string()),
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

/// Build the application router with all routes.
///
/// CORS is wildcard-with-credentials: tower-http refuses a literal `*`
/// origin combined with credentials, so `very_permissive()` mirrors the
/// request origin instead, which is what the deployed policy amounts to.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::very_permissive();

    Router::new()
        .merge(routes::health::router())
        .merge(routes::predictions::router())
        .merge(routes::rankings::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the HTTP server.
///
/// Opens the pool, ensures the schema, then serves until Ctrl+C or
/// SIGTERM.
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let pool = db::create_pool(&config.database_url).await?;
    db::migrations::run(&pool).await?;

    let state = AppState { pool };
    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);
    tracing::info!("Database: {}", config.database_url);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}
