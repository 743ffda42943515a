//! Axum server setup
//!
//! Server skeleton with:
//! - Localhost-only CORS by default
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes;
use crate::db::{run_migrations, DbError};

/// Default port, matching the usual development-server port for this app
pub const DEFAULT_PORT: u16 = 5000;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:5000)
    pub bind_addr: SocketAddr,

    /// Allow permissive CORS (default: false = localhost only)
    ///
    /// WARNING: Setting this to true allows any origin.
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT)),
            cors_permissive: false,
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

/// Build the application router with all routes and middleware.
pub fn build_router(pool: SqlitePool, config: &ServerConfig) -> Router {
    let cors = if config.cors_permissive {
        tracing::warn!("CORS: Permissive mode enabled - all origins allowed");
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(localhost_origins(config.bind_addr.port()))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .merge(routes::students::router())
        .merge(routes::api::router())
        .merge(routes::health::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(AppState { pool }))
}

fn localhost_origins(port: u16) -> Vec<HeaderValue> {
    ["localhost", "127.0.0.1"]
        .iter()
        .filter_map(|host| HeaderValue::from_str(&format!("http://{}:{}", host, port)).ok())
        .collect()
}

/// Create the schema and run the HTTP server until shutdown.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("sqlite://students.db").await?;
/// run_server(pool, ServerConfig::default()).await?;
/// ```
pub async fn run_server(pool: SqlitePool, config: ServerConfig) -> Result<(), ServerError> {
    run_migrations(&pool).await?;

    let app = build_router(pool, &config);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
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

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("migration failed: {0}")]
    Migration(#[from] DbError),
}
