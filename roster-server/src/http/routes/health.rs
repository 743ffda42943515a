//! Health check endpoint

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub database: &'static str,
}

/// GET /health
///
/// 200 when the database answers a trivial query, 503 otherwise.
async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    let reachable = sqlx::query("SELECT 1").execute(&state.pool).await;

    let (status, code, database) = match reachable {
        Ok(_) => ("ok", StatusCode::OK, "ok"),
        Err(e) => {
            tracing::warn!(error = %e, "Health check: database unreachable");
            ("degraded", StatusCode::SERVICE_UNAVAILABLE, "unreachable")
        }
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            database,
        }),
    )
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}
