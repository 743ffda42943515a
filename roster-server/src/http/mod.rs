//! HTTP server layer
//!
//! Axum server with:
//! - HTML list page and form intake
//! - JSON API and health check
//! - CORS (localhost only by default)
//! - Request tracing
//! - Graceful shutdown

pub mod error;
pub mod render;
pub mod routes;
pub mod server;

pub use error::{ApiError, PageError};
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
