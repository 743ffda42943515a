//! roster-server: student roster over HTTP
//!
//! Serves an HTML page listing stored students, a form endpoint that
//! appends a student, and a small JSON API over the same table.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, run_migrations, DbError, Student, StudentRepo};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
pub use models::{StudentName, ValidationError};
