//! Database connection pool management
//!
//! Uses sqlx SqlitePool with explicit connection limits. The database
//! file is created on first connect if it does not exist yet.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Default maximum connections for the pool.
/// Kept low for single-user tooling.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a SQLite connection pool.
///
/// # Arguments
///
/// * `database_url` - SQLite connection string (`sqlite://students.db`, `sqlite::memory:`)
///
/// # Errors
///
/// Returns an error if the URL is malformed or the file cannot be opened.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("sqlite://students.db").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a SQLite connection pool with custom options.
///
/// In-memory databases live per connection, so callers using
/// `sqlite::memory:` should pass `max_connections = 1`.
///
/// # Arguments
///
/// * `database_url` - SQLite connection string
/// * `max_connections` - Maximum number of connections in the pool
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    tracing::debug!(database_url, max_connections, "Opening sqlite pool");

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn pool_acquires_connection() {
        let pool = create_pool_with_options("sqlite::memory:", 1)
            .await
            .expect("pool creation failed");

        let result: (i64,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    async fn creates_missing_database_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("students.db");
        assert!(!path.exists());

        let url = format!("sqlite://{}", path.display());
        let pool = create_pool(&url).await.expect("pool creation failed");
        sqlx::query("SELECT 1")
            .execute(&pool)
            .await
            .expect("query failed");

        assert!(path.exists());
    }
}
