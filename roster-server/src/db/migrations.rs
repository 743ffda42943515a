//! Schema setup for the student table

use sqlx::SqlitePool;

use super::repos::DbError;

/// Create the `student` table if it does not exist.
///
/// Safe to run on every startup.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), DbError> {
    tracing::info!("Running migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS student (
            id INTEGER PRIMARY KEY,
            name VARCHAR(255) NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Migrations complete");
    Ok(())
}
