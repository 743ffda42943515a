//! Student repository
//!
//! - create: single INSERT ... RETURNING
//! - list: all rows in insertion (id) order

use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use crate::models::StudentName;

/// Student record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Student repository
pub struct StudentRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> StudentRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a student, returning the stored row with its assigned id.
    pub async fn create(&self, name: &StudentName) -> Result<Student, DbError> {
        let student = sqlx::query_as::<_, Student>(
            "INSERT INTO student (name) VALUES (?) RETURNING id, name",
        )
        .bind(name.as_str())
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(id = student.id, "Student inserted");
        Ok(student)
    }

    /// List every student, oldest first.
    pub async fn list(&self) -> Result<Vec<Student>, DbError> {
        let students = sqlx::query_as::<_, Student>("SELECT id, name FROM student ORDER BY id")
            .fetch_all(self.pool)
            .await?;

        Ok(students)
    }

    /// Number of stored students.
    pub async fn count(&self) -> Result<i64, DbError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM student")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
