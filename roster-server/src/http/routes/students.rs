//! Browser routes: student list page and form intake

use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};
use sqlx::SqlitePool;

use crate::db::{DbError, Student, StudentRepo};
use crate::http::error::PageError;
use crate::http::render;
use crate::http::server::AppState;
use crate::models::{StudentName, ValidationError};

/// Form field carrying the new student's name
pub const STUDENT_FIELD: &str = "student";

/// Raw form body as ordered key/value pairs.
///
/// Repeated keys are allowed; the first occurrence wins.
pub type FormPairs = Vec<(String, String)>;

/// Why a form submission did not produce a row
#[derive(Debug, thiserror::Error)]
enum AddStudentError {
    #[error("form field 'student' is missing")]
    MissingField,

    #[error("form rejected: {0}")]
    Form(#[from] FormRejection),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Database(#[from] DbError),
}

/// GET / - render all students
async fn list_students(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    let students = StudentRepo::new(&state.pool).list().await?;
    tracing::debug!(count = students.len(), "Rendering student list");
    Ok(Html(render::student_list_page(&students)))
}

/// POST /student - append a student, then send the browser back to the list.
///
/// Failures are logged, never shown; the redirect happens either way.
async fn add_student(
    State(state): State<Arc<AppState>>,
    form: Result<Form<FormPairs>, FormRejection>,
) -> Response {
    match insert_from_form(&state.pool, form).await {
        Ok(student) => {
            tracing::info!(id = student.id, "Student added");
        }
        Err(AddStudentError::Database(e)) => {
            tracing::error!(error = %e, "Failed to add student");
        }
        Err(e) => {
            tracing::warn!(error = %e, "Rejected student submission");
        }
    }

    redirect_home()
}

async fn insert_from_form(
    pool: &SqlitePool,
    form: Result<Form<FormPairs>, FormRejection>,
) -> Result<Student, AddStudentError> {
    let Form(pairs) = form?;
    let raw = first_value(&pairs, STUDENT_FIELD).ok_or(AddStudentError::MissingField)?;
    let name = StudentName::new(raw)?;
    tracing::debug!(name = %name, "Adding student");
    Ok(StudentRepo::new(pool).create(&name).await?)
}

fn first_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// 302 Found to `/`
fn redirect_home() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response()
}

/// Browser routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_students))
        .route("/student", post(add_student))
}
