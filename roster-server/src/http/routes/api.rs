//! JSON API over the student table

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::db::{Student, StudentRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::StudentName;

/// Create student request
#[derive(Deserialize)]
pub struct CreateStudentRequest {
    pub name: String,
}

/// GET /api/students - list all students, oldest first
async fn list_students(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Student>>, ApiError> {
    let students = StudentRepo::new(&state.pool).list().await?;
    Ok(Json(students))
}

/// POST /api/students - create a student
async fn create_student(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateStudentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Student>), ApiError> {
    let Json(req) = body?;
    let name = StudentName::new(&req.name)?;
    let student = StudentRepo::new(&state.pool).create(&name).await?;

    tracing::info!(id = student.id, "Student created via API");
    Ok((StatusCode::CREATED, Json(student)))
}

/// API routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/students", get(list_students).post(create_student))
}
