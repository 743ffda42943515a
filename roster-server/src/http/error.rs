//! Error types with IntoResponse
//!
//! `ApiError` renders JSON for the API routes; `PageError` renders an
//! HTML error page for the browser routes.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde_json::json;

use super::render;
use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Request body could not be read as the expected JSON (400)
    BadRequest { message: String },

    /// Database error (500, logged)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "validation_error",
                    "message": e.to_string()
                }),
            ),
            Self::BadRequest { message } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "bad_request",
                    "message": message
                }),
            ),
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "internal_error",
                        "message": "an internal error occurred"
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        Self::BadRequest {
            message: e.body_text(),
        }
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}

/// Failure while rendering an HTML page (500, logged)
#[derive(Debug)]
pub struct PageError(pub DbError);

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::error!("Database error: {}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(render::error_page("Could not load students.")),
        )
            .into_response()
    }
}

impl From<DbError> for PageError {
    fn from(e: DbError) -> Self {
        Self(e)
    }
}
