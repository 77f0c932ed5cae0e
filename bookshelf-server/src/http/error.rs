//! API error types with IntoResponse
//!
//! Every error becomes a `{"message": ...}` body with a fixed text.
//! Storage details are logged, never returned.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Body missing, malformed, or of the wrong shape (400)
    InvalidRequest,

    /// Path id is not an integer (400)
    InvalidId,

    /// Book lookup failed (404)
    NotFound,

    /// Database error (500, logged)
    Database(DbError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest | Self::InvalidId => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "Invalid request.",
            Self::InvalidId => "Invalid book ID.",
            Self::NotFound => "Book not found.",
            Self::Database(_) => "Database error.",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Database(e) = &self {
            tracing::error!("Database error: {}", e);
        }

        let body = json!({ "message": self.message() });
        (self.status(), Json(body)).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { .. } => Self::NotFound,
            _ => Self::Database(e),
        }
    }
}
