//! Book endpoints
//!
//! Each handler runs one repository call. Update and delete never check
//! existence first: zero rows affected is reported as success.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::db::repos::{BookRepo, DbError};
use crate::http::error::ApiError;
use crate::http::extractors::{BookBody, BookId};
use crate::http::server::AppState;
use crate::models::{Book, BookPayload};

/// Confirmation body for non-entity responses
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// GET /books - list all books in storage order
async fn list_books(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Book>>, ApiError> {
    let books = BookRepo::new(&state.pool).list().await?;
    Ok(Json(books))
}

/// GET /books/{id} - get a single book
///
/// A bad id, a missing row, and a failed lookup all answer 404.
async fn get_book(
    State(state): State<Arc<AppState>>,
    id: Result<BookId, ApiError>,
) -> Result<Json<Book>, ApiError> {
    let BookId(id) = id.map_err(|_| ApiError::NotFound)?;

    match BookRepo::new(&state.pool).get(id).await {
        Ok(book) => Ok(Json(book)),
        Err(DbError::NotFound { .. }) => Err(ApiError::NotFound),
        Err(e) => {
            tracing::warn!(id, error = %e, "book lookup failed");
            Err(ApiError::NotFound)
        }
    }
}

/// POST /books - create a book, the store assigns the id
async fn create_book(
    State(state): State<Arc<AppState>>,
    BookBody(payload): BookBody,
) -> Result<(StatusCode, Json<Book>), ApiError> {
    let book = BookRepo::new(&state.pool).create(payload).await?;
    tracing::debug!(id = book.id, "book created");
    Ok((StatusCode::CREATED, Json(book)))
}

/// PUT /books/{id} - replace a book, the path id wins over any body id
async fn update_book_by_id(
    State(state): State<Arc<AppState>>,
    BookId(id): BookId,
    BookBody(payload): BookBody,
) -> Result<Json<Book>, ApiError> {
    apply_update(&state, id, payload).await
}

/// PUT /books - replace a book identified by the body id
async fn update_book(
    State(state): State<Arc<AppState>>,
    BookBody(payload): BookBody,
) -> Result<Json<Book>, ApiError> {
    let id = payload.id.ok_or(ApiError::InvalidRequest)?;
    apply_update(&state, id, payload).await
}

/// Shared by both update routes; echoes the payload stored under `id`.
async fn apply_update(
    state: &AppState,
    id: i64,
    payload: BookPayload,
) -> Result<Json<Book>, ApiError> {
    let affected = BookRepo::new(&state.pool).update(id, &payload).await?;
    if affected == 0 {
        tracing::debug!(id, "update matched no book");
    }

    Ok(Json(payload.into_book(id)))
}

/// DELETE /books/{id} - delete a book
async fn delete_book(
    State(state): State<Arc<AppState>>,
    BookId(id): BookId,
) -> Result<Json<MessageResponse>, ApiError> {
    let affected = BookRepo::new(&state.pool).delete(id).await?;
    if affected == 0 {
        tracing::debug!(id, "delete matched no book");
    }

    Ok(Json(MessageResponse {
        message: "Book deleted.",
    }))
}

/// Book routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/books",
            get(list_books).post(create_book).put(update_book),
        )
        .route(
            "/books/{id}",
            get(get_book).put(update_book_by_id).delete(delete_book),
        )
}
