//! Book repository
//!
//! - list: full table scan in storage order (no ORDER BY)
//! - update/delete: no existence check, rows affected is returned as-is

use sqlx::SqlitePool;

use crate::models::{Book, BookPayload};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: book {id}")]
    NotFound { id: i64 },
}

/// Book repository
pub struct BookRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> BookRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List every book. An empty table yields an empty vec.
    pub async fn list(&self) -> Result<Vec<Book>, DbError> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT id, title, isbn, author, release FROM books",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(books)
    }

    /// Get a single book by id.
    pub async fn get(&self, id: i64) -> Result<Book, DbError> {
        sqlx::query_as::<_, Book>(
            "SELECT id, title, isbn, author, release FROM books WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound { id })
    }

    /// Insert a book and return it with the id the store assigned.
    ///
    /// Any id carried by the payload is ignored.
    pub async fn create(&self, payload: BookPayload) -> Result<Book, DbError> {
        let result = sqlx::query(
            "INSERT INTO books (title, isbn, author, release) VALUES (?, ?, ?, ?)",
        )
        .bind(&payload.title)
        .bind(payload.isbn)
        .bind(&payload.author)
        .bind(payload.release)
        .execute(self.pool)
        .await?;

        Ok(payload.into_book(result.last_insert_rowid()))
    }

    /// Replace every non-id field of the book with `id`.
    ///
    /// Returns the number of rows affected, which is 0 when `id` does not exist.
    pub async fn update(&self, id: i64, payload: &BookPayload) -> Result<u64, DbError> {
        let result = sqlx::query(
            "UPDATE books SET title = ?, isbn = ?, author = ?, release = ? WHERE id = ?",
        )
        .bind(&payload.title)
        .bind(payload.isbn)
        .bind(&payload.author)
        .bind(payload.release)
        .bind(id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete the book with `id`. Returns rows affected (0 if it did not exist).
    pub async fn delete(&self, id: i64) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
