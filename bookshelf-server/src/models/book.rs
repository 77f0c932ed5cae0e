//! Book record and request payload

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Book row as stored in the `books` table.
///
/// `id` is assigned by the store on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub isbn: i64,
    pub author: String,
    pub release: i64,
}

/// Body accepted by create and update requests.
///
/// `id` may be omitted. Create ignores it, `PUT /books/{id}` overrides it
/// with the path value, and `PUT /books` requires it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BookPayload {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub isbn: i64,
    pub author: String,
    pub release: i64,
}

impl BookPayload {
    /// Build the record that results from storing this payload under `id`.
    pub fn into_book(self, id: i64) -> Book {
        Book {
            id,
            title: self.title,
            isbn: self.isbn,
            author: self.author,
            release: self.release,
        }
    }
}
