//! Repository implementations for database access
//!
//! Each repository call issues exactly one statement. Update and delete
//! report rows affected and leave it to the caller to decide what zero means.

pub mod books;

pub use books::{BookRepo, DbError};
