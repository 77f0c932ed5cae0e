//! bookshelf-server: HTTP CRUD service for a book catalogue
//!
//! Maps REST routes onto single SQL statements against a SQLite file.
//! The connection pool is built once at startup and handed to the router.

pub mod db;
pub mod http;
pub mod models;
pub mod tracing_setup;

pub use http::{build_router, run_server, ServerConfig};
pub use models::{Book, BookPayload};
