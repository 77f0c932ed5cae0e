//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - One shared pool (max 10 connections), passed in explicitly, never global
//! - One SQL statement per repository call
//! - Concurrent writers are serialized by SQLite itself

pub mod pool;
pub mod repos;

pub use pool::{create_pool, ensure_schema, init};
pub use repos::*;
