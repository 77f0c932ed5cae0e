//! Domain models
//!
//! A single entity lives here: the book record and the body clients send for it.

pub mod book;

pub use book::{Book, BookPayload};
