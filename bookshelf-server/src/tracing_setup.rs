//! Tracing setup for the bookshelf server
//!
//! Usage:
//!   bookshelf                             # info level, compact output
//!   RUST_LOG=bookshelf_server=debug bookshelf
//!
//! Environment variables:
//!   RUST_LOG                              # Log filter (default: info)

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Default filter when RUST_LOG is unset
const DEFAULT_FILTER: &str = "info";

/// Initialize tracing with console output
pub fn init() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
