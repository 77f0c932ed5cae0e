//! bookshelf - serves the book catalogue on a fixed loopback address

use anyhow::{Context, Result};

use bookshelf_server::{db, run_server, tracing_setup, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_setup::init()?;

    let config = ServerConfig::default();

    // No degraded mode: a database that cannot be opened or prepared stops the process
    let pool = match db::init(&config.db_path).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(path = %config.db_path.display(), error = %e, "database initialization failed");
            return Err(e).with_context(|| {
                format!("failed to initialize database at {}", config.db_path.display())
            });
        }
    };

    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
