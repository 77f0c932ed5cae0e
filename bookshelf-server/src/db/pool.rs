//! Database connection pool management
//!
//! Uses sqlx SqlitePool over a single file. The schema is created at
//! startup if it does not exist yet.

use std::path::Path;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// How long a request waits for a free connection. Effectively unbounded:
/// a saturated pool queues callers instead of failing them.
pub const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(60 * 60 * 24 * 365);

const CREATE_BOOKS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS books(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT,
        isbn INTEGER,
        author TEXT,
        release INTEGER
    )
"#;

/// Open (or create) the database file and build a pool over it.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or created.
pub async fn create_pool(path: &Path) -> Result<SqlitePool, sqlx::Error> {
    create_pool_with_options(path, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a SQLite connection pool with custom options.
///
/// # Arguments
///
/// * `path` - Database file, created if missing
/// * `max_connections` - Maximum number of connections in the pool
///
/// Callers beyond `max_connections` wait for a free connection up to
/// [`ACQUIRE_TIMEOUT`].
pub async fn create_pool_with_options(
    path: &Path,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_with(options)
        .await
}

/// Create the `books` table if it is absent. Safe to run repeatedly.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_BOOKS_TABLE).execute(pool).await?;
    Ok(())
}

/// Open the database at `path` and make sure the schema exists.
///
/// There is no degraded mode: callers treat any error here as fatal.
///
/// # Example
///
/// ```ignore
/// let pool = init(Path::new("books.db")).await?;
/// ```
pub async fn init(path: &Path) -> Result<SqlitePool, sqlx::Error> {
    let pool = create_pool(path).await?;
    ensure_schema(&pool).await?;
    tracing::info!(path = %path.display(), "database ready");
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn init_creates_file_and_table() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("books.db");

        let pool = init(&path).await.expect("init failed");
        assert!(path.exists());

        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'books'",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn ensure_schema_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let pool = init(&dir.path().join("books.db")).await.unwrap();

        ensure_schema(&pool).await.expect("second run failed");
        ensure_schema(&pool).await.expect("third run failed");
    }

    #[tokio::test]
    async fn init_fails_for_unreachable_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("books.db");

        assert!(init(&path).await.is_err());
    }

    #[tokio::test]
    async fn pool_respects_connection_cap() {
        let dir = TempDir::new().unwrap();
        let pool = create_pool(&dir.path().join("books.db")).await.unwrap();

        assert_eq!(pool.options().get_max_connections(), DEFAULT_MAX_CONNECTIONS);
        assert_eq!(pool.options().get_acquire_timeout(), ACQUIRE_TIMEOUT);
    }

    #[tokio::test]
    async fn saturated_pool_waits_for_release() {
        let dir = TempDir::new().unwrap();
        let pool = create_pool_with_options(&dir.path().join("books.db"), 1)
            .await
            .unwrap();

        let held = pool.acquire().await.unwrap();
        let waiter = {
            let pool = pool.clone();
            tokio::spawn(async move {
                let (value,): (i64,) = sqlx::query_as("SELECT 1").fetch_one(&pool).await.unwrap();
                value
            })
        };

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(!waiter.is_finished());

        drop(held);
        assert_eq!(waiter.await.unwrap(), 1);
    }

    #[tokio::test]
    async fn concurrent_pool_access() {
        let dir = TempDir::new().unwrap();
        let pool = create_pool(&dir.path().join("books.db")).await.unwrap();

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let pool = pool.clone();
                tokio::spawn(async move {
                    let (value,): (i64,) = sqlx::query_as("SELECT ?")
                        .bind(i as i64)
                        .fetch_one(&pool)
                        .await
                        .expect("concurrent query failed");
                    value
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let value = handle.await.expect("task panicked");
            assert_eq!(value, i as i64);
        }
    }
}
