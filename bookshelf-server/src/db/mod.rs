//! Database layer - connection pool, schema setup and the book repository
//!
//! The pool is created once at startup and shared by every handler;
//! each repository call issues exactly one statement.

pub mod books;
pub mod pool;
pub mod schema;

use sqlx::PgPool;

use crate::config::DbConfig;

pub use books::BookRepo;
pub use pool::{create_pool, create_pool_with_options, ping};
pub use schema::ensure_schema;

/// Repository error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: book {id}")]
    NotFound { id: i64 },
}

/// Fatal startup failures, one variant per stage
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("failed to connect to PostgreSQL at {host}:{port}: {source}")]
    Connect {
        host: String,
        port: u16,
        source: sqlx::Error,
    },

    #[error("PostgreSQL is not responding: {0}")]
    Ping(sqlx::Error),

    #[error("failed to create books table: {0}")]
    Schema(sqlx::Error),
}

/// Open the pool, verify the server answers and ensure the schema exists.
pub async fn init(config: &DbConfig) -> Result<PgPool, StartupError> {
    tracing::info!(
        host = %config.host,
        port = config.port,
        database = %config.database,
        "Connecting to PostgreSQL"
    );

    let pool = create_pool(config)
        .await
        .map_err(|source| StartupError::Connect {
            host: config.host.clone(),
            port: config.port,
            source,
        })?;

    ping(&pool).await.map_err(StartupError::Ping)?;
    ensure_schema(&pool).await.map_err(StartupError::Schema)?;

    Ok(pool)
}
