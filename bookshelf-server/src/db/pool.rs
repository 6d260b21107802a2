//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{Connection, PgPool};

use crate::config::DbConfig;

/// Default maximum connections for the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the first connection cannot be established.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DbConfig::from_env()?).await?;
/// ```
pub async fn create_pool(config: &DbConfig) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(config.connect_options(), DEFAULT_MAX_CONNECTIONS).await
}

/// Create a PostgreSQL connection pool with custom options.
pub async fn create_pool_with_options(
    options: PgConnectOptions,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Liveness check: acquire a connection and ping the server.
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut conn = pool.acquire().await?;
    conn.ping().await
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a real database
    // Run with: POSTGRES_HOST=... cargo test -p bookshelf-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_answers_ping() {
        let config = DbConfig::from_env().expect("invalid POSTGRES_* settings");
        let pool = create_pool(&config).await.expect("pool creation failed");

        ping(&pool).await.expect("ping failed");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn concurrent_pool_access() {
        let config = DbConfig::from_env().expect("invalid POSTGRES_* settings");
        let pool = create_pool(&config).await.expect("pool creation failed");

        let handles: Vec<_> = (0..10)
            .map(|i| {
                let pool = pool.clone();
                tokio::spawn(async move {
                    let result: (i32,) = sqlx::query_as("SELECT $1::int")
                        .bind(i)
                        .fetch_one(&pool)
                        .await
                        .expect("concurrent query failed");
                    result.0
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let result = handle.await.expect("task panicked");
            assert_eq!(result, i as i32);
        }
    }
}
