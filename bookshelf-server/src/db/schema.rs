//! Idempotent schema setup for the books table

use sqlx::PgPool;

/// Create the `books` table if it does not exist yet.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring books table exists");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS books (
            id BIGSERIAL PRIMARY KEY,
            title VARCHAR(255) NOT NULL,
            author VARCHAR(255) NOT NULL,
            year INT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
