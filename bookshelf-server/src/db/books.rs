//! Book repository
//!
//! One statement per operation, no transactions:
//! - create: INSERT ... RETURNING id
//! - update/delete: zero affected rows means the id does not exist

use sqlx::PgPool;

use super::DbError;
use crate::models::{Book, NewBook};

/// Book repository
pub struct BookRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> BookRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a book and return it with the generated id.
    pub async fn create(&self, book: NewBook) -> Result<Book, DbError> {
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO books (title, author, year) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.year)
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(id, "inserted book");
        Ok(Book::from_new(id, book))
    }

    /// List every book, oldest id first.
    pub async fn list(&self) -> Result<Vec<Book>, DbError> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT id, title, author, year FROM books ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(books)
    }

    /// Get a single book by id.
    pub async fn get(&self, id: i64) -> Result<Book, DbError> {
        sqlx::query_as::<_, Book>("SELECT id, title, author, year FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(DbError::NotFound { id })
    }

    /// Overwrite title, author and year of an existing book.
    pub async fn update(&self, id: i64, book: &NewBook) -> Result<(), DbError> {
        let result =
            sqlx::query("UPDATE books SET title = $1, author = $2, year = $3 WHERE id = $4")
                .bind(&book.title)
                .bind(&book.author)
                .bind(book.year)
                .bind(id)
                .execute(self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound { id });
        }

        tracing::debug!(id, "updated book");
        Ok(())
    }

    /// Delete a book by id.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound { id });
        }

        tracing::debug!(id, "deleted book");
        Ok(())
    }
}
