//! Book record and its request payload

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{ValidationError, ValidationErrors};

/// A stored book, as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub year: i32,
}

impl Book {
    pub fn from_new(id: i64, book: NewBook) -> Self {
        Self {
            id,
            title: book.title,
            author: book.author,
            year: book.year,
        }
    }
}

/// Body of POST /books and PUT /books/{id}.
///
/// Missing fields decode to their defaults so that presence is reported by
/// `validate` rather than as a JSON error. An `id` in the body is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BookPayload {
    pub title: String,
    pub author: String,
    pub year: i32,
}

impl BookPayload {
    /// Check every field and return all violations at once.
    ///
    /// # Example
    /// ```
    /// use bookshelf_server::models::BookPayload;
    ///
    /// let payload = BookPayload { title: String::new(), author: String::new(), year: 2023 };
    /// assert_eq!(payload.validate().unwrap_err().len(), 2);
    /// ```
    pub fn validate(self) -> Result<NewBook, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.title.is_empty() {
            errors.push(ValidationError::Empty { field: "title" });
        }
        if self.author.is_empty() {
            errors.push(ValidationError::Empty { field: "author" });
        }
        errors.into_result()?;

        Ok(NewBook {
            title: self.title,
            author: self.author,
            year: self.year,
        })
    }
}

/// Validated field set used for inserts and updates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: i32,
}
