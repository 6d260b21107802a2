//! Book endpoints
//!
//! `/books` serves create and list, `/books/{id}` serves get, update and
//! delete. Any other method on either path is a 405 with a text body.
//! HEAD is registered explicitly; `get` would otherwise answer it by
//! running the GET handler.

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};

use crate::db::BookRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{BookId, JsonBody};
use crate::http::state::AppState;
use crate::models::{Book, BookPayload};

/// POST /books - create a new book
async fn create_book(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<BookPayload>,
) -> Result<Json<Book>, ApiError> {
    let book = payload.validate()?;
    let created = state
        .bounded("failed to insert book", BookRepo::new(state.pool()).create(book))
        .await?;

    tracing::info!(id = created.id, "Book created");
    Ok(Json(created))
}

/// GET /books - list all books
async fn list_books(State(state): State<AppState>) -> Result<Json<Vec<Book>>, ApiError> {
    let books = state
        .bounded("failed to list books", BookRepo::new(state.pool()).list())
        .await?;

    Ok(Json(books))
}

/// GET /books/{id} - get a single book
async fn get_book(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> Result<Json<Book>, ApiError> {
    let book = state
        .bounded("failed to get book", BookRepo::new(state.pool()).get(id))
        .await?;

    Ok(Json(book))
}

/// PUT /books/{id} - overwrite title, author and year
async fn update_book(
    State(state): State<AppState>,
    BookId(id): BookId,
    JsonBody(payload): JsonBody<BookPayload>,
) -> Result<String, ApiError> {
    let book = payload.validate()?;
    state
        .bounded("failed to update book", BookRepo::new(state.pool()).update(id, &book))
        .await?;

    tracing::info!(id, "Book updated");
    Ok(format!("book {} updated\n", id))
}

/// DELETE /books/{id} - delete a book
async fn delete_book(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> Result<String, ApiError> {
    state
        .bounded("failed to delete book", BookRepo::new(state.pool()).delete(id))
        .await?;

    tracing::info!(id, "Book deleted");
    Ok(format!("book {} deleted\n", id))
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Book routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/books",
            get(list_books)
                .head(method_not_allowed)
                .post(create_book)
                .fallback(method_not_allowed),
        )
        .route(
            "/books/{id}",
            get(get_book)
                .head(method_not_allowed)
                .put(update_book)
                .delete(delete_book)
                .fallback(method_not_allowed),
        )
}
