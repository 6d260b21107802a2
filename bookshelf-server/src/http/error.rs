//! API error types with IntoResponse
//!
//! Every error becomes a plain-text body with the matching status code.
//! Database failures are logged in full; the driver's message reaches the
//! client only when detail exposure is switched on.

use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::db::DbError;
use crate::models::ValidationErrors;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Path id is not a 64-bit integer (400)
    InvalidId { raw: String },

    /// Body is not valid JSON for the expected shape (400)
    InvalidJson { reason: String },

    /// Body could not be read at all, e.g. over the size limit (status from axum)
    Body { status: StatusCode, reason: String },

    /// Payload failed validation (400)
    Validation(ValidationErrors),

    /// No book with this id (404)
    NotFound { id: i64 },

    /// Method not routed for a known path (405)
    MethodNotAllowed,

    /// Database error (500, logged)
    Database {
        action: &'static str,
        source: DbError,
        expose: bool,
    },

    /// Database work exceeded the request deadline (500, logged)
    Timeout {
        action: &'static str,
        after: Duration,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidId { .. } | Self::InvalidJson { .. } | Self::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Body { status, .. } => *status,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Database { .. } | Self::Timeout { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::InvalidId { raw } => format!("invalid book id: '{}'", raw),
            Self::InvalidJson { reason } => format!("invalid JSON: {}", reason),
            Self::Body { reason, .. } => reason.clone(),
            Self::Validation(errors) => format!("validation failed: {}", errors),
            Self::NotFound { id } => format!("book {} not found", id),
            Self::MethodNotAllowed => "method not allowed".to_owned(),
            Self::Database {
                action,
                source,
                expose,
            } => {
                if *expose {
                    format!("{}: {}", action, source)
                } else {
                    (*action).to_owned()
                }
            }
            Self::Timeout { action, after } => {
                format!("{}: timed out after {:?}", action, after)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Database { action, source, .. } => {
                tracing::error!(action = %action, error = %source, "Database error");
            }
            Self::Timeout { action, after } => {
                tracing::error!(action = %action, timeout = ?after, "Database operation timed out");
            }
            _ => {}
        }

        (self.status(), self.message()).into_response()
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(e: ValidationErrors) -> Self {
        Self::Validation(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn invalid_id_is_400() {
        let err = ApiError::InvalidId { raw: "abc".into() };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "invalid book id: 'abc'");
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let response = ApiError::NotFound { id: 999999 }.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, "book 999999 not found");
    }

    #[tokio::test]
    async fn method_not_allowed_is_405_with_text() {
        let response = ApiError::MethodNotAllowed.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body_text(response).await, "method not allowed");
    }

    #[tokio::test]
    async fn database_error_hides_detail_by_default() {
        let err = ApiError::Database {
            action: "failed to list books",
            source: DbError::Sqlx(sqlx::Error::RowNotFound),
            expose: false,
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, "failed to list books");
    }

    #[tokio::test]
    async fn database_error_exposes_detail_when_enabled() {
        let err = ApiError::Database {
            action: "failed to list books",
            source: DbError::Sqlx(sqlx::Error::RowNotFound),
            expose: true,
        };
        let body = body_text(err.into_response()).await;
        assert!(body.starts_with("failed to list books: database error:"));
    }

    #[tokio::test]
    async fn timeout_is_500() {
        let err = ApiError::Timeout {
            action: "failed to get book",
            after: Duration::from_secs(3),
        };
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
