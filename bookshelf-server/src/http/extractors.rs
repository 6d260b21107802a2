//! Custom Axum extractors
//!
//! Both reject with `ApiError` so malformed ids and bodies surface as
//! plain-text 400s instead of axum's default rejections.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Book id taken from the `{id}` path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookId(pub i64);

impl<S> FromRequestParts<S> for BookId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::InvalidId { raw: String::new() })?;

        parse_book_id(&raw).map(Self)
    }
}

/// Parse a path segment as a signed 64-bit book id.
pub fn parse_book_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>().map_err(|_| ApiError::InvalidId {
        raw: raw.to_owned(),
    })
}

/// JSON body decoded without requiring a `Content-Type` header
///
/// Failures to read the body keep axum's status (413 past the body limit);
/// only undecodable bytes are reported as invalid JSON.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::Body {
                status: e.status(),
                reason: e.body_text(),
            })?;

        serde_json::from_slice(&bytes)
            .map(Self)
            .map_err(|e| ApiError::InvalidJson {
                reason: e.to_string(),
            })
    }
}
