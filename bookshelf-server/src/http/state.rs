//! Application state shared across handlers

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use sqlx::PgPool;

use super::error::ApiError;
use crate::db::DbError;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    pool: PgPool,
    request_timeout: Duration,
    expose_error_detail: bool,
}

impl AppState {
    pub fn new(pool: PgPool, request_timeout: Duration, expose_error_detail: bool) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                pool,
                request_timeout,
                expose_error_detail,
            }),
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    pub fn request_timeout(&self) -> Duration {
        self.inner.request_timeout
    }

    pub fn expose_error_detail(&self) -> bool {
        self.inner.expose_error_detail
    }

    /// Run one repository call under the request deadline.
    ///
    /// Dropping the future on timeout cancels the in-flight statement and
    /// hands its connection back to the pool. `action` names the operation
    /// in the 500 body and in the log line.
    pub async fn bounded<T, F>(&self, action: &'static str, operation: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, DbError>>,
    {
        match tokio::time::timeout(self.request_timeout(), operation).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(DbError::NotFound { id })) => Err(ApiError::NotFound { id }),
            Ok(Err(source)) => Err(ApiError::Database {
                action,
                source,
                expose: self.expose_error_detail(),
            }),
            Err(_) => Err(ApiError::Timeout {
                action,
                after: self.request_timeout(),
            }),
        }
    }
}
