//! Shared harness for database-backed tests
//!
//! Each test gets its own PostgreSQL schema (selected through
//! `search_path`) so the `books` table starts empty and concurrent tests
//! never see each other's rows.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use bookshelf_server::db::{create_pool_with_options, ensure_schema, ping};
use bookshelf_server::{build_router, AppState, DbConfig};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

static NEXT_SCHEMA: AtomicUsize = AtomicUsize::new(0);

pub struct TestApp {
    pub router: Router,
    pub pool: PgPool,
    admin: PgPool,
    schema: String,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("response body is not JSON")
    }
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(false).await
    }

    pub async fn spawn_with(expose_error_detail: bool) -> Self {
        let config = DbConfig::from_env().expect("invalid POSTGRES_* settings");
        let schema = format!(
            "bookshelf_test_{}_{}",
            std::process::id(),
            NEXT_SCHEMA.fetch_add(1, Ordering::SeqCst)
        );

        let admin = create_pool_with_options(config.connect_options(), 1)
            .await
            .expect("admin pool");
        sqlx::query(&format!("CREATE SCHEMA {}", schema))
            .execute(&admin)
            .await
            .expect("create test schema");

        let options = config
            .connect_options()
            .options([("search_path", schema.as_str())]);
        let pool = create_pool_with_options(options, 5)
            .await
            .expect("test pool");
        ping(&pool).await.expect("ping");
        ensure_schema(&pool).await.expect("ensure schema");

        let state = AppState::new(pool.clone(), Duration::from_secs(3), expose_error_detail);

        Self {
            router: build_router(state),
            pool,
            admin,
            schema,
        }
    }

    pub async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> TestResponse {
        let body = match body {
            Some(value) => Body::from(value.to_string()),
            None => Body::empty(),
        };
        let response = self
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(body)
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        TestResponse {
            status,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }

    pub async fn row_count(&self) -> i64 {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await
            .expect("count books");
        count
    }

    pub async fn cleanup(self) {
        self.pool.close().await;
        sqlx::query(&format!("DROP SCHEMA {} CASCADE", self.schema))
            .execute(&self.admin)
            .await
            .expect("drop test schema");
    }
}
