//! bookshelf-server: HTTP CRUD service for book records
//!
//! Exposes create/list/get/update/delete over `/books` backed by a single
//! PostgreSQL table, with every database call bounded by a request timeout.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{ConfigError, DbConfig};
pub use db::{DbError, StartupError};
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
pub use models::{Book, BookPayload, NewBook};
