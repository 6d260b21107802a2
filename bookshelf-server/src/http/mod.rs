//! HTTP server layer
//!
//! Axum server with:
//! - Request tracing
//! - Graceful shutdown
//! - Plain-text error responses

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use server::{build_router, run_server, ServerConfig, ServerError};
pub use state::AppState;
