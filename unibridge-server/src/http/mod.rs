//! HTTP server layer
//!
//! Axum server with:
//! - CORS (localhost only by default)
//! - Request tracing
//! - Graceful shutdown
//! - Centralized error translation

pub mod server;
pub mod error;
pub mod extractors;
pub mod routes;

use serde::Serialize;

pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
pub use error::{ApiError, DbResultExt, HealthError, TextError};

/// Confirmation payload for mutating JSON operations
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}
