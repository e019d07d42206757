//! Health check endpoint

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::error::{DbResultExt, HealthError};
use crate::http::server::AppState;

/// Health check response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub ok: bool,
    /// Configured database name
    pub db: String,
    pub student_count: i64,
}

/// GET /api/health - confirms the store answers a query
async fn health(State(state): State<Arc<AppState>>) -> Result<Json<HealthResponse>, HealthError> {
    let student_count = state
        .store
        .student_count()
        .await
        .or_api_error("Database unavailable")?;

    Ok(Json(HealthResponse {
        ok: true,
        db: state.database_name.clone(),
        student_count,
    }))
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/health", get(health))
}
