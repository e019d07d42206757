//! Reporting endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::http::error::{ApiError, DbResultExt};
use crate::http::server::AppState;
use crate::models::CourseEnrollment;

/// GET /reports/course-enrollment - every course with its attendee count
async fn course_enrollment(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CourseEnrollment>>, ApiError> {
    let rows = state
        .store
        .course_enrollment()
        .await
        .or_api_error("Error generating enrollment report")?;

    Ok(Json(rows))
}

/// Report routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/reports/course-enrollment", get(course_enrollment))
}
