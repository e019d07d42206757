//! Professor teaching-load endpoint

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::http::error::{ApiError, DbResultExt};
use crate::http::extractors::ValidProfessorId;
use crate::http::server::AppState;
use crate::models::Course;

/// GET /professors/{professorID}/courses
async fn professor_courses(
    State(state): State<Arc<AppState>>,
    ValidProfessorId(professor_id): ValidProfessorId,
) -> Result<Json<Vec<Course>>, ApiError> {
    let courses = state
        .store
        .courses_for_professor(&professor_id)
        .await
        .or_api_error("Error fetching courses for professor")?;

    Ok(Json(courses))
}

/// Professor routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/professors/{professorID}/courses", get(professor_courses))
}
