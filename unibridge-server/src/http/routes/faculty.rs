//! Faculty endpoints
//!
//! Unlike the other resources these answer in plain text on success and
//! failure; listing is still JSON.

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::http::error::{ApiError, DbResultExt, TextError};
use crate::http::extractors::ValidJson;
use crate::http::server::AppState;
use crate::models::{AddFacultyRequest, Faculty, NewFaculty};

/// POST /add_faculty
async fn add_faculty(
    State(state): State<Arc<AppState>>,
    payload: Result<ValidJson<AddFacultyRequest>, ApiError>,
) -> Result<&'static str, TextError> {
    let ValidJson(req) = payload?;
    let faculty = NewFaculty::try_from(req)?;

    state
        .store
        .insert_faculty(&faculty)
        .await
        .or_api_error("Error adding faculty")?;

    tracing::info!(faculty_name = %faculty.faculty_name, "Faculty added");
    Ok("Faculty added!")
}

/// GET /get_faculty - all faculty in store order
async fn get_faculty(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Faculty>>, TextError> {
    let faculty = state
        .store
        .list_faculty()
        .await
        .or_api_error("Error fetching faculty")?;

    Ok(Json(faculty))
}

/// Faculty routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/add_faculty", post(add_faculty))
        .route("/get_faculty", get(get_faculty))
}
