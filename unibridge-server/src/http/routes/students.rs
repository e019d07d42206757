//! Student endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post, put},
    Json, Router,
};

use crate::http::error::{ApiError, DbResultExt};
use crate::http::extractors::{ValidJson, ValidStudentNum};
use crate::http::server::AppState;
use crate::http::MessageResponse;
use crate::models::{AddStudentRequest, ContactUpdate, NewStudent, Student, UpdateContactRequest};

/// POST /add_user - insert a student
async fn add_user(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<AddStudentRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let student = NewStudent::try_from(req)?;

    state
        .store
        .insert_student(&student)
        .await
        .or_api_error("Database insert error")?;

    tracing::info!(student_num = %student.student_num, "Student added");
    Ok(Json(MessageResponse::new("User added successfully!")))
}

/// GET /get_users - all students by last name, first name
async fn get_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Student>>, ApiError> {
    let students = state
        .store
        .list_students()
        .await
        .or_api_error("Database fetch error")?;

    Ok(Json(students))
}

/// PUT /students/{studentNum} - replace contact email and phone
async fn update_student(
    State(state): State<Arc<AppState>>,
    ValidStudentNum(student_num): ValidStudentNum,
    ValidJson(req): ValidJson<UpdateContactRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let contact = ContactUpdate::try_from(req)?;

    state
        .store
        .update_student_contact(&student_num, &contact)
        .await
        .or_api_error("Database update error")?;

    tracing::info!(%student_num, "Student contact updated");
    Ok(Json(MessageResponse::new("Student updated successfully")))
}

/// DELETE /students/{studentNum}
async fn delete_student(
    State(state): State<Arc<AppState>>,
    ValidStudentNum(student_num): ValidStudentNum,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .store
        .delete_student(&student_num)
        .await
        .or_api_error("Database delete error")?;

    tracing::info!(%student_num, "Student deleted");
    Ok(Json(MessageResponse::new("Student deleted successfully")))
}

/// Student routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/add_user", post(add_user))
        .route("/get_users", get(get_users))
        .route("/students/{studentNum}", put(update_student).delete(delete_student))
}
