//! Store abstraction consumed by the HTTP layer
//!
//! One method per catalog operation. Each implementation sends exactly one
//! statement per call; no retries, no multi-statement transactions.

use async_trait::async_trait;

use crate::models::{
    ContactUpdate, Course, CourseEnrollment, Faculty, NewFaculty, NewStudent, ProfessorId, Student,
    StudentNum,
};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("constraint violation: {0}")]
    Constraint(String),

    #[error("store unavailable")]
    Unavailable,
}

/// Access to the university schema
#[async_trait]
pub trait UniversityStore: Send + Sync {
    /// `SELECT COUNT(*) FROM student`
    async fn student_count(&self) -> Result<i64, DbError>;

    async fn insert_student(&self, student: &NewStudent) -> Result<(), DbError>;

    /// All students ordered by last name, then first name.
    async fn list_students(&self) -> Result<Vec<Student>, DbError>;

    /// Replace email and phone; `NotFound` when no row matched.
    async fn update_student_contact(
        &self,
        student_num: &StudentNum,
        contact: &ContactUpdate,
    ) -> Result<(), DbError>;

    /// `NotFound` when no row matched.
    async fn delete_student(&self, student_num: &StudentNum) -> Result<(), DbError>;

    /// Courses linked to the professor through `teaches`, ordered by course id.
    async fn courses_for_professor(&self, professor_id: &ProfessorId)
        -> Result<Vec<Course>, DbError>;

    /// Every course with its attendee count, busiest first, ties by course id.
    async fn course_enrollment(&self) -> Result<Vec<CourseEnrollment>, DbError>;

    async fn insert_faculty(&self, faculty: &NewFaculty) -> Result<(), DbError>;

    /// All faculty in store order.
    async fn list_faculty(&self) -> Result<Vec<Faculty>, DbError>;
}
