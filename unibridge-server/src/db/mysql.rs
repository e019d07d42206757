//! MySQL-backed store

use async_trait::async_trait;
use sqlx::MySqlPool;

use super::repos::{CourseRepo, FacultyRepo, StudentRepo};
use super::{DbError, UniversityStore};
use crate::models::{
    ContactUpdate, Course, CourseEnrollment, Faculty, NewFaculty, NewStudent, ProfessorId, Student,
    StudentNum,
};

/// `UniversityStore` over a shared connection pool.
///
/// Cloning is cheap; clones share the same pool.
#[derive(Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

#[async_trait]
impl UniversityStore for MySqlStore {
    async fn student_count(&self) -> Result<i64, DbError> {
        StudentRepo::new(&self.pool).count().await
    }

    async fn insert_student(&self, student: &NewStudent) -> Result<(), DbError> {
        StudentRepo::new(&self.pool).insert(student).await
    }

    async fn list_students(&self) -> Result<Vec<Student>, DbError> {
        StudentRepo::new(&self.pool).list().await
    }

    async fn update_student_contact(
        &self,
        student_num: &StudentNum,
        contact: &ContactUpdate,
    ) -> Result<(), DbError> {
        StudentRepo::new(&self.pool)
            .update_contact(student_num, contact)
            .await
    }

    async fn delete_student(&self, student_num: &StudentNum) -> Result<(), DbError> {
        StudentRepo::new(&self.pool).delete(student_num).await
    }

    async fn courses_for_professor(
        &self,
        professor_id: &ProfessorId,
    ) -> Result<Vec<Course>, DbError> {
        CourseRepo::new(&self.pool).for_professor(professor_id).await
    }

    async fn course_enrollment(&self) -> Result<Vec<CourseEnrollment>, DbError> {
        CourseRepo::new(&self.pool).enrollment().await
    }

    async fn insert_faculty(&self, faculty: &NewFaculty) -> Result<(), DbError> {
        FacultyRepo::new(&self.pool).insert(faculty).await
    }

    async fn list_faculty(&self) -> Result<Vec<Faculty>, DbError> {
        FacultyRepo::new(&self.pool).list().await
    }
}
