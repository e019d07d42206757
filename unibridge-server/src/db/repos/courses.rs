//! Course repository - teaching loads and enrollment report
//!
//! Both queries are single JOINs; the report uses LEFT JOIN so courses
//! with no `attends` rows still appear with a count of 0.

use sqlx::MySqlPool;

use crate::db::DbError;
use crate::models::{Course, CourseEnrollment, ProfessorId};

/// Course repository
pub struct CourseRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> CourseRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn for_professor(&self, professor_id: &ProfessorId) -> Result<Vec<Course>, DbError> {
        let courses = sqlx::query_as::<_, Course>(
            r#"
            SELECT
                c.courseID,
                c.courseName,
                c.taName,
                c.deptEmail
            FROM teaches t
            JOIN course c ON c.courseID = t.courseID
            WHERE t.professorID = ?
            ORDER BY c.courseID
            "#,
        )
        .bind(professor_id.as_str())
        .fetch_all(self.pool)
        .await?;

        Ok(courses)
    }

    pub async fn enrollment(&self) -> Result<Vec<CourseEnrollment>, DbError> {
        let rows = sqlx::query_as::<_, CourseEnrollment>(
            r#"
            SELECT
                c.courseID,
                c.courseName,
                COUNT(a.studentNum) AS numStudents
            FROM course c
            LEFT JOIN attends a ON a.courseID = c.courseID
            GROUP BY c.courseID, c.courseName
            ORDER BY numStudents DESC, c.courseID
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
