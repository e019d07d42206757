//! Student repository
//!
//! Single-statement CRUD over the `student` table. Update and delete
//! report `NotFound` when no row matched the student number.

use sqlx::MySqlPool;

use crate::db::DbError;
use crate::models::{ContactUpdate, NewStudent, Student, StudentNum};

/// Student repository
pub struct StudentRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> StudentRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// Count all students (health probe).
    pub async fn count(&self) -> Result<i64, DbError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) AS studentCount FROM student")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }

    pub async fn insert(&self, student: &NewStudent) -> Result<(), DbError> {
        sqlx::query(
            r#"
            INSERT INTO student (studentNum, fName, lName, studentEmail, studentMainPhone)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(student.student_num.as_str())
        .bind(&student.f_name)
        .bind(&student.l_name)
        .bind(&student.student_email)
        .bind(&student.student_main_phone)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<Student>, DbError> {
        let students = sqlx::query_as::<_, Student>(
            r#"
            SELECT studentNum, fName, lName, studentEmail, studentMainPhone
            FROM student
            ORDER BY lName, fName
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(students)
    }

    /// Update contact fields.
    ///
    /// Relies on the driver reporting matched (not changed) rows, so
    /// re-submitting identical values is still a success.
    pub async fn update_contact(
        &self,
        student_num: &StudentNum,
        contact: &ContactUpdate,
    ) -> Result<(), DbError> {
        let result = sqlx::query(
            r#"
            UPDATE student
            SET studentEmail = ?, studentMainPhone = ?
            WHERE studentNum = ?
            "#,
        )
        .bind(&contact.student_email)
        .bind(&contact.student_main_phone)
        .bind(student_num.as_str())
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(student_num));
        }

        Ok(())
    }

    pub async fn delete(&self, student_num: &StudentNum) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM student WHERE studentNum = ?")
            .bind(student_num.as_str())
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(student_num));
        }

        Ok(())
    }
}

fn not_found(student_num: &StudentNum) -> DbError {
    DbError::NotFound {
        resource: "Student",
        id: student_num.to_string(),
    }
}
