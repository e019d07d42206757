//! Faculty repository

use sqlx::MySqlPool;

use crate::db::DbError;
use crate::models::{Faculty, NewFaculty};

/// Faculty repository
pub struct FacultyRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> FacultyRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// Insert one faculty member; four columns, four placeholders.
    pub async fn insert(&self, faculty: &NewFaculty) -> Result<(), DbError> {
        sqlx::query(
            r#"
            INSERT INTO Faculty (facultyName, facultyOffice, facultyPhone, facultyEmail)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&faculty.faculty_name)
        .bind(&faculty.faculty_office)
        .bind(&faculty.faculty_phone)
        .bind(&faculty.faculty_email)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// List faculty in the store's default order (no ORDER BY).
    pub async fn list(&self) -> Result<Vec<Faculty>, DbError> {
        let faculty = sqlx::query_as::<_, Faculty>(
            "SELECT facultyName, facultyOffice, facultyPhone, facultyEmail FROM Faculty",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(faculty)
    }
}
