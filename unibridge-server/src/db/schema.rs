//! Canonical university schema bootstrap
//!
//! The schema is normally owned by the database administrator. This is only
//! run on explicit request (`unibridge init-schema` / `serve --init-schema`)
//! and never alters existing tables.

use sqlx::MySqlPool;

use super::DbError;

/// One `CREATE TABLE IF NOT EXISTS` per table, in dependency order.
pub const SCHEMA: &[(&str, &str)] = &[
    (
        "student",
        r#"
        CREATE TABLE IF NOT EXISTS student (
            studentNum VARCHAR(20) NOT NULL PRIMARY KEY,
            fName VARCHAR(100) NOT NULL,
            lName VARCHAR(100) NOT NULL,
            studentEmail VARCHAR(100) NOT NULL,
            studentMainPhone VARCHAR(100) NOT NULL
        )
        "#,
    ),
    (
        "Faculty",
        r#"
        CREATE TABLE IF NOT EXISTS Faculty (
            facultyID INT NOT NULL AUTO_INCREMENT PRIMARY KEY,
            facultyName VARCHAR(100) NOT NULL,
            facultyOffice VARCHAR(100),
            facultyPhone VARCHAR(100),
            facultyEmail VARCHAR(100)
        )
        "#,
    ),
    (
        "course",
        r#"
        CREATE TABLE IF NOT EXISTS course (
            courseID VARCHAR(20) NOT NULL PRIMARY KEY,
            courseName VARCHAR(100) NOT NULL,
            taName VARCHAR(100),
            deptEmail VARCHAR(100)
        )
        "#,
    ),
    (
        "teaches",
        r#"
        CREATE TABLE IF NOT EXISTS teaches (
            professorID VARCHAR(20) NOT NULL,
            courseID VARCHAR(20) NOT NULL,
            PRIMARY KEY (professorID, courseID),
            FOREIGN KEY (courseID) REFERENCES course(courseID)
        )
        "#,
    ),
    (
        "attends",
        r#"
        CREATE TABLE IF NOT EXISTS attends (
            studentNum VARCHAR(20) NOT NULL,
            courseID VARCHAR(20) NOT NULL,
            PRIMARY KEY (studentNum, courseID),
            FOREIGN KEY (studentNum) REFERENCES student(studentNum) ON DELETE CASCADE,
            FOREIGN KEY (courseID) REFERENCES course(courseID) ON DELETE CASCADE
        )
        "#,
    ),
];

/// Create any missing university tables.
pub async fn ensure_schema(pool: &MySqlPool) -> Result<(), DbError> {
    tracing::info!("Ensuring university schema...");

    for &(table, ddl) in SCHEMA {
        sqlx::query(ddl).execute(pool).await?;
        tracing::debug!(table, "Table ready");
    }

    tracing::info!("University schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_created_before_their_references() {
        let order: Vec<_> = SCHEMA.iter().map(|(name, _)| *name).collect();
        let pos = |name: &str| order.iter().position(|t| *t == name).unwrap();

        assert!(pos("course") < pos("teaches"));
        assert!(pos("student") < pos("attends"));
        assert!(pos("course") < pos("attends"));
    }

    #[test]
    fn every_statement_is_idempotent() {
        for (name, ddl) in SCHEMA {
            assert!(
                ddl.contains(&format!("CREATE TABLE IF NOT EXISTS {} (", name)),
                "{} is not guarded",
                name
            );
        }
    }
}
