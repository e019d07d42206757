//! Course records (read-only through the HTTP surface)

use serde::Serialize;
use sqlx::FromRow;

/// Row of the `course` table as returned for a professor's teaching load
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Course {
    #[serde(rename = "courseID")]
    #[sqlx(rename = "courseID")]
    pub course_id: String,
    pub course_name: String,
    pub ta_name: Option<String>,
    pub dept_email: Option<String>,
}

/// One line of the course enrollment report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct CourseEnrollment {
    #[serde(rename = "courseID")]
    #[sqlx(rename = "courseID")]
    pub course_id: String,
    pub course_name: String,
    pub num_students: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_id_keeps_upper_case_suffix() {
        let row = CourseEnrollment {
            course_id: "CS101".into(),
            course_name: "Intro".into(),
            num_students: 0,
        };
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["courseID"], "CS101");
        assert_eq!(value["numStudents"], 0);
    }

    #[test]
    fn nullable_columns_serialize_as_null() {
        let course = Course {
            course_id: "CS101".into(),
            course_name: "Intro".into(),
            ta_name: None,
            dept_email: Some("cs@uni.edu".into()),
        };
        let value = serde_json::to_value(&course).unwrap();
        assert!(value["taName"].is_null());
        assert_eq!(value["deptEmail"], "cs@uni.edu");
    }
}
