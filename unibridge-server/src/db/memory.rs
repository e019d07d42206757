//! In-memory store
//!
//! Mirrors the MySQL store's observable behavior (ordering, not-found,
//! primary-key uniqueness) without a database. Courses, teaching links and
//! enrollments are not writable over HTTP, so they are seeded directly.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{DbError, UniversityStore};
use crate::models::{
    ContactUpdate, Course, CourseEnrollment, Faculty, NewFaculty, NewStudent, ProfessorId, Student,
    StudentNum,
};

#[derive(Default)]
struct Tables {
    students: Vec<Student>,
    faculty: Vec<Faculty>,
    courses: Vec<Course>,
    /// (professorID, courseID)
    teaches: Vec<(String, String)>,
    /// (studentNum, courseID)
    attends: Vec<(String, String)>,
    unavailable: bool,
}

impl Tables {
    fn check_available(&self) -> Result<(), DbError> {
        if self.unavailable {
            Err(DbError::Unavailable)
        } else {
            Ok(())
        }
    }
}

/// `UniversityStore` held entirely in process memory
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail as if the database were down.
    pub async fn set_unavailable(&self, unavailable: bool) {
        self.tables.write().await.unavailable = unavailable;
    }

    /// Seed a course row.
    pub async fn add_course(&self, course: Course) -> Result<(), DbError> {
        let mut tables = self.tables.write().await;
        if tables.courses.iter().any(|c| c.course_id == course.course_id) {
            return Err(DbError::Constraint(format!(
                "duplicate course '{}'",
                course.course_id
            )));
        }
        tables.courses.push(course);
        Ok(())
    }

    /// Seed a `teaches` link.
    pub async fn assign_course(&self, professor_id: &str, course_id: &str) {
        self.tables
            .write()
            .await
            .teaches
            .push((professor_id.to_owned(), course_id.to_owned()));
    }

    /// Seed an `attends` row; duplicates are ignored like a composite key would reject them.
    pub async fn enroll(&self, student_num: &str, course_id: &str) {
        let mut tables = self.tables.write().await;
        let row = (student_num.to_owned(), course_id.to_owned());
        if !tables.attends.contains(&row) {
            tables.attends.push(row);
        }
    }
}

#[async_trait]
impl UniversityStore for MemoryStore {
    async fn student_count(&self) -> Result<i64, DbError> {
        let tables = self.tables.read().await;
        tables.check_available()?;
        Ok(tables.students.len() as i64)
    }

    async fn insert_student(&self, student: &NewStudent) -> Result<(), DbError> {
        let mut tables = self.tables.write().await;
        tables.check_available()?;

        if tables
            .students
            .iter()
            .any(|s| s.student_num == student.student_num.as_str())
        {
            return Err(DbError::Constraint(format!(
                "duplicate studentNum '{}'",
                student.student_num
            )));
        }

        tables.students.push(Student::from(student.clone()));
        Ok(())
    }

    async fn list_students(&self) -> Result<Vec<Student>, DbError> {
        let tables = self.tables.read().await;
        tables.check_available()?;

        // MySQL's default collation compares names case-insensitively
        let mut students = tables.students.clone();
        students.sort_by_cached_key(|s| (s.l_name.to_lowercase(), s.f_name.to_lowercase()));
        Ok(students)
    }

    async fn update_student_contact(
        &self,
        student_num: &StudentNum,
        contact: &ContactUpdate,
    ) -> Result<(), DbError> {
        let mut tables = self.tables.write().await;
        tables.check_available()?;

        let student = tables
            .students
            .iter_mut()
            .find(|s| s.student_num == student_num.as_str())
            .ok_or_else(|| DbError::NotFound {
                resource: "Student",
                id: student_num.to_string(),
            })?;

        student.student_email = contact.student_email.clone();
        student.student_main_phone = contact.student_main_phone.clone();
        Ok(())
    }

    async fn delete_student(&self, student_num: &StudentNum) -> Result<(), DbError> {
        let mut tables = self.tables.write().await;
        tables.check_available()?;

        let before = tables.students.len();
        tables.students.retain(|s| s.student_num != student_num.as_str());

        if tables.students.len() == before {
            return Err(DbError::NotFound {
                resource: "Student",
                id: student_num.to_string(),
            });
        }

        // attends.studentNum is ON DELETE CASCADE
        tables.attends.retain(|(s, _)| s != student_num.as_str());
        Ok(())
    }

    async fn courses_for_professor(
        &self,
        professor_id: &ProfessorId,
    ) -> Result<Vec<Course>, DbError> {
        let tables = self.tables.read().await;
        tables.check_available()?;

        // Inner join: one output row per matching teaches row
        let mut courses: Vec<Course> = tables
            .teaches
            .iter()
            .filter(|(prof, _)| prof == professor_id.as_str())
            .filter_map(|(_, course_id)| {
                tables.courses.iter().find(|c| &c.course_id == course_id)
            })
            .cloned()
            .collect();

        courses.sort_by(|a, b| a.course_id.cmp(&b.course_id));
        Ok(courses)
    }

    async fn course_enrollment(&self) -> Result<Vec<CourseEnrollment>, DbError> {
        let tables = self.tables.read().await;
        tables.check_available()?;

        let mut rows: Vec<CourseEnrollment> = tables
            .courses
            .iter()
            .map(|c| CourseEnrollment {
                course_id: c.course_id.clone(),
                course_name: c.course_name.clone(),
                num_students: tables
                    .attends
                    .iter()
                    .filter(|(_, course_id)| course_id == &c.course_id)
                    .count() as i64,
            })
            .collect();

        rows.sort_by(|a, b| {
            b.num_students
                .cmp(&a.num_students)
                .then_with(|| a.course_id.cmp(&b.course_id))
        });
        Ok(rows)
    }

    async fn insert_faculty(&self, faculty: &NewFaculty) -> Result<(), DbError> {
        let mut tables = self.tables.write().await;
        tables.check_available()?;
        tables.faculty.push(Faculty::from(faculty.clone()));
        Ok(())
    }

    async fn list_faculty(&self) -> Result<Vec<Faculty>, DbError> {
        let tables = self.tables.read().await;
        tables.check_available()?;
        Ok(tables.faculty.clone())
    }
}
