//! Request and record schemas with validation at construction
//!
//! Request bodies decode into `*Request` types and are converted into
//! validated values before any bind parameter is built.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod identifier;
pub mod student;
pub mod faculty;
pub mod course;

pub use validation::ValidationError;
pub use identifier::{ProfessorId, StudentNum};
pub use student::{AddStudentRequest, ContactUpdate, NewStudent, Student, UpdateContactRequest};
pub use faculty::{AddFacultyRequest, Faculty, NewFaculty};
pub use course::{Course, CourseEnrollment};
