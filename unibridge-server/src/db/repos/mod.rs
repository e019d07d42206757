//! Repository implementations for MySQL access
//!
//! Each repository borrows the shared pool and issues exactly one
//! parameterized statement per method (`?` bind parameters only).

pub mod students;
pub mod courses;
pub mod faculty;

pub use students::StudentRepo;
pub use courses::CourseRepo;
pub use faculty::FacultyRepo;
