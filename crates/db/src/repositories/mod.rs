//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods.
//! Methods that must also run inside the enrollment transaction take any
//! `PgExecutor`, so callers can pass either `&PgPool` or `&mut *tx`.

pub mod course_repo;
pub mod grade_repo;
pub mod selection_repo;
pub mod student_repo;
pub mod taken_course_repo;

pub use course_repo::CourseRepo;
pub use grade_repo::GradeRepo;
pub use selection_repo::SelectionRepo;
pub use student_repo::StudentRepo;
pub use taken_course_repo::TakenCourseRepo;
