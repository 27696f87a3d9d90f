//! Catalog course rows. One table per elective category, identical shape.

use elective_core::types::{CourseId, Grade};
use serde::Serialize;
use sqlx::FromRow;

/// A row from an elective catalog table (`elective_1`, `elective_2`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Course {
    pub course_id: CourseId,
    pub course_name: String,
    /// `None` means the course has no prerequisite grade.
    pub required_grade: Option<Grade>,
}
