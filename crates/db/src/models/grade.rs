use elective_core::types::{CourseId, Grade};
use serde::Serialize;
use sqlx::FromRow;

/// One of a student's grades, keyed by course.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CourseGrade {
    pub course_id: CourseId,
    pub grade: Grade,
}
