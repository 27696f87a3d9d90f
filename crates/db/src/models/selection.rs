//! Selection ledger rows and DTOs.

use elective_core::elective::ElectiveCategory;
use elective_core::types::{CourseId, StudentId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `selected_courses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Selection {
    pub id: i64,
    pub student_id: StudentId,
    pub course_id: CourseId,
    pub course_name: String,
    pub elective_type: String,
    /// Display timestamp rendered in the reporting offset at commit time.
    pub timestamp: String,
    pub created_at: Timestamp,
}

/// DTO for appending a selection to the ledger.
#[derive(Debug, Clone)]
pub struct NewSelection {
    pub student_id: StudentId,
    pub course_id: CourseId,
    /// Copied from the catalog at commit time.
    pub course_name: String,
    pub category: ElectiveCategory,
    pub timestamp: String,
}

/// Committed selection count for one course.
#[derive(Debug, Clone, FromRow)]
pub struct CourseCount {
    pub course_id: CourseId,
    pub count: i64,
}
