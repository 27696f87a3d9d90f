//! Selection guards and the rejection taxonomy.
//!
//! The guard sequence itself runs inside a database transaction owned by the
//! API layer. The checks that need no I/O live here so both the eligibility
//! read and the commit path agree on them.

use chrono::{FixedOffset, Offset, Utc};

use crate::elective::ElectiveCategory;
use crate::types::{CourseId, Grade};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum committed selections per course unless configured otherwise.
pub const DEFAULT_COURSE_CAPACITY: i64 = 16;

/// Seconds east of UTC for audit timestamps unless configured otherwise.
pub const DEFAULT_REPORT_OFFSET_SECS: i32 = 8 * 3600;

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

/// Tunables that change how eligibility and selection behave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnrollmentPolicy {
    /// Maximum committed selections per course within its category.
    pub course_capacity: i64,
    /// Re-count selections under the course lock before inserting. When
    /// `false`, capacity is only advisory (checked at eligibility time).
    pub recheck_capacity_on_commit: bool,
    /// Reject unknown elective types instead of falling back to the default.
    pub strict_elective_types: bool,
    /// Offset used only to render the ledger's display timestamp.
    pub report_offset: FixedOffset,
}

impl Default for EnrollmentPolicy {
    fn default() -> Self {
        Self {
            course_capacity: DEFAULT_COURSE_CAPACITY,
            recheck_capacity_on_commit: true,
            strict_elective_types: false,
            report_offset: FixedOffset::east_opt(DEFAULT_REPORT_OFFSET_SECS)
                .unwrap_or_else(|| Utc.fix()),
        }
    }
}

// ---------------------------------------------------------------------------
// Rejections
// ---------------------------------------------------------------------------

/// Why a selection request was refused. Every rejection is terminal for the
/// request and leaves the ledger untouched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EnrollmentRejection {
    #[error("Student has already selected a course from this elective set")]
    DuplicateSelection { category: ElectiveCategory },

    #[error("Course already taken")]
    AlreadyTaken { course_id: CourseId },

    #[error("Course {course_id} does not exist in {category}")]
    CourseNotFound {
        course_id: CourseId,
        category: ElectiveCategory,
    },

    #[error(
        "You have not met the grade requirement of {required}. Your grade is {}.",
        display_grade(.actual)
    )]
    GradeNotMet {
        required: Grade,
        actual: Option<Grade>,
    },

    #[error("Course {course_id} is full ({capacity} selections)")]
    CapacityReached { course_id: CourseId, capacity: i64 },
}

impl EnrollmentRejection {
    /// Machine-readable code included in error responses.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicateSelection { .. } => "DUPLICATE_SELECTION",
            Self::AlreadyTaken { .. } => "ALREADY_TAKEN",
            Self::CourseNotFound { .. } => "COURSE_NOT_FOUND",
            Self::GradeNotMet { .. } => "GRADE_NOT_MET",
            Self::CapacityReached { .. } => "CAPACITY_REACHED",
        }
    }
}

fn display_grade(grade: &Option<Grade>) -> String {
    match grade {
        Some(g) => g.to_string(),
        None => "N/A".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Checks
// ---------------------------------------------------------------------------

/// Whether `actual` satisfies `required`. A missing requirement is always
/// met; a missing grade never meets a present requirement. Equal is enough.
pub fn meets_grade_requirement(required: Option<Grade>, actual: Option<Grade>) -> bool {
    match (required, actual) {
        (None, _) => true,
        (Some(_), None) => false,
        (Some(required), Some(actual)) => actual >= required,
    }
}

/// Grade guard for the commit path.
pub fn check_grade(
    required: Option<Grade>,
    actual: Option<Grade>,
) -> Result<(), EnrollmentRejection> {
    match required {
        Some(required) if !meets_grade_requirement(Some(required), actual) => {
            Err(EnrollmentRejection::GradeNotMet { required, actual })
        }
        _ => Ok(()),
    }
}

/// Whether a course with `selected` committed selections has no room left.
pub fn is_at_capacity(selected: i64, capacity: i64) -> bool {
    selected >= capacity
}

/// Capacity guard for the commit path.
pub fn check_capacity(
    course_id: &str,
    selected: i64,
    capacity: i64,
) -> Result<(), EnrollmentRejection> {
    if is_at_capacity(selected, capacity) {
        return Err(EnrollmentRejection::CapacityReached {
            course_id: course_id.to_string(),
            capacity,
        });
    }
    Ok(())
}
