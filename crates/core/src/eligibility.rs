//! Per-course eligibility for a single student.
//!
//! Evaluation is pure: the caller loads the catalog, the student's taken
//! courses and grades, and the ledger counts, then asks which courses are
//! selectable.

use std::collections::{HashMap, HashSet};

use crate::enrollment::{is_at_capacity, meets_grade_requirement};
use crate::types::{CourseId, Grade};

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// A student's completed coursework, as loaded from the record store.
#[derive(Debug, Clone, Default)]
pub struct StudentRecord {
    pub taken: HashSet<CourseId>,
    pub grades: HashMap<CourseId, Grade>,
}

impl StudentRecord {
    pub fn new(
        taken: impl IntoIterator<Item = CourseId>,
        grades: impl IntoIterator<Item = (CourseId, Grade)>,
    ) -> Self {
        Self {
            taken: taken.into_iter().collect(),
            grades: grades.into_iter().collect(),
        }
    }

    pub fn has_taken(&self, course_id: &str) -> bool {
        self.taken.contains(course_id)
    }

    pub fn grade_for(&self, course_id: &str) -> Option<Grade> {
        self.grades.get(course_id).copied()
    }
}

// ---------------------------------------------------------------------------
// Outputs
// ---------------------------------------------------------------------------

/// Why a course is not selectable.
#[derive(Debug, Clone, PartialEq)]
pub enum DisabledReason {
    AlreadyTaken,
    GradeNotMet {
        required: Grade,
        actual: Option<Grade>,
    },
    CapacityReached {
        selected: i64,
        capacity: i64,
    },
}

/// Eligibility verdict for one course.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Eligibility {
    pub reasons: Vec<DisabledReason>,
}

impl Eligibility {
    pub fn is_disabled(&self) -> bool {
        !self.reasons.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Evaluate one course against a student's record and the current ledger
/// count for that course.
///
/// A course is disabled when the student already took it, when it has a
/// grade requirement the student does not meet, or when its selection count
/// has reached `capacity`. All applicable reasons are reported.
pub fn evaluate_course(
    course_id: &str,
    required_grade: Option<Grade>,
    record: &StudentRecord,
    selected: i64,
    capacity: i64,
) -> Eligibility {
    let mut reasons = Vec::new();

    if record.has_taken(course_id) {
        reasons.push(DisabledReason::AlreadyTaken);
    }

    let actual = record.grade_for(course_id);
    if let Some(required) = required_grade {
        if !meets_grade_requirement(Some(required), actual) {
            reasons.push(DisabledReason::GradeNotMet { required, actual });
        }
    }

    if is_at_capacity(selected, capacity) {
        reasons.push(DisabledReason::CapacityReached { selected, capacity });
    }

    Eligibility { reasons }
}

/// Look up a course's selection count; courses with no selections are absent
/// from the grouped count and read as zero.
pub fn selected_count(counts: &HashMap<CourseId, i64>, course_id: &str) -> i64 {
    counts.get(course_id).copied().unwrap_or(0)
}
