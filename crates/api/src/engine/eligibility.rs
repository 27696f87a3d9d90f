//! Per-student course availability for one elective category.

use std::collections::HashMap;

use elective_core::elective::ElectiveCategory;
use elective_core::eligibility::{evaluate_course, selected_count, StudentRecord};
use elective_core::enrollment::EnrollmentPolicy;
use elective_core::types::{CourseId, Grade};
use elective_db::repositories::{CourseRepo, GradeRepo, SelectionRepo, TakenCourseRepo};
use elective_db::DbPool;
use serde::Serialize;

/// A catalog course annotated for one student.
#[derive(Debug, Clone, Serialize)]
pub struct CourseAvailability {
    pub course_id: CourseId,
    pub course_name: String,
    pub required_grade: Option<Grade>,
    pub disabled: bool,
}

/// List a category's courses with `disabled` set for everything the student
/// cannot select right now.
///
/// The four reads run concurrently and are not mutually consistent; the
/// flags are advisory and `select_course` re-checks everything.
pub async fn compute_eligibility(
    pool: &DbPool,
    policy: &EnrollmentPolicy,
    student_id: &str,
    category: ElectiveCategory,
) -> Result<Vec<CourseAvailability>, sqlx::Error> {
    let (courses, taken, grades, counts) = tokio::try_join!(
        CourseRepo::list(pool, category),
        TakenCourseRepo::list_course_ids(pool, student_id),
        GradeRepo::list_for_student(pool, student_id),
        SelectionRepo::counts_by_course(pool, category),
    )?;

    let record = StudentRecord::new(taken, grades.into_iter().map(|g| (g.course_id, g.grade)));
    let counts: HashMap<CourseId, i64> =
        counts.into_iter().map(|c| (c.course_id, c.count)).collect();

    let available = courses
        .into_iter()
        .map(|course| {
            let selected = selected_count(&counts, &course.course_id);
            let verdict = evaluate_course(
                &course.course_id,
                course.required_grade,
                &record,
                selected,
                policy.course_capacity,
            );

            tracing::debug!(
                student_id,
                category = %category,
                course_id = %course.course_id,
                required_grade = ?course.required_grade,
                student_grade = ?record.grade_for(&course.course_id),
                selected,
                reasons = ?verdict.reasons,
                "Evaluated course eligibility"
            );

            CourseAvailability {
                disabled: verdict.is_disabled(),
                course_id: course.course_id,
                course_name: course.course_name,
                required_grade: course.required_grade,
            }
        })
        .collect();

    Ok(available)
}
