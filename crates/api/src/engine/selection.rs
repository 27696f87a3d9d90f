//! The guarded write that commits a student's course selection.

use chrono::Utc;
use elective_core::elective::ElectiveCategory;
use elective_core::enrollment::{
    check_capacity, check_grade, EnrollmentPolicy, EnrollmentRejection,
};
use elective_core::error::CoreError;
use elective_core::report_time::render_report_timestamp;
use elective_db::models::selection::{NewSelection, Selection};
use elective_db::repositories::{CourseRepo, GradeRepo, SelectionRepo, TakenCourseRepo};
use elective_db::DbPool;

use crate::error::{AppError, AppResult};

/// One student's request to enroll in one course.
#[derive(Debug, Clone, Copy)]
pub struct SelectionRequest<'a> {
    pub student_id: &'a str,
    pub course_id: &'a str,
    pub category: ElectiveCategory,
}

/// Validate and commit a selection.
///
/// Guards, in order:
/// 1. the student holds no selection in this category,
/// 2. the student has not already taken the course,
/// 3. the course exists in the category's catalog (course lock held from here on),
/// 4. the grade requirement, if any, is met,
/// 5. the course is below capacity (when `recheck_capacity_on_commit`).
///
/// Everything runs in one READ COMMITTED transaction. The course lock serializes
/// selections of the same course, and the unique constraint on
/// `(student_id, elective_type)` catches a concurrent duplicate that passed
/// guard 1. Any rejection rolls back, so the ledger is untouched.
pub async fn select_course(
    pool: &DbPool,
    policy: &EnrollmentPolicy,
    request: SelectionRequest<'_>,
) -> AppResult<Selection> {
    let SelectionRequest {
        student_id,
        course_id,
        category,
    } = request;

    let result = commit(pool, policy, request).await;

    match &result {
        Ok(selection) => tracing::info!(
            student_id,
            course_id,
            category = %category,
            selection_id = selection.id,
            "Course selected"
        ),
        Err(AppError::Core(CoreError::Rejected(rejection))) => {
            tracing::info!(
                student_id,
                course_id,
                category = %category,
                code = rejection.code(),
                reason = %rejection,
                "Course selection rejected"
            )
        }
        Err(err) => tracing::error!(
            student_id,
            course_id,
            category = %category,
            error = %err,
            "Course selection failed"
        ),
    }

    result
}

async fn commit(
    pool: &DbPool,
    policy: &EnrollmentPolicy,
    request: SelectionRequest<'_>,
) -> AppResult<Selection> {
    let SelectionRequest {
        student_id,
        course_id,
        category,
    } = request;

    // Dropping `tx` on any early return rolls it back.
    let mut tx = elective_db::begin_read_committed(pool).await?;

    if SelectionRepo::exists_for_student(&mut *tx, student_id, category).await? {
        return Err(EnrollmentRejection::DuplicateSelection { category }.into());
    }

    if TakenCourseRepo::has_taken(&mut *tx, student_id, course_id).await? {
        return Err(EnrollmentRejection::AlreadyTaken {
            course_id: course_id.to_string(),
        }
        .into());
    }

    let course = CourseRepo::find_locked(&mut tx, category, course_id)
        .await?
        .ok_or_else(|| EnrollmentRejection::CourseNotFound {
            course_id: course_id.to_string(),
            category,
        })?;

    if course.required_grade.is_some() {
        let grade = GradeRepo::find(&mut *tx, student_id, course_id).await?;
        check_grade(course.required_grade, grade)?;
    }

    if policy.recheck_capacity_on_commit {
        let selected = SelectionRepo::count_for_course(&mut *tx, course_id, category).await?;
        check_capacity(course_id, selected, policy.course_capacity)?;
    }

    let input = NewSelection {
        student_id: student_id.to_string(),
        course_id: course.course_id,
        course_name: course.course_name,
        category,
        timestamp: render_report_timestamp(Utc::now(), policy.report_offset),
    };

    let selection = match SelectionRepo::insert(&mut *tx, &input).await {
        Ok(selection) => selection,
        Err(err) if SelectionRepo::is_duplicate_violation(&err) => {
            return Err(EnrollmentRejection::DuplicateSelection { category }.into());
        }
        Err(err) => return Err(err.into()),
    };

    tx.commit().await?;
    Ok(selection)
}
