//! Repository for the `selected_courses` ledger.

use elective_core::elective::ElectiveCategory;
use sqlx::{PgExecutor, PgPool};

use crate::models::selection::{CourseCount, NewSelection, Selection};

/// Column list for the `selected_courses` table.
const COLUMNS: &str =
    "id, student_id, course_id, course_name, elective_type, \"timestamp\", created_at";

/// Unique constraint guaranteeing one selection per student per category.
pub const UQ_STUDENT_ELECTIVE: &str = "uq_selected_courses_student_elective";

/// PostgreSQL `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// Append-only access to the selection ledger. Nothing here updates or
/// deletes a selection.
pub struct SelectionRepo;

impl SelectionRepo {
    /// Append a selection.
    ///
    /// Fails with a unique violation on [`UQ_STUDENT_ELECTIVE`] when the
    /// student already holds a selection in this category; see
    /// [`SelectionRepo::is_duplicate_violation`].
    pub async fn insert<'e>(
        executor: impl PgExecutor<'e>,
        input: &NewSelection,
    ) -> Result<Selection, sqlx::Error> {
        let query = format!(
            "INSERT INTO selected_courses \
                (student_id, course_id, course_name, elective_type, \"timestamp\") \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Selection>(&query)
            .bind(&input.student_id)
            .bind(&input.course_id)
            .bind(&input.course_name)
            .bind(input.category.as_str())
            .bind(&input.timestamp)
            .fetch_one(executor)
            .await
    }

    /// Whether the student already holds a selection in this category.
    pub async fn exists_for_student<'e>(
        executor: impl PgExecutor<'e>,
        student_id: &str,
        category: ElectiveCategory,
    ) -> Result<bool, sqlx::Error> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM selected_courses \
             WHERE student_id = $1 AND elective_type = $2",
        )
        .bind(student_id)
        .bind(category.as_str())
        .fetch_one(executor)
        .await?;
        Ok(count.0 > 0)
    }

    /// Committed selections for one course in a category.
    pub async fn count_for_course<'e>(
        executor: impl PgExecutor<'e>,
        course_id: &str,
        category: ElectiveCategory,
    ) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM selected_courses \
             WHERE course_id = $1 AND elective_type = $2",
        )
        .bind(course_id)
        .bind(category.as_str())
        .fetch_one(executor)
        .await?;
        Ok(count.0)
    }

    /// Committed selections per course in a category. Courses with no
    /// selections are absent.
    pub async fn counts_by_course(
        pool: &PgPool,
        category: ElectiveCategory,
    ) -> Result<Vec<CourseCount>, sqlx::Error> {
        sqlx::query_as::<_, CourseCount>(
            "SELECT course_id, COUNT(*) AS count FROM selected_courses \
             WHERE elective_type = $1 \
             GROUP BY course_id",
        )
        .bind(category.as_str())
        .fetch_all(pool)
        .await
    }

    /// Whether `err` is the one-selection-per-category constraint firing.
    pub fn is_duplicate_violation(err: &sqlx::Error) -> bool {
        match err {
            sqlx::Error::Database(db_err) => {
                db_err.code().as_deref() == Some(UNIQUE_VIOLATION)
                    && db_err.constraint() == Some(UQ_STUDENT_ELECTIVE)
            }
            _ => false,
        }
    }
}
