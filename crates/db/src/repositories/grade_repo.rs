//! Repository for the `grades` table.

use elective_core::types::Grade;
use sqlx::{PgExecutor, PgPool};

use crate::models::grade::CourseGrade;

pub struct GradeRepo;

impl GradeRepo {
    /// A student's grade in one course, if recorded.
    pub async fn find<'e>(
        executor: impl PgExecutor<'e>,
        student_id: &str,
        course_id: &str,
    ) -> Result<Option<Grade>, sqlx::Error> {
        let row: Option<(Grade,)> =
            sqlx::query_as("SELECT grade FROM grades WHERE student_id = $1 AND course_id = $2")
                .bind(student_id)
                .bind(course_id)
                .fetch_optional(executor)
                .await?;
        Ok(row.map(|(grade,)| grade))
    }

    /// All of a student's grades.
    pub async fn list_for_student(
        pool: &PgPool,
        student_id: &str,
    ) -> Result<Vec<CourseGrade>, sqlx::Error> {
        sqlx::query_as::<_, CourseGrade>(
            "SELECT course_id, grade FROM grades WHERE student_id = $1 ORDER BY course_id",
        )
        .bind(student_id)
        .fetch_all(pool)
        .await
    }
}
