//! Repository for the `taken_courses` table (courses completed elsewhere).

use elective_core::types::CourseId;
use sqlx::{PgExecutor, PgPool};

pub struct TakenCourseRepo;

impl TakenCourseRepo {
    /// Ids of every course the student has already completed.
    pub async fn list_course_ids(
        pool: &PgPool,
        student_id: &str,
    ) -> Result<Vec<CourseId>, sqlx::Error> {
        let rows: Vec<(CourseId,)> =
            sqlx::query_as("SELECT course_id FROM taken_courses WHERE student_id = $1")
                .bind(student_id)
                .fetch_all(pool)
                .await?;
        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    /// Whether the student has already completed this course.
    pub async fn has_taken<'e>(
        executor: impl PgExecutor<'e>,
        student_id: &str,
        course_id: &str,
    ) -> Result<bool, sqlx::Error> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM taken_courses WHERE student_id = $1 AND course_id = $2",
        )
        .bind(student_id)
        .bind(course_id)
        .fetch_one(executor)
        .await?;
        Ok(count.0 > 0)
    }
}
