//! Repository for the `students` table.

use sqlx::PgPool;

pub struct StudentRepo;

impl StudentRepo {
    /// Whether a student id is present in the student store.
    pub async fn exists(pool: &PgPool, student_id: &str) -> Result<bool, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM students WHERE student_id = $1")
            .bind(student_id)
            .fetch_one(pool)
            .await?;
        Ok(count.0 > 0)
    }
}
