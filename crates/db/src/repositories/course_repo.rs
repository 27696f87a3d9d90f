//! Repository for the per-category catalog tables (`elective_1`, `elective_2`).

use elective_core::elective::ElectiveCategory;
use sqlx::PgPool;

use crate::models::course::Course;

/// Column list shared by every catalog table.
const COLUMNS: &str = "course_id, course_name, required_grade";

/// Read-only access to elective catalogs. The table is always taken from
/// [`ElectiveCategory::catalog_table`], never from caller-supplied text.
pub struct CourseRepo;

impl CourseRepo {
    /// List every course in a category's catalog, ordered by course id.
    pub async fn list(pool: &PgPool, category: ElectiveCategory) -> Result<Vec<Course>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {} ORDER BY course_id",
            category.catalog_table()
        );
        sqlx::query_as::<_, Course>(&query).fetch_all(pool).await
    }

    /// Take the per-course selection lock, then read the course.
    ///
    /// The lock is a transaction-scoped advisory lock keyed on
    /// `(category, course_id)`, so concurrent selections of one course queue
    /// here without needing write access to the catalog. Under READ
    /// COMMITTED every statement after it sees all selections committed by
    /// earlier holders, which makes the in-transaction capacity count exact.
    pub async fn find_locked(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        category: ElectiveCategory,
        course_id: &str,
    ) -> Result<Option<Course>, sqlx::Error> {
        sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1), hashtext($2))")
            .bind(category.as_str())
            .bind(course_id)
            .execute(&mut **tx)
            .await?;

        let query = format!(
            "SELECT {COLUMNS} FROM {} WHERE course_id = $1",
            category.catalog_table()
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(course_id)
            .fetch_optional(&mut **tx)
            .await
    }
}
