//! Handler for `GET /api/courses`.

use axum::extract::State;
use axum::Json;
use elective_core::elective::ElectiveCategory;
use serde::Deserialize;

use crate::engine::{self, CourseAvailability};
use crate::error::AppResult;
use crate::extract::AppQuery;
use crate::state::AppState;

/// Query parameters for the course list.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursesParams {
    pub student_id: String,
    pub elective_type: Option<String>,
}

/// GET /api/courses?studentId=&electiveType=
///
/// List the category's courses, each flagged `disabled` when the student
/// cannot currently select it.
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<CoursesParams>,
) -> AppResult<Json<Vec<CourseAvailability>>> {
    let policy = &state.config.enrollment;
    let category =
        ElectiveCategory::resolve(params.elective_type.as_deref(), policy.strict_elective_types)?;

    let courses =
        engine::compute_eligibility(&state.pool, policy, &params.student_id, category).await?;
    Ok(Json(courses))
}
