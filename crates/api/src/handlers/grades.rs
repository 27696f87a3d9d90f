//! Handler for `GET /api/grade`.

use axum::extract::State;
use axum::Json;
use elective_core::types::Grade;
use elective_db::repositories::GradeRepo;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::extract::AppQuery;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeParams {
    pub student_id: String,
    pub course_id: String,
}

/// `grade` is `null` when the student has no grade for the course.
#[derive(Debug, Serialize)]
pub struct GradeResponse {
    pub grade: Option<Grade>,
}

/// GET /api/grade?studentId=&courseId=
pub async fn get(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<GradeParams>,
) -> AppResult<Json<GradeResponse>> {
    let grade = GradeRepo::find(&state.pool, &params.student_id, &params.course_id).await?;
    Ok(Json(GradeResponse { grade }))
}
