//! Handler for `POST /api/select-course`.

use axum::extract::State;
use axum::Json;
use elective_core::elective::ElectiveCategory;
use serde::{Deserialize, Serialize};

use crate::engine::{self, SelectionRequest};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

/// Request body for committing a selection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectCourseRequest {
    pub student_id: String,
    pub course_id: String,
    pub elective_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SelectCourseResponse {
    pub message: &'static str,
}

/// POST /api/select-course
///
/// Commit the student's single selection for the category. Guard failures
/// come back as 4xx `{ "error", "code" }`.
pub async fn select(
    State(state): State<AppState>,
    AppJson(body): AppJson<SelectCourseRequest>,
) -> AppResult<Json<SelectCourseResponse>> {
    if body.student_id.trim().is_empty() || body.course_id.trim().is_empty() {
        return Err(AppError::BadRequest(
            "studentId and courseId must not be empty".to_string(),
        ));
    }

    let policy = &state.config.enrollment;
    let category =
        ElectiveCategory::resolve(body.elective_type.as_deref(), policy.strict_elective_types)?;

    engine::select_course(
        &state.pool,
        policy,
        SelectionRequest {
            student_id: &body.student_id,
            course_id: &body.course_id,
            category,
        },
    )
    .await?;

    Ok(Json(SelectCourseResponse { message: "Success" }))
}
