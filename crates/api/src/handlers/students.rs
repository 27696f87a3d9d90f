//! Handler for `GET /api/students/{id}`.

use axum::extract::{Path, State};
use axum::Json;
use elective_db::repositories::StudentRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct StudentExistsResponse {
    pub exists: bool,
}

/// GET /api/students/{id}
///
/// Existence check only; identity is not verified.
pub async fn exists(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> AppResult<Json<StudentExistsResponse>> {
    let exists = StudentRepo::exists(&state.pool, &student_id).await?;
    tracing::debug!(student_id = %student_id, exists, "Student lookup");
    Ok(Json(StudentExistsResponse { exists }))
}
