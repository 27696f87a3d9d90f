//! Route definitions for the enrollment endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{courses, grades, selection, students};
use crate::state::AppState;

/// Routes mounted at `/api`.
///
/// ```text
/// GET    /courses          -> courses::list
/// GET    /grade            -> grades::get
/// GET    /students/{id}    -> students::exists
/// POST   /select-course    -> selection::select
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/courses", get(courses::list))
        .route("/grade", get(grades::get))
        .route("/students/{id}", get(students::exists))
        .route("/select-course", post(selection::select))
}
