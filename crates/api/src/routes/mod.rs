pub mod enrollment;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /courses            GET   course list with per-student disabled flags
/// /grade              GET   one grade lookup
/// /students/{id}      GET   student existence check
/// /select-course      POST  commit a selection
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(enrollment::router())
}
