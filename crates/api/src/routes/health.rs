//! Liveness endpoint, mounted at the root rather than under `/api`.

use std::time::Instant;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when the database answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Round trip of the ping query; absent when it failed.
    pub db_latency_ms: Option<u64>,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let started = Instant::now();
    let ping = elective_db::health_check(&state.pool).await;

    let db_latency_ms = match &ping {
        Ok(()) => Some(started.elapsed().as_millis() as u64),
        Err(err) => {
            tracing::warn!(error = %err, "Database health check failed");
            None
        }
    };
    let db_healthy = ping.is_ok();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        db_latency_ms,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
