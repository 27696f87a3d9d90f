//! Shared helpers for HTTP integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use elective_core::enrollment::EnrollmentPolicy;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use elective_api::config::ServerConfig;
use elective_api::router::build_app_router;
use elective_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults and the given policy.
pub fn test_config(enrollment: EnrollmentPolicy) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        static_dir: None,
        db_max_connections: 5,
        enrollment,
    }
}

/// Build the full application router (same middleware as production).
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_policy(pool, EnrollmentPolicy::default())
}

pub fn build_test_app_with_policy(pool: PgPool, policy: EnrollmentPolicy) -> Router {
    let config = test_config(policy);
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub async fn seed_course(pool: &PgPool, table: &str, id: &str, name: &str, required: Option<f64>) {
    sqlx::query(&format!(
        "INSERT INTO {table} (course_id, course_name, required_grade) VALUES ($1, $2, $3)"
    ))
    .bind(id)
    .bind(name)
    .bind(required)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn seed_student(pool: &PgPool, student_id: &str) {
    sqlx::query("INSERT INTO students (student_id) VALUES ($1)")
        .bind(student_id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn seed_grade(pool: &PgPool, student_id: &str, course_id: &str, grade: f64) {
    sqlx::query("INSERT INTO grades (student_id, course_id, grade) VALUES ($1, $2, $3)")
        .bind(student_id)
        .bind(course_id)
        .bind(grade)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn seed_taken(pool: &PgPool, student_id: &str, course_id: &str) {
    sqlx::query("INSERT INTO taken_courses (student_id, course_id) VALUES ($1, $2)")
        .bind(student_id)
        .bind(course_id)
        .execute(pool)
        .await
        .unwrap();
}

/// Insert `n` ledger rows for a course from synthetic students `filler-0..n`.
pub async fn fill_course(pool: &PgPool, elective_type: &str, course_id: &str, n: usize) {
    for i in 0..n {
        sqlx::query(
            "INSERT INTO selected_courses \
                (student_id, course_id, course_name, elective_type, \"timestamp\") \
             VALUES ($1, $2, 'filler', $3, 'n/a')",
        )
        .bind(format!("filler-{i}"))
        .bind(course_id)
        .bind(elective_type)
        .execute(pool)
        .await
        .unwrap();
    }
}

pub async fn selection_count(pool: &PgPool, student_id: &str) -> i64 {
    let count: (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM selected_courses WHERE student_id = $1")
            .bind(student_id)
            .fetch_one(pool)
            .await
            .unwrap();
    count.0
}
