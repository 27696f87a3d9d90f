//! Integration tests for `GET /api/courses`.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use elective_core::enrollment::EnrollmentPolicy;
use sqlx::PgPool;

fn find<'a>(courses: &'a serde_json::Value, course_id: &str) -> &'a serde_json::Value {
    courses
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["course_id"] == course_id)
        .unwrap_or_else(|| panic!("course {course_id} missing from listing"))
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn grade_below_requirement_disables_course(pool: PgPool) {
    common::seed_course(&pool, "elective_1", "C1", "Algorithms", Some(80.0)).await;
    common::seed_grade(&pool, "S1", "C1", 75.0).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/courses?studentId=S1&electiveType=elective_1").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let course = find(&json, "C1");
    assert_eq!(course["course_name"], "Algorithms");
    assert_eq!(course["required_grade"], 80.0);
    assert_eq!(course["disabled"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn grade_meeting_requirement_enables_course(pool: PgPool) {
    common::seed_course(&pool, "elective_1", "C1", "Algorithms", Some(80.0)).await;
    common::seed_course(&pool, "elective_1", "C2", "Databases", Some(80.0)).await;
    common::seed_grade(&pool, "S1", "C1", 85.0).await;
    common::seed_grade(&pool, "S1", "C2", 80.0).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/courses?studentId=S1&electiveType=elective_1").await).await;

    assert_eq!(find(&json, "C1")["disabled"], false);
    // The requirement is inclusive.
    assert_eq!(find(&json, "C2")["disabled"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_grade_disables_graded_course_only(pool: PgPool) {
    common::seed_course(&pool, "elective_2", "G1", "Graded", Some(60.0)).await;
    common::seed_course(&pool, "elective_2", "O1", "Open", None).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/courses?studentId=S1&electiveType=elective_2").await).await;

    assert_eq!(find(&json, "G1")["disabled"], true);
    let open = find(&json, "O1");
    assert_eq!(open["disabled"], false);
    assert!(open["required_grade"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn taken_course_is_always_disabled(pool: PgPool) {
    common::seed_course(&pool, "elective_2", "C3", "Networks", None).await;
    common::seed_taken(&pool, "S1", "C3").await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/courses?studentId=S1&electiveType=elective_2").await).await;

    assert_eq!(find(&json, "C3")["disabled"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn full_course_is_disabled(pool: PgPool) {
    common::seed_course(&pool, "elective_2", "C4", "Compilers", None).await;
    common::seed_course(&pool, "elective_2", "C5", "Graphics", None).await;
    common::fill_course(&pool, "elective_2", "C4", 16).await;
    common::fill_course(&pool, "elective_2", "C5", 15).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/courses?studentId=S1&electiveType=elective_2").await).await;

    assert_eq!(find(&json, "C4")["disabled"], true);
    assert_eq!(find(&json, "C5")["disabled"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn capacity_counts_only_same_category(pool: PgPool) {
    common::seed_course(&pool, "elective_1", "SHARED", "Shared in 1", None).await;
    common::seed_course(&pool, "elective_2", "SHARED", "Shared in 2", None).await;
    common::fill_course(&pool, "elective_2", "SHARED", 16).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/courses?studentId=S1&electiveType=elective_1").await).await;

    assert_eq!(find(&json, "SHARED")["disabled"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn configured_capacity_applies(pool: PgPool) {
    common::seed_course(&pool, "elective_1", "C1", "Algorithms", None).await;
    common::fill_course(&pool, "elective_1", "C1", 2).await;

    let policy = EnrollmentPolicy {
        course_capacity: 2,
        ..EnrollmentPolicy::default()
    };
    let app = common::build_test_app_with_policy(pool, policy);
    let json = body_json(get(app, "/api/courses?studentId=S1&electiveType=elective_1").await).await;

    assert_eq!(find(&json, "C1")["disabled"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn listing_is_ordered_by_course_id(pool: PgPool) {
    common::seed_course(&pool, "elective_1", "B", "Second", None).await;
    common::seed_course(&pool, "elective_1", "A", "First", None).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/courses?studentId=S1&electiveType=elective_1").await).await;

    let ids: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["course_id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, ["A", "B"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_elective_type_falls_back_to_elective_2(pool: PgPool) {
    common::seed_course(&pool, "elective_1", "E1", "From one", None).await;
    common::seed_course(&pool, "elective_2", "E2", "From two", None).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/courses?studentId=S1&electiveType=bogus").await).await;
    let courses = json.as_array().unwrap();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0]["course_id"], "E2");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/courses?studentId=S1").await).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["course_id"], "E2");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_elective_type_rejected_in_strict_mode(pool: PgPool) {
    let policy = EnrollmentPolicy {
        strict_elective_types: true,
        ..EnrollmentPolicy::default()
    };
    let app = common::build_test_app_with_policy(pool, policy);
    let response = get(app, "/api/courses?studentId=S1&electiveType=bogus").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_student_id_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/courses?electiveType=elective_1").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].as_str().unwrap().contains("studentId"));
}
