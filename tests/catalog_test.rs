//! Integration tests for the course catalog, registrations, and the
//! public visibility invariant.

mod common;

use http::StatusCode;
use serde_json::json;

use sitekit_entity::user::UserRole;

async fn admin_cookie(app: &common::TestApp) -> String {
    app.create_user("staff@example.com", "sturdy-copper-lantern-8", UserRole::Admin)
        .await;
    app.login("staff@example.com", "sturdy-copper-lantern-8").await
}

#[tokio::test]
async fn test_features_round_trip_as_array() {
    let app = common::TestApp::new().await;
    let cookie = admin_cookie(&app).await;

    let created = app
        .request(
            "POST",
            "/api/admin/courses",
            Some(json!({
                "slug": "rust-101",
                "title": "Rust from zero",
                "price_cents": 49900,
                "features": ["a", "b"],
            })),
            Some(&cookie),
        )
        .await;
    assert_eq!(created.status, StatusCode::OK);
    assert_eq!(created.body["data"]["features"], json!(["a", "b"]));

    let public = app.request("GET", "/api/courses/rust-101", None, None).await;
    assert_eq!(public.status, StatusCode::OK);
    assert_eq!(public.body["data"]["course"]["features"], json!(["a", "b"]));
}

#[tokio::test]
async fn test_inactive_courses_hidden_from_public_sorted_listing() {
    let app = common::TestApp::new().await;
    let cookie = admin_cookie(&app).await;

    for (slug, sort_order, is_active) in [
        ("late", 10, true),
        ("early", 5, true),
        ("hidden", 1, false),
    ] {
        let created = app
            .request(
                "POST",
                "/api/admin/courses",
                Some(json!({
                    "slug": slug,
                    "title": slug,
                    "sort_order": sort_order,
                    "is_active": is_active,
                })),
                Some(&cookie),
            )
            .await;
        assert_eq!(created.status, StatusCode::OK);
    }

    let public = app.request("GET", "/api/courses", None, None).await;
    let slugs: Vec<&str> = public.body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["early", "late"]);

    let admin = app
        .request("GET", "/api/admin/courses", None, Some(&cookie))
        .await;
    assert_eq!(admin.body["data"]["items"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_course_mutation_refreshes_public_listing() {
    let app = common::TestApp::new().await;
    let cookie = admin_cookie(&app).await;

    let created = app
        .request(
            "POST",
            "/api/admin/courses",
            Some(json!({ "slug": "cache-me", "title": "Old title" })),
            Some(&cookie),
        )
        .await;
    let id = created.body["data"]["id"].as_str().unwrap().to_string();

    // Populate the cache, then mutate.
    app.request("GET", "/api/courses", None, None).await;
    let updated = app
        .request(
            "PATCH",
            &format!("/api/admin/courses/{id}"),
            Some(json!({ "title": "New title" })),
            Some(&cookie),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);

    let public = app.request("GET", "/api/courses", None, None).await;
    assert_eq!(public.body["data"][0]["title"], "New title");
}

#[tokio::test]
async fn test_anonymous_registration_scenario() {
    let app = common::TestApp::new().await;
    let cookie = admin_cookie(&app).await;

    let course = app
        .request(
            "POST",
            "/api/admin/courses",
            Some(json!({ "slug": "c1", "title": "Course One" })),
            Some(&cookie),
        )
        .await;
    let course_id = course.body["data"]["id"].as_str().unwrap().to_string();

    // No session: the registration is created anonymously, pending.
    let registered = app
        .request(
            "POST",
            "/api/courses/register",
            Some(json!({
                "course_id": course_id,
                "name": "Ada",
                "email": "ada@x.com",
            })),
            None,
        )
        .await;
    assert_eq!(registered.status, StatusCode::OK);
    assert_eq!(registered.body["success"], true);
    let registration_id = registered.body["registration_id"].as_str().unwrap().to_string();

    let (user_id, status): (Option<uuid::Uuid>, String) = sqlx::query_as(
        "SELECT user_id, status::text FROM course_registrations WHERE id = $1::uuid",
    )
    .bind(&registration_id)
    .fetch_one(&app.db_pool)
    .await
    .unwrap();
    assert!(user_id.is_none());
    assert_eq!(status, "pending");

    // Admin approves and verifies payment; only status and the payment
    // timestamp change.
    let approved = app
        .request(
            "PATCH",
            &format!("/api/admin/registrations/{registration_id}/status"),
            Some(json!({ "status": "approved", "verify_payment": true })),
            Some(&cookie),
        )
        .await;
    assert_eq!(approved.status, StatusCode::OK);
    assert_eq!(approved.body["data"]["status"], "approved");
    assert_eq!(approved.body["data"]["name"], "Ada");
    assert!(!approved.body["data"]["payment_verified_at"].is_null());
}

#[tokio::test]
async fn test_logged_in_registration_attaches_user_id() {
    let app = common::TestApp::new().await;
    let admin = admin_cookie(&app).await;

    let course = app
        .request(
            "POST",
            "/api/admin/courses",
            Some(json!({ "slug": "c2", "title": "Course Two" })),
            Some(&admin),
        )
        .await;
    let course_id = course.body["data"]["id"].as_str().unwrap().to_string();

    let user_id = app
        .create_user("student@example.com", "maple-syrup-ridge-20", UserRole::User)
        .await;
    let cookie = app.login("student@example.com", "maple-syrup-ridge-20").await;

    let registered = app
        .request(
            "POST",
            "/api/courses/register",
            Some(json!({
                "course_id": course_id,
                "name": "Student",
                "email": "student@example.com",
            })),
            Some(&cookie),
        )
        .await;
    assert_eq!(registered.status, StatusCode::OK);

    let stored: Option<uuid::Uuid> = sqlx::query_scalar(
        "SELECT user_id FROM course_registrations WHERE id = $1::uuid",
    )
    .bind(registered.body["registration_id"].as_str().unwrap())
    .fetch_one(&app.db_pool)
    .await
    .unwrap();
    assert_eq!(stored, Some(user_id));
}

#[tokio::test]
async fn test_registration_for_unknown_course_is_a_validation_error() {
    let app = common::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/courses/register",
            Some(json!({
                "course_id": uuid::Uuid::new_v4(),
                "name": "Ada",
                "email": "ada@x.com",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_schedule_changes_refresh_course_detail() {
    let app = common::TestApp::new().await;
    let cookie = admin_cookie(&app).await;

    let course = app
        .request(
            "POST",
            "/api/admin/courses",
            Some(json!({ "slug": "scheduled", "title": "Scheduled" })),
            Some(&cookie),
        )
        .await;
    let course_id = course.body["data"]["id"].as_str().unwrap().to_string();

    // Cache the detail with no schedules.
    let before = app
        .request("GET", "/api/courses/scheduled", None, None)
        .await;
    assert_eq!(before.body["data"]["schedules"].as_array().unwrap().len(), 0);

    let schedule = app
        .request(
            "POST",
            "/api/admin/schedules",
            Some(json!({
                "course_id": course_id,
                "starts_at": "2026-09-01T09:00:00Z",
                "location": "online",
            })),
            Some(&cookie),
        )
        .await;
    assert_eq!(schedule.status, StatusCode::OK);

    let after = app
        .request("GET", "/api/courses/scheduled", None, None)
        .await;
    assert_eq!(after.body["data"]["schedules"].as_array().unwrap().len(), 1);
}
