//! Integration tests for sessions and the authorization gate.

mod common;

use http::StatusCode;
use serde_json::json;

use sitekit_entity::user::UserRole;

#[tokio::test]
async fn test_signup_sets_session_and_me_resolves() {
    let app = common::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(json!({
                "email": "ada@example.com",
                "password": "mellow-gravel-onyx-42",
                "display_name": "Ada",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["role"], "user");
    assert!(response.body["data"].get("password_hash").is_none());

    let cookie = response.cookies.first().expect("No cookie issued").clone();
    let me = app.request("GET", "/api/auth/me", None, Some(&cookie)).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["data"]["email"], "ada@example.com");
}

#[tokio::test]
async fn test_login_wrong_password_is_unauthorized() {
    let app = common::TestApp::new().await;
    app.create_user("grace@example.com", "hopper-compiles-cobol-9", UserRole::User)
        .await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "grace@example.com", "password": "wrong" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_unknown_email_is_unauthorized() {
    let app = common::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "nobody@example.com", "password": "whatever" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_without_cookie_is_unauthorized() {
    let app = common::TestApp::new().await;
    let response = app.request("GET", "/api/auth/me", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_destroys_token_session() {
    let app = common::TestApp::new().await;
    app.create_user("linus@example.com", "kernel-penguin-march-91", UserRole::User)
        .await;
    let cookie = app.login("linus@example.com", "kernel-penguin-march-91").await;

    let me = app.request("GET", "/api/auth/me", None, Some(&cookie)).await;
    assert_eq!(me.status, StatusCode::OK);

    let logout = app
        .request("POST", "/api/auth/logout", None, Some(&cookie))
        .await;
    assert_eq!(logout.status, StatusCode::OK);

    // The session row is gone, so the old cookie no longer resolves.
    let me = app.request("GET", "/api/auth/me", None, Some(&cookie)).await;
    assert_eq!(me.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_legacy_scheme_round_trip() {
    let app = common::TestApp::with_scheme("legacy").await;
    let user_id = app
        .create_user("marge@example.com", "teal-harbor-quartz-77", UserRole::User)
        .await;

    let cookie = app.login("marge@example.com", "teal-harbor-quartz-77").await;
    assert_eq!(cookie, format!("session={user_id}"));

    let me = app.request("GET", "/api/auth/me", None, Some(&cookie)).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["data"]["id"], user_id.to_string());
}

#[tokio::test]
async fn test_legacy_cookie_with_unknown_id_is_anonymous() {
    let app = common::TestApp::with_scheme("legacy").await;

    let forged = format!("session={}", uuid::Uuid::new_v4());
    let me = app.request("GET", "/api/auth/me", None, Some(&forged)).await;
    assert_eq!(me.status, StatusCode::UNAUTHORIZED);

    let garbage = app
        .request("GET", "/api/auth/me", None, Some("session=not-a-uuid"))
        .await;
    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_session_with_missing_user_is_anonymous() {
    let app = common::TestApp::new().await;
    let user_id = app
        .create_user("ghost@example.com", "phantom-cellar-nine-33", UserRole::Admin)
        .await;
    let cookie = app.login("ghost@example.com", "phantom-cellar-nine-33").await;

    // Remove the user behind the live session. The role can no longer
    // be asserted, so the cookie resolves to anonymous.
    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user_id)
        .execute(&app.db_pool)
        .await
        .unwrap();
    let me = app.request("GET", "/api/auth/me", None, Some(&cookie)).await;
    assert_eq!(me.status, StatusCode::UNAUTHORIZED);

    let admin = app
        .request("GET", "/api/admin/users", None, Some(&cookie))
        .await;
    assert_eq!(admin.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_anonymous_admin_request_is_forbidden_and_mutates_nothing() {
    let app = common::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/admin/blog",
            Some(json!({ "slug": "sneaky", "title": "Sneaky", "body": "..." })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM blog_posts")
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_non_admin_user_is_forbidden() {
    let app = common::TestApp::new().await;
    app.create_user("vis@example.com", "violet-stream-baker-12", UserRole::User)
        .await;
    let cookie = app.login("vis@example.com", "violet-stream-baker-12").await;

    let response = app
        .request("GET", "/api/admin/users", None, Some(&cookie))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_can_provision_and_promote_users() {
    let app = common::TestApp::new().await;
    app.create_user("root@example.com", "sturdy-copper-lantern-8", UserRole::Admin)
        .await;
    let cookie = app.login("root@example.com", "sturdy-copper-lantern-8").await;

    let created = app
        .request(
            "POST",
            "/api/admin/users",
            Some(json!({
                "email": "editor@example.com",
                "password": "quiet-meadow-sprint-55",
                "role": "user",
            })),
            Some(&cookie),
        )
        .await;
    assert_eq!(created.status, StatusCode::OK);
    let id = created.body["data"]["id"].as_str().unwrap().to_string();

    let promoted = app
        .request(
            "PUT",
            &format!("/api/admin/users/{id}/role"),
            Some(json!({ "role": "admin" })),
            Some(&cookie),
        )
        .await;
    assert_eq!(promoted.status, StatusCode::OK);
    assert_eq!(promoted.body["data"]["role"], "admin");
}
