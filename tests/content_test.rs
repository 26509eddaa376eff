//! Integration tests for content sections, visibility, and cache
//! invalidation.

mod common;

use http::StatusCode;
use serde_json::json;

use sitekit_entity::user::UserRole;

async fn admin_cookie(app: &common::TestApp) -> String {
    app.create_user("cms@example.com", "sturdy-copper-lantern-8", UserRole::Admin)
        .await;
    app.login("cms@example.com", "sturdy-copper-lantern-8").await
}

#[tokio::test]
async fn test_section_shows_active_cards_in_order() {
    let app = common::TestApp::new().await;
    let cookie = admin_cookie(&app).await;

    let list = app
        .request(
            "POST",
            "/api/admin/content/lists",
            Some(json!({ "slug": "services", "title": "What we do" })),
            Some(&cookie),
        )
        .await;
    assert_eq!(list.status, StatusCode::OK);
    let list_id = list.body["data"]["id"].as_str().unwrap().to_string();

    for (title, sort_order, is_active) in [
        ("Consulting", 2, true),
        ("Training", 1, true),
        ("Secret internal", 0, false),
    ] {
        let card = app
            .request(
                "POST",
                "/api/admin/content/cards",
                Some(json!({
                    "list_id": list_id,
                    "title": title,
                    "sort_order": sort_order,
                    "is_active": is_active,
                })),
                Some(&cookie),
            )
            .await;
        assert_eq!(card.status, StatusCode::OK);
    }

    let section = app
        .request("GET", "/api/content/services", None, None)
        .await;
    assert_eq!(section.status, StatusCode::OK);
    let cards = section.body["data"]["cards"].as_array().unwrap();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0]["title"], "Training");
    assert_eq!(cards[1]["title"], "Consulting");

    // The admin view is unfiltered.
    let admin_cards = app
        .request(
            "GET",
            &format!("/api/admin/content/lists/{list_id}/cards"),
            None,
            Some(&cookie),
        )
        .await;
    assert_eq!(admin_cards.body["data"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_card_mutation_invalidates_cached_section() {
    let app = common::TestApp::new().await;
    let cookie = admin_cookie(&app).await;

    let list = app
        .request(
            "POST",
            "/api/admin/content/lists",
            Some(json!({ "slug": "service-section", "title": "Teaser" })),
            Some(&cookie),
        )
        .await;
    let list_id = list.body["data"]["id"].as_str().unwrap().to_string();

    let card = app
        .request(
            "POST",
            "/api/admin/content/cards",
            Some(json!({ "list_id": list_id, "title": "Before" })),
            Some(&cookie),
        )
        .await;
    let card_id = card.body["data"]["id"].as_str().unwrap().to_string();

    // Populate the cache.
    let first = app
        .request("GET", "/api/content/service-section", None, None)
        .await;
    assert_eq!(first.body["data"]["cards"][0]["title"], "Before");

    let updated = app
        .request(
            "PATCH",
            &format!("/api/admin/content/cards/{card_id}"),
            Some(json!({ "title": "After" })),
            Some(&cookie),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);

    // The write invalidated the tag, so the next read recomputes.
    let second = app
        .request("GET", "/api/content/service-section", None, None)
        .await;
    assert_eq!(second.body["data"]["cards"][0]["title"], "After");
}

#[tokio::test]
async fn test_inactive_section_is_not_public() {
    let app = common::TestApp::new().await;
    let cookie = admin_cookie(&app).await;

    let list = app
        .request(
            "POST",
            "/api/admin/content/lists",
            Some(json!({ "slug": "draft", "title": "Draft", "is_active": false })),
            Some(&cookie),
        )
        .await;
    assert_eq!(list.status, StatusCode::OK);

    let section = app.request("GET", "/api/content/draft", None, None).await;
    assert_eq!(section.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_card_metadata_round_trips_as_structured_json() {
    let app = common::TestApp::new().await;
    let cookie = admin_cookie(&app).await;

    let list = app
        .request(
            "POST",
            "/api/admin/content/lists",
            Some(json!({ "slug": "features", "title": "Features" })),
            Some(&cookie),
        )
        .await;
    let list_id = list.body["data"]["id"].as_str().unwrap().to_string();

    let with_metadata = app
        .request(
            "POST",
            "/api/admin/content/cards",
            Some(json!({
                "list_id": list_id,
                "title": "Linked",
                "metadata": { "href": "/contact", "badge": "new" },
            })),
            Some(&cookie),
        )
        .await;
    assert_eq!(
        with_metadata.body["data"]["metadata"],
        json!({ "href": "/contact", "badge": "new" })
    );

    // Null metadata stays null, not the string "null".
    let without_metadata = app
        .request(
            "POST",
            "/api/admin/content/cards",
            Some(json!({ "list_id": list_id, "title": "Plain", "metadata": null })),
            Some(&cookie),
        )
        .await;
    assert!(without_metadata.body["data"]["metadata"].is_null());
}

#[tokio::test]
async fn test_duplicate_list_slug_conflicts() {
    let app = common::TestApp::new().await;
    let cookie = admin_cookie(&app).await;

    let body = json!({ "slug": "services", "title": "One" });
    let first = app
        .request(
            "POST",
            "/api/admin/content/lists",
            Some(body.clone()),
            Some(&cookie),
        )
        .await;
    assert_eq!(first.status, StatusCode::OK);

    let second = app
        .request("POST", "/api/admin/content/lists", Some(body), Some(&cookie))
        .await;
    assert_eq!(second.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_missing_title_is_a_validation_error() {
    let app = common::TestApp::new().await;
    let cookie = admin_cookie(&app).await;

    let response = app
        .request(
            "POST",
            "/api/admin/content/lists",
            Some(json!({ "slug": "nameless", "title": "" })),
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(
        response.body["error"]
            .as_str()
            .unwrap()
            .contains("title")
    );
}

#[tokio::test]
async fn test_revalidate_endpoint_is_admin_only() {
    let app = common::TestApp::new().await;

    let anonymous = app
        .request(
            "POST",
            "/api/admin/revalidate",
            Some(json!({ "tag": "services" })),
            None,
        )
        .await;
    assert_eq!(anonymous.status, StatusCode::FORBIDDEN);

    let cookie = admin_cookie(&app).await;
    let admin = app
        .request(
            "POST",
            "/api/admin/revalidate",
            Some(json!({ "tag": "services" })),
            Some(&cookie),
        )
        .await;
    assert_eq!(admin.status, StatusCode::OK);
}
