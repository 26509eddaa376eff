//! Integration tests for project brief submissions.

mod common;

use http::StatusCode;
use serde_json::json;

use sitekit_entity::user::UserRole;

const BOUNDARY: &str = "sitekit-test-boundary";

fn multipart_body(fields: &[(&str, &str)], attachment: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((file_name, data)) = attachment {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"attachment\"; \
                 filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn content_type() -> String {
    format!("multipart/form-data; boundary={BOUNDARY}")
}

#[tokio::test]
async fn test_submission_with_attachment_round_trips() {
    let app = common::TestApp::new().await;

    let body = multipart_body(
        &[
            ("name", "Ada"),
            ("email", "ada@x.com"),
            ("company", "Analytical Engines Ltd"),
            ("brief", "We need a difference engine portal."),
        ],
        Some(("brief v1.pdf", b"PDFDATA")),
    );

    let response = app
        .request_raw("POST", "/api/submissions", &content_type(), body, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "new");
    let id = response.body["data"]["id"].as_str().unwrap().to_string();

    // Admin can fetch the record and download the stored attachment.
    app.create_user("ops@example.com", "sturdy-copper-lantern-8", UserRole::Admin)
        .await;
    let cookie = app.login("ops@example.com", "sturdy-copper-lantern-8").await;

    let fetched = app
        .request(
            "GET",
            &format!("/api/admin/submissions/{id}"),
            None,
            Some(&cookie),
        )
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["data"]["attachment_name"], "brief v1.pdf");

    let download = app
        .request(
            "GET",
            &format!("/api/admin/submissions/{id}/attachment"),
            None,
            Some(&cookie),
        )
        .await;
    assert_eq!(download.status, StatusCode::OK);

    let reviewed = app
        .request(
            "PATCH",
            &format!("/api/admin/submissions/{id}/status"),
            Some(json!({ "status": "reviewed" })),
            Some(&cookie),
        )
        .await;
    assert_eq!(reviewed.body["data"]["status"], "reviewed");
}

#[tokio::test]
async fn test_submission_without_brief_names_the_field() {
    let app = common::TestApp::new().await;

    let body = multipart_body(&[("name", "Ada"), ("email", "ada@x.com")], None);
    let response = app
        .request_raw("POST", "/api/submissions", &content_type(), body, None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["error"].as_str().unwrap().contains("brief"));
}

#[tokio::test]
async fn test_submission_listing_is_admin_only() {
    let app = common::TestApp::new().await;

    let anonymous = app.request("GET", "/api/admin/submissions", None, None).await;
    assert_eq!(anonymous.status, StatusCode::FORBIDDEN);
}
