//! Shared test helpers for integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use sitekit_auth::password::PasswordHasher;
use sitekit_core::config::AppConfig;
use sitekit_database::repositories::user::UserRepository;
use sitekit_entity::user::UserRole;
use sitekit_entity::user::model::CreateUser;

/// Tests share one database, so each `TestApp` holds this lock for its
/// lifetime to keep table cleanup from racing concurrent tests.
static DB_LOCK: tokio::sync::Mutex<()> = tokio::sync::Mutex::const_new(());

/// Test application context.
pub struct TestApp {
    /// The Axum router for making in-process requests.
    pub router: Router,
    /// Database pool for direct queries.
    pub db_pool: PgPool,
    /// Upload directory, removed on drop.
    _uploads: tempfile::TempDir,
    /// Held until the test finishes.
    _db_guard: tokio::sync::MutexGuard<'static, ()>,
}

/// A collected response: status, parsed JSON body, and Set-Cookie values.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
    pub cookies: Vec<String>,
}

impl TestApp {
    /// Create a test application with the default (token) scheme.
    pub async fn new() -> Self {
        Self::with_scheme("token").await
    }

    /// Create a test application with an explicit session scheme.
    pub async fn with_scheme(scheme: &str) -> Self {
        let db_guard = DB_LOCK.lock().await;

        let mut config = AppConfig::load_file("tests/fixtures/test_config")
            .expect("Failed to load test config");
        config.auth.scheme = scheme.to_string();

        let uploads = tempfile::tempdir().expect("Failed to create upload dir");
        config.upload.root = uploads.path().to_string_lossy().into_owned();

        let db_pool = sitekit_database::connection::create_pool(&config.database)
            .await
            .expect("Failed to connect to test database");
        sitekit_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        clean_database(&db_pool).await;

        let state = sitekit_api::build_state(config, db_pool.clone())
            .await
            .expect("Failed to build state");
        let router = sitekit_api::build_app(state);

        Self {
            router,
            db_pool,
            _uploads: uploads,
            _db_guard: db_guard,
        }
    }

    /// Perform an in-process request with an optional JSON body and
    /// session cookie.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        cookie: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let cookies = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .filter_map(|v| v.split(';').next())
            .map(String::from)
            .collect();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse {
            status,
            body,
            cookies,
        }
    }

    /// Perform an in-process request with a raw body and content type
    /// (used for multipart submissions).
    pub async fn request_raw(
        &self,
        method: &str,
        path: &str,
        content_type: &str,
        body: Vec<u8>,
        cookie: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, content_type);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }

        let response = self
            .router
            .clone()
            .oneshot(builder.body(Body::from(body)).unwrap())
            .await
            .expect("Request failed");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            body,
            cookies: Vec::new(),
        }
    }

    /// Insert a user directly, bypassing signup's password policy.
    pub async fn create_user(&self, email: &str, password: &str, role: UserRole) -> Uuid {
        let hasher = PasswordHasher::new();
        let repo = Arc::new(UserRepository::new(self.db_pool.clone()));
        let user = repo
            .create(&CreateUser {
                email: email.to_string(),
                password_hash: hasher.hash_password(password).unwrap(),
                display_name: None,
                role,
            })
            .await
            .expect("Failed to create test user");
        user.id
    }

    /// Log in and return the session cookie as a `name=value` pair.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({ "email": email, "password": password })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "login failed");
        response
            .cookies
            .into_iter()
            .find(|c| !c.ends_with('='))
            .expect("No session cookie issued")
    }
}

/// Remove every row, children before parents.
async fn clean_database(pool: &PgPool) {
    for table in [
        "auth_sessions",
        "course_registrations",
        "course_schedules",
        "project_submissions",
        "content_cards",
        "content_lists",
        "blog_posts",
        "projects",
        "team_members",
        "courses",
        "users",
    ] {
        sqlx::query(&format!("DELETE FROM {table}"))
            .execute(pool)
            .await
            .expect("Failed to clean table");
    }
}
