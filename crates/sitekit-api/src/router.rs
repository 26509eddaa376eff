//! Route definitions for the Sitekit HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor; privileged routes enforce the gate through
//! the `AdminUser` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, patch, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes;
    let cors = build_cors_layer(&state.config.server.cors);

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(content_routes())
        .merge(blog_routes())
        .merge(course_routes())
        .merge(project_routes())
        .merge(team_routes())
        .merge(submission_routes())
        .merge(admin_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(request_logging))
        .with_state(state)
}

/// Auth endpoints: signup, login, logout, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(handlers::auth::signup))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/me", get(handlers::auth::me))
}

/// Public content sections
fn content_routes() -> Router<AppState> {
    Router::new().route("/content/{slug}", get(handlers::content::get_section))
}

/// Public blog reads
fn blog_routes() -> Router<AppState> {
    Router::new()
        .route("/blog", get(handlers::blog::list_public))
        .route("/blog/{slug}", get(handlers::blog::get_public))
}

/// Public catalog reads and registration intake
fn course_routes() -> Router<AppState> {
    Router::new()
        .route("/courses", get(handlers::course::list_public))
        .route("/courses/register", post(handlers::registration::register))
        .route("/courses/{slug}", get(handlers::course::get_public))
        .route(
            "/courses/{id}/schedules",
            get(handlers::course::list_public_schedules),
        )
}

/// Public portfolio reads
fn project_routes() -> Router<AppState> {
    Router::new()
        .route("/projects", get(handlers::project::list_public))
        .route("/projects/{slug}", get(handlers::project::get_public))
}

/// Public team listing
fn team_routes() -> Router<AppState> {
    Router::new().route("/team", get(handlers::team::list_public))
}

/// Public brief submission intake
fn submission_routes() -> Router<AppState> {
    Router::new().route("/submissions", post(handlers::submission::create))
}

/// Admin CRUD and management endpoints
fn admin_routes() -> Router<AppState> {
    Router::new()
        // Blog
        .route("/admin/blog", get(handlers::blog::list_admin))
        .route("/admin/blog", post(handlers::blog::create))
        .route("/admin/blog/{id}", patch(handlers::blog::update))
        .route("/admin/blog/{id}", delete(handlers::blog::delete))
        // Courses
        .route("/admin/courses", get(handlers::course::list_admin))
        .route("/admin/courses", post(handlers::course::create))
        .route("/admin/courses/{id}", patch(handlers::course::update))
        .route("/admin/courses/{id}", delete(handlers::course::delete))
        .route(
            "/admin/courses/{id}/schedules",
            get(handlers::course::list_admin_schedules),
        )
        .route("/admin/schedules", post(handlers::course::create_schedule))
        .route(
            "/admin/schedules/{id}",
            patch(handlers::course::update_schedule),
        )
        .route(
            "/admin/schedules/{id}",
            delete(handlers::course::delete_schedule),
        )
        // Projects
        .route("/admin/projects", get(handlers::project::list_admin))
        .route("/admin/projects", post(handlers::project::create))
        .route("/admin/projects/{id}", patch(handlers::project::update))
        .route("/admin/projects/{id}", delete(handlers::project::delete))
        // Team
        .route("/admin/team", get(handlers::team::list_admin))
        .route("/admin/team", post(handlers::team::create))
        .route("/admin/team/{id}", patch(handlers::team::update))
        .route("/admin/team/{id}", delete(handlers::team::delete))
        // Content lists and cards
        .route("/admin/content/lists", get(handlers::content::list_lists))
        .route("/admin/content/lists", post(handlers::content::create_list))
        .route(
            "/admin/content/lists/{id}",
            patch(handlers::content::update_list),
        )
        .route(
            "/admin/content/lists/{id}",
            delete(handlers::content::delete_list),
        )
        .route(
            "/admin/content/lists/{id}/cards",
            get(handlers::content::list_cards),
        )
        .route("/admin/content/cards", post(handlers::content::create_card))
        .route(
            "/admin/content/cards/{id}",
            patch(handlers::content::update_card),
        )
        .route(
            "/admin/content/cards/{id}",
            delete(handlers::content::delete_card),
        )
        // Registrations
        .route(
            "/admin/registrations",
            get(handlers::registration::list_admin),
        )
        .route(
            "/admin/registrations/{id}/status",
            patch(handlers::registration::update_status),
        )
        // Submissions
        .route("/admin/submissions", get(handlers::submission::list_admin))
        .route(
            "/admin/submissions/{id}",
            get(handlers::submission::get_admin),
        )
        .route(
            "/admin/submissions/{id}/status",
            patch(handlers::submission::update_status),
        )
        .route(
            "/admin/submissions/{id}/attachment",
            get(handlers::submission::download_attachment),
        )
        // Users
        .route("/admin/users", get(handlers::admin::users::list))
        .route("/admin/users", post(handlers::admin::users::create))
        .route(
            "/admin/users/{id}/role",
            put(handlers::admin::users::change_role),
        )
        .route(
            "/admin/users/{id}/password",
            put(handlers::admin::users::reset_password),
        )
        // Cache revalidation
        .route(
            "/admin/revalidate",
            post(handlers::admin::revalidate::revalidate),
        )
}

/// Health endpoints
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}
