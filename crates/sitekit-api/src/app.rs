//! Application builder: wires repositories, sessions, cache, and
//! services into `AppState`, then serves the router.

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;
use tracing::info;

use sitekit_auth::password::{PasswordHasher, PasswordValidator};
use sitekit_auth::session::legacy::LegacySessionManager;
use sitekit_auth::session::resolver::{SessionResolverDispatch, SessionScheme};
use sitekit_auth::session::token::TokenSessionManager;
use sitekit_cache::invalidator::TagInvalidator;
use sitekit_cache::provider::CacheManager;
use sitekit_core::config::AppConfig;
use sitekit_core::error::AppError;
use sitekit_core::result::AppResult;
use sitekit_core::traits::invalidator::CacheInvalidator;

use sitekit_database::repositories::{
    AuthSessionRepository, BlogPostRepository, ContentCardRepository, ContentListRepository,
    CourseRepository, ProjectRepository, RegistrationRepository, ScheduleRepository,
    SubmissionRepository, TeamMemberRepository, UserRepository,
};

use sitekit_service::account::AccountService;
use sitekit_service::blog::BlogService;
use sitekit_service::catalog::CatalogService;
use sitekit_service::content::ContentService;
use sitekit_service::portfolio::PortfolioService;
use sitekit_service::registration::RegistrationService;
use sitekit_service::submission::SubmissionService;
use sitekit_service::team::TeamService;
use sitekit_service::upload::UploadStore;
use sitekit_service::user::UserService;

use crate::router::build_router;
use crate::state::AppState;

/// Construct the full application state from configuration and an
/// already-connected pool.
pub async fn build_state(config: AppConfig, db_pool: PgPool) -> AppResult<AppState> {
    crate::error::expose_error_details(!config.is_production());

    // ── Cache and invalidation bus ───────────────────────────────
    let cache = Arc::new(CacheManager::new(&config.cache).await?);
    let invalidator: Arc<dyn CacheInvalidator> =
        Arc::new(TagInvalidator::new(Arc::clone(&cache)));

    // ── Repositories ─────────────────────────────────────────────
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let session_repo = Arc::new(AuthSessionRepository::new(db_pool.clone()));
    let blog_repo = Arc::new(BlogPostRepository::new(db_pool.clone()));
    let course_repo = Arc::new(CourseRepository::new(db_pool.clone()));
    let schedule_repo = Arc::new(ScheduleRepository::new(db_pool.clone()));
    let project_repo = Arc::new(ProjectRepository::new(db_pool.clone()));
    let team_repo = Arc::new(TeamMemberRepository::new(db_pool.clone()));
    let list_repo = Arc::new(ContentListRepository::new(db_pool.clone()));
    let card_repo = Arc::new(ContentCardRepository::new(db_pool.clone()));
    let registration_repo = Arc::new(RegistrationRepository::new(db_pool.clone()));
    let submission_repo = Arc::new(SubmissionRepository::new(db_pool.clone()));

    // Opportunistic cleanup: token sessions past their expiry serve no
    // purpose, so drop them on boot.
    match session_repo.delete_expired(chrono::Utc::now()).await {
        Ok(pruned) if pruned > 0 => info!(pruned, "Removed expired sessions"),
        Ok(_) => {}
        Err(e) => tracing::warn!(error = %e, "Failed to prune expired sessions"),
    }

    // ── Sessions ─────────────────────────────────────────────────
    let secure_cookies = config.is_production();
    let legacy_sessions = Arc::new(LegacySessionManager::new(
        Arc::clone(&user_repo),
        &config.session,
        secure_cookies,
    ));
    let token_sessions = Arc::new(TokenSessionManager::new(
        Arc::clone(&session_repo),
        Arc::clone(&user_repo),
        &config.session,
        secure_cookies,
    ));
    let scheme = config.auth.scheme.parse::<SessionScheme>()?;
    let session_resolver = Arc::new(SessionResolverDispatch::new(
        scheme,
        Arc::clone(&legacy_sessions),
        Arc::clone(&token_sessions),
    ));
    info!(?scheme, "Session scheme configured");

    // ── Services ─────────────────────────────────────────────────
    let hasher = Arc::new(PasswordHasher::new());
    let validator = Arc::new(PasswordValidator::new(&config.auth));
    let uploads = Arc::new(UploadStore::new(&config.upload).await?);

    let account_service = Arc::new(AccountService::new(
        Arc::clone(&user_repo),
        Arc::clone(&hasher),
        Arc::clone(&validator),
    ));
    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&hasher),
        Arc::clone(&validator),
    ));
    let blog_service = Arc::new(BlogService::new(
        Arc::clone(&blog_repo),
        Arc::clone(&cache),
        Arc::clone(&invalidator),
    ));
    let content_service = Arc::new(ContentService::new(
        Arc::clone(&list_repo),
        Arc::clone(&card_repo),
        Arc::clone(&cache),
        Arc::clone(&invalidator),
    ));
    let catalog_service = Arc::new(CatalogService::new(
        Arc::clone(&course_repo),
        Arc::clone(&schedule_repo),
        Arc::clone(&cache),
        Arc::clone(&invalidator),
    ));
    let registration_service = Arc::new(RegistrationService::new(Arc::clone(&registration_repo)));
    let portfolio_service = Arc::new(PortfolioService::new(
        Arc::clone(&project_repo),
        Arc::clone(&cache),
        Arc::clone(&invalidator),
    ));
    let team_service = Arc::new(TeamService::new(
        Arc::clone(&team_repo),
        Arc::clone(&cache),
        Arc::clone(&invalidator),
    ));
    let submission_service = Arc::new(SubmissionService::new(
        Arc::clone(&submission_repo),
        Arc::clone(&uploads),
    ));

    Ok(AppState {
        config: Arc::new(config),
        db_pool,
        cache,
        invalidator,
        session_resolver,
        legacy_sessions,
        token_sessions,
        account_service,
        user_service,
        blog_service,
        content_service,
        catalog_service,
        registration_service,
        portfolio_service,
        team_service,
        submission_service,
    })
}

/// Build the Axum application from constructed state.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Run the Sitekit server until shutdown.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> AppResult<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = build_state(config, db_pool).await?;
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!(%addr, "Sitekit listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received");
}
