//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use sitekit_auth::session::legacy::LegacySessionManager;
use sitekit_auth::session::resolver::SessionResolverDispatch;
use sitekit_auth::session::token::TokenSessionManager;
use sitekit_cache::provider::CacheManager;
use sitekit_core::config::AppConfig;
use sitekit_core::traits::invalidator::CacheInvalidator;

use sitekit_service::account::AccountService;
use sitekit_service::blog::BlogService;
use sitekit_service::catalog::CatalogService;
use sitekit_service::content::ContentService;
use sitekit_service::portfolio::PortfolioService;
use sitekit_service::registration::RegistrationService;
use sitekit_service::submission::SubmissionService;
use sitekit_service::team::TeamService;
use sitekit_service::user::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,
    /// Cache manager (Redis or in-memory)
    pub cache: Arc<CacheManager>,
    /// Tag invalidation bus
    pub invalidator: Arc<dyn CacheInvalidator>,

    // ── Sessions ─────────────────────────────────────────────
    /// Unified session resolver (configured scheme)
    pub session_resolver: Arc<SessionResolverDispatch>,
    /// Legacy id-cookie session manager
    pub legacy_sessions: Arc<LegacySessionManager>,
    /// Token session manager
    pub token_sessions: Arc<TokenSessionManager>,

    // ── Services ─────────────────────────────────────────────
    /// Signup and credential checks
    pub account_service: Arc<AccountService>,
    /// Admin user management
    pub user_service: Arc<UserService>,
    /// Blog posts
    pub blog_service: Arc<BlogService>,
    /// Content sections (lists + cards)
    pub content_service: Arc<ContentService>,
    /// Courses and schedules
    pub catalog_service: Arc<CatalogService>,
    /// Course registrations
    pub registration_service: Arc<RegistrationService>,
    /// Portfolio projects
    pub portfolio_service: Arc<PortfolioService>,
    /// Team members
    pub team_service: Arc<TeamService>,
    /// Project brief submissions
    pub submission_service: Arc<SubmissionService>,
}
