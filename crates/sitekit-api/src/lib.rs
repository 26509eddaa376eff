//! # sitekit-api
//!
//! The Axum HTTP API for Sitekit: application state, route definitions,
//! handlers, extractors, middleware, and the domain-error to HTTP
//! mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use error::{ApiError, ApiResult};
pub use state::AppState;
