//! Health endpoints.

use axum::Json;
use axum::extract::State;

use sitekit_core::traits::cache::CacheProvider;
use sitekit_database::connection;

use crate::dto::response::{ApiResponse, DetailedHealthResponse, HealthResponse};
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/health
pub async fn health() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

/// GET /api/health/detailed
pub async fn health_detailed(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<DetailedHealthResponse>>> {
    let database = match connection::health_check(&state.db_pool).await {
        Ok(true) => "ok",
        _ => "down",
    };
    let cache = match state.cache.health_check().await {
        Ok(true) => "ok",
        _ => "down",
    };

    let status = if database == "ok" && cache == "ok" {
        "ok"
    } else {
        "degraded"
    };

    Ok(Json(ApiResponse::ok(DetailedHealthResponse {
        status: status.to_string(),
        database: database.to_string(),
        cache: cache.to_string(),
    })))
}
