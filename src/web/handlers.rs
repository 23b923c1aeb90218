//! HTTP request handlers
//!
//! Catalog resources live in their own submodules; this file holds the
//! service endpoints (health, version, status, config).

pub mod analytics;
pub mod blog;
pub mod checks;
pub mod glossary;
pub mod threats;
pub mod tools;

use axum::{Json, extract::State};
use tracing::debug;

use crate::build_info;
use crate::config::env;
use crate::error::ApiError;

use super::state::AppState;
use super::types::{ConfigItem, ConfigResponse, HealthResponse, StatusResponse, VersionResponse};

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health() -> Json<HealthResponse> {
    debug!("Health check request received");
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Get version info (build-time information)
#[utoipa::path(
    get,
    path = "/api/version",
    tag = "Version",
    responses(
        (status = 200, description = "Version information", body = VersionResponse)
    )
)]
pub async fn get_version() -> Json<VersionResponse> {
    Json(VersionResponse {
        version: build_info::VERSION.to_string(),
        commit: build_info::GIT_SHA.to_string(),
        build_date: build_info::BUILD_DATE.to_string(),
        rust_version: build_info::RUSTC_SEMVER.to_string(),
        rust_channel: build_info::RUSTC_CHANNEL.to_string(),
        platform: build_info::TARGET_TRIPLE.to_string(),
    })
}

/// Get server status (runtime information)
#[utoipa::path(
    get,
    path = "/api/status",
    tag = "Status",
    responses(
        (status = 200, description = "Server status", body = StatusResponse)
    )
)]
pub async fn get_status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        hostname: state.runtime.hostname.clone(),
        uptime: state.runtime.uptime_string(),
        records: state.store.counts(),
    })
}

/// Get effective configuration
#[utoipa::path(
    get,
    path = "/api/config",
    tag = "Config",
    responses(
        (status = 200, description = "Configuration information", body = ConfigResponse)
    )
)]
pub async fn get_config(State(state): State<AppState>) -> Json<ConfigResponse> {
    let c = &state.config;
    let health_port = if c.health_port == 0 {
        "disabled".to_string()
    } else {
        c.health_port.to_string()
    };

    // Env names come from crate::config::env
    let items = vec![
        ConfigItem::new(env::PORT, c.port),
        ConfigItem::new(env::BIND_ADDRESS, &c.bind_address),
        ConfigItem::new(env::HEALTH_PORT, health_port),
        ConfigItem::new(env::LOG_LEVEL, &c.log_level),
        ConfigItem::new(env::LOG_FORMAT, &c.log_format),
        ConfigItem::new(env::ID_STRATEGY, c.id_strategy),
    ];

    Json(ConfigResponse { items })
}

/// Fallback for unknown routes
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Not found".to_string())
}

/// Fallback for known paths hit with an unsupported method
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Serialized OpenAPI document
pub async fn openapi_json() -> Result<Json<serde_json::Value>, ApiError> {
    use utoipa::OpenApi;

    serde_json::to_value(super::ApiDoc::openapi())
        .map(Json)
        .map_err(|e| ApiError::Internal(format!("Failed to render OpenAPI document: {e}")))
}
