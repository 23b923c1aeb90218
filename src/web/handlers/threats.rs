//! Threat catalog endpoints

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::info;

use crate::error::{ApiError, ErrorResponse};
use crate::storage::{NewThreat, Threat, ThreatPatch};
use crate::web::extract::{ValidatedJson, ValidatedQuery};
use crate::web::state::AppState;
use crate::web::types::ThreatQuery;

/// List threats
#[utoipa::path(
    get,
    path = "/api/threats",
    tag = "Threats",
    params(ThreatQuery),
    responses(
        (status = 200, description = "Matching threats in creation order", body = Vec<Threat>),
        (status = 400, description = "Invalid query parameter", body = ErrorResponse)
    )
)]
pub async fn list_threats(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ThreatQuery>,
) -> Json<Vec<Threat>> {
    Json(state.store.threats_matching(&query.to_filter()))
}

/// Get a threat by id
#[utoipa::path(
    get,
    path = "/api/threats/{id}",
    tag = "Threats",
    params(("id" = String, Path, description = "Threat id")),
    responses(
        (status = 200, description = "Threat", body = Threat),
        (status = 404, description = "Threat not found", body = ErrorResponse)
    )
)]
pub async fn get_threat(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Threat>, ApiError> {
    state
        .store
        .get::<Threat>(&id)
        .map(Json)
        .ok_or_else(ApiError::not_found::<Threat>)
}

/// Create a threat
#[utoipa::path(
    post,
    path = "/api/threats",
    tag = "Threats",
    request_body = NewThreat,
    responses(
        (status = 201, description = "Threat created", body = Threat),
        (status = 400, description = "Invalid data", body = ErrorResponse)
    )
)]
pub async fn create_threat(
    State(state): State<AppState>,
    ValidatedJson(new): ValidatedJson<NewThreat>,
) -> (StatusCode, Json<Threat>) {
    let threat: Threat = state.store.create(new);
    info!(
        id = %threat.id,
        severity = %threat.severity,
        title = %threat.title,
        "Threat created"
    );
    (StatusCode::CREATED, Json(threat))
}

/// Partially update a threat
#[utoipa::path(
    patch,
    path = "/api/threats/{id}",
    tag = "Threats",
    params(("id" = String, Path, description = "Threat id")),
    request_body = ThreatPatch,
    responses(
        (status = 200, description = "Updated threat", body = Threat),
        (status = 400, description = "Invalid data", body = ErrorResponse),
        (status = 404, description = "Threat not found", body = ErrorResponse)
    )
)]
pub async fn update_threat(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(patch): ValidatedJson<ThreatPatch>,
) -> Result<Json<Threat>, ApiError> {
    let threat = state.store.update::<Threat>(&id, patch)?;
    info!(id = %id, "Threat updated");
    Ok(Json(threat))
}

/// Delete a threat
#[utoipa::path(
    delete,
    path = "/api/threats/{id}",
    tag = "Threats",
    params(("id" = String, Path, description = "Threat id")),
    responses(
        (status = 204, description = "Threat deleted"),
        (status = 404, description = "Threat not found", body = ErrorResponse)
    )
)]
pub async fn delete_threat(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if state.store.delete::<Threat>(&id) {
        info!(id = %id, "Threat deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found::<Threat>())
    }
}
