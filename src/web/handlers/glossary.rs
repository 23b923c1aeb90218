//! Glossary endpoints

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::info;

use crate::error::{ApiError, ErrorResponse};
use crate::storage::{GlossaryTerm, GlossaryTermPatch, NewGlossaryTerm};
use crate::web::extract::{ValidatedJson, ValidatedQuery};
use crate::web::state::AppState;
use crate::web::types::GlossaryQuery;

/// List glossary terms
#[utoipa::path(
    get,
    path = "/api/glossary",
    tag = "Glossary",
    params(GlossaryQuery),
    responses(
        (status = 200, description = "Matching terms in creation order", body = Vec<GlossaryTerm>),
        (status = 400, description = "Invalid query parameter", body = ErrorResponse)
    )
)]
pub async fn list_terms(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<GlossaryQuery>,
) -> Json<Vec<GlossaryTerm>> {
    Json(state.store.glossary_matching(&query.to_filter()))
}

#[utoipa::path(
    get,
    path = "/api/glossary/{id}",
    tag = "Glossary",
    params(("id" = String, Path, description = "Term id")),
    responses(
        (status = 200, description = "Glossary term", body = GlossaryTerm),
        (status = 404, description = "Term not found", body = ErrorResponse)
    )
)]
pub async fn get_term(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GlossaryTerm>, ApiError> {
    state
        .store
        .get::<GlossaryTerm>(&id)
        .map(Json)
        .ok_or_else(ApiError::not_found::<GlossaryTerm>)
}

#[utoipa::path(
    post,
    path = "/api/glossary",
    tag = "Glossary",
    request_body = NewGlossaryTerm,
    responses(
        (status = 201, description = "Term created", body = GlossaryTerm),
        (status = 400, description = "Invalid data", body = ErrorResponse)
    )
)]
pub async fn create_term(
    State(state): State<AppState>,
    ValidatedJson(new): ValidatedJson<NewGlossaryTerm>,
) -> (StatusCode, Json<GlossaryTerm>) {
    let term: GlossaryTerm = state.store.create(new);
    info!(id = %term.id, term = %term.term, "Glossary term created");
    (StatusCode::CREATED, Json(term))
}

#[utoipa::path(
    patch,
    path = "/api/glossary/{id}",
    tag = "Glossary",
    params(("id" = String, Path, description = "Term id")),
    request_body = GlossaryTermPatch,
    responses(
        (status = 200, description = "Updated term", body = GlossaryTerm),
        (status = 400, description = "Invalid data", body = ErrorResponse),
        (status = 404, description = "Term not found", body = ErrorResponse)
    )
)]
pub async fn update_term(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(patch): ValidatedJson<GlossaryTermPatch>,
) -> Result<Json<GlossaryTerm>, ApiError> {
    let term = state.store.update::<GlossaryTerm>(&id, patch)?;
    info!(id = %id, "Glossary term updated");
    Ok(Json(term))
}

#[utoipa::path(
    delete,
    path = "/api/glossary/{id}",
    tag = "Glossary",
    params(("id" = String, Path, description = "Term id")),
    responses(
        (status = 204, description = "Term deleted"),
        (status = 404, description = "Term not found", body = ErrorResponse)
    )
)]
pub async fn delete_term(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if !state.store.delete::<GlossaryTerm>(&id) {
        return Err(ApiError::not_found::<GlossaryTerm>());
    }
    info!(id = %id, "Glossary term deleted");
    Ok(StatusCode::NO_CONTENT)
}
