//! Tool catalog endpoints

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::info;

use crate::error::{ApiError, ErrorResponse};
use crate::storage::{NewTool, Tool, ToolPatch};
use crate::web::extract::{ValidatedJson, ValidatedQuery};
use crate::web::state::AppState;
use crate::web::types::ToolQuery;

/// List tools
#[utoipa::path(
    get,
    path = "/api/tools",
    tag = "Tools",
    params(ToolQuery),
    responses(
        (status = 200, description = "Matching tools in creation order", body = Vec<Tool>),
        (status = 400, description = "Invalid query parameter", body = ErrorResponse)
    )
)]
pub async fn list_tools(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ToolQuery>,
) -> Json<Vec<Tool>> {
    Json(state.store.tools_matching(&query.to_filter()))
}

/// Get a tool by id
#[utoipa::path(
    get,
    path = "/api/tools/{id}",
    tag = "Tools",
    params(("id" = String, Path, description = "Tool id")),
    responses(
        (status = 200, description = "Tool", body = Tool),
        (status = 404, description = "Tool not found", body = ErrorResponse)
    )
)]
pub async fn get_tool(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Tool>, ApiError> {
    state
        .store
        .get::<Tool>(&id)
        .map(Json)
        .ok_or_else(ApiError::not_found::<Tool>)
}

/// Create a tool
#[utoipa::path(
    post,
    path = "/api/tools",
    tag = "Tools",
    request_body = NewTool,
    responses(
        (status = 201, description = "Tool created", body = Tool),
        (status = 400, description = "Invalid data", body = ErrorResponse)
    )
)]
pub async fn create_tool(
    State(state): State<AppState>,
    ValidatedJson(new): ValidatedJson<NewTool>,
) -> (StatusCode, Json<Tool>) {
    let tool: Tool = state.store.create(new);
    info!(id = %tool.id, name = %tool.name, "Tool created");
    (StatusCode::CREATED, Json(tool))
}

/// Partially update a tool
#[utoipa::path(
    patch,
    path = "/api/tools/{id}",
    tag = "Tools",
    params(("id" = String, Path, description = "Tool id")),
    request_body = ToolPatch,
    responses(
        (status = 200, description = "Updated tool", body = Tool),
        (status = 400, description = "Invalid data", body = ErrorResponse),
        (status = 404, description = "Tool not found", body = ErrorResponse)
    )
)]
pub async fn update_tool(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(patch): ValidatedJson<ToolPatch>,
) -> Result<Json<Tool>, ApiError> {
    let tool = state.store.update::<Tool>(&id, patch)?;
    info!(id = %id, active = tool.is_active, "Tool updated");
    Ok(Json(tool))
}

/// Delete a tool
#[utoipa::path(
    delete,
    path = "/api/tools/{id}",
    tag = "Tools",
    params(("id" = String, Path, description = "Tool id")),
    responses(
        (status = 204, description = "Tool deleted"),
        (status = 404, description = "Tool not found", body = ErrorResponse)
    )
)]
pub async fn delete_tool(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if !state.store.delete::<Tool>(&id) {
        return Err(ApiError::not_found::<Tool>());
    }
    info!(id = %id, "Tool deleted");
    Ok(StatusCode::NO_CONTENT)
}
