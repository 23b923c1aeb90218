//! Analytics endpoints
//!
//! Samples are append-only over HTTP: list and create, plus a computed summary.

use axum::{Json, extract::State, http::StatusCode};
use tracing::info;

use crate::error::ErrorResponse;
use crate::storage::{AnalyticsSample, AnalyticsSummary, NewAnalyticsSample};
use crate::web::extract::ValidatedJson;
use crate::web::state::AppState;

/// List analytics samples
#[utoipa::path(
    get,
    path = "/api/analytics",
    tag = "Analytics",
    responses(
        (status = 200, description = "All samples in creation order", body = Vec<AnalyticsSample>)
    )
)]
pub async fn list_analytics(State(state): State<AppState>) -> Json<Vec<AnalyticsSample>> {
    Json(state.store.list::<AnalyticsSample>())
}

/// Record an analytics sample
#[utoipa::path(
    post,
    path = "/api/analytics",
    tag = "Analytics",
    request_body = NewAnalyticsSample,
    responses(
        (status = 201, description = "Sample recorded", body = AnalyticsSample),
        (status = 400, description = "Invalid data", body = ErrorResponse)
    )
)]
pub async fn create_analytics_sample(
    State(state): State<AppState>,
    ValidatedJson(new): ValidatedJson<NewAnalyticsSample>,
) -> (StatusCode, Json<AnalyticsSample>) {
    let sample: AnalyticsSample = state.store.create(new);
    info!(
        id = %sample.id,
        date = %sample.date,
        incidents = sample.incidents,
        "Analytics sample recorded"
    );
    (StatusCode::CREATED, Json(sample))
}

/// Dashboard overview: sample totals, resolution rate, threat breakdowns
#[utoipa::path(
    get,
    path = "/api/analytics/summary",
    tag = "Analytics",
    responses(
        (status = 200, description = "Aggregated analytics", body = AnalyticsSummary)
    )
)]
pub async fn get_analytics_summary(State(state): State<AppState>) -> Json<AnalyticsSummary> {
    Json(state.store.analytics_summary())
}
