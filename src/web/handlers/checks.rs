//! Computed security checks

use axum::Json;
use chrono::Utc;
use tracing::{debug, info};

use crate::checks::{PasswordReport, ScanReport};
use crate::error::{ApiError, ErrorResponse};
use crate::web::extract::ValidatedJson;
use crate::web::types::{PasswordCheckRequest, ScanRequest};

/// Rate a password's strength
///
/// The password is never stored or logged.
#[utoipa::path(
    post,
    path = "/api/tools/password-check",
    tag = "Checks",
    request_body = PasswordCheckRequest,
    responses(
        (status = 200, description = "Strength report", body = PasswordReport),
        (status = 400, description = "Password is required", body = ErrorResponse)
    )
)]
pub async fn password_check(
    ValidatedJson(request): ValidatedJson<PasswordCheckRequest>,
) -> Result<Json<PasswordReport>, ApiError> {
    let password = request
        .password
        .filter(|p| !p.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Password is required".to_string()))?;

    let report = PasswordReport::evaluate(&password);
    debug!(score = report.score, strength = %report.strength, "Password evaluated");
    Ok(Json(report))
}

/// Simulated vulnerability scan
///
/// No network activity; the same three findings are reported for any target.
#[utoipa::path(
    post,
    path = "/api/tools/vulnerability-scan",
    tag = "Checks",
    request_body = ScanRequest,
    responses(
        (status = 200, description = "Scan report", body = ScanReport),
        (status = 400, description = "Target is required", body = ErrorResponse)
    )
)]
pub async fn vulnerability_scan(
    ValidatedJson(request): ValidatedJson<ScanRequest>,
) -> Result<Json<ScanReport>, ApiError> {
    let target = request
        .target
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Target is required".to_string()))?;

    let report = ScanReport::simulate(&target, Utc::now());
    info!(
        target = %report.target,
        findings = report.summary.total,
        "Vulnerability scan simulated"
    );
    Ok(Json(report))
}
