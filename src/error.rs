//! API error type and its HTTP mapping

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

use crate::storage::{Record, StoreError};

#[derive(Error, Debug)]
pub enum ApiError {
    /// Unknown identifier on a targeted operation
    #[error("{0}")]
    NotFound(String),

    /// Missing or unusable input on the computed endpoints
    #[error("{0}")]
    BadRequest(String),

    /// Malformed body or failed field rules
    #[error("Invalid data")]
    Validation(ValidationErrorDetails),

    /// Known path, unsupported method
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("{0}")]
    Internal(String),
}

/// Field-level validation failures, keyed by field name
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationErrorDetails {
    pub fields: BTreeMap<String, Vec<FieldError>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    /// Machine-readable code, e.g. "length", "email", "invalid_json"
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Value>,
}

impl ValidationErrorDetails {
    pub fn field(field: &str, code: &str, message: impl Into<String>) -> Self {
        let mut details = Self::default();
        details.add(field, code, message);
        details
    }

    pub fn add(&mut self, field: &str, code: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(FieldError {
                code: code.to_string(),
                message: message.into(),
                params: None,
            });
    }
}

/// JSON error body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    #[schema(example = "Threat not found")]
    pub error: String,
    /// Per-field validation errors (400 responses only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    pub fn not_found<R: Record>() -> Self {
        ApiError::NotFound(format!("{} not found", R::KIND))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }

        let details = match &self {
            ApiError::Validation(details) => serde_json::to_value(&details.fields).ok(),
            _ => None,
        };
        let body = ErrorResponse {
            error: self.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => ApiError::NotFound(err.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut details = ValidationErrorDetails::default();

        for (field, field_errors) in errors.field_errors() {
            let entries = details.fields.entry(field.to_string()).or_default();
            for e in field_errors.iter() {
                let code = e.code.to_string();
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Field '{field}' failed validation: {code}"));
                let params = e
                    .params
                    .iter()
                    .filter(|(name, _)| *name != "value")
                    .map(|(name, value)| (name.to_string(), value.clone()))
                    .collect::<serde_json::Map<_, _>>();
                entries.push(FieldError {
                    code,
                    message,
                    params: (!params.is_empty()).then_some(serde_json::Value::Object(params)),
                });
            }
        }

        ApiError::Validation(details)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let code = match &rejection {
            JsonRejection::JsonDataError(_) => "invalid_data",
            JsonRejection::JsonSyntaxError(_) => "invalid_json",
            JsonRejection::MissingJsonContentType(_) => "missing_content_type",
            _ => "unreadable_body",
        };
        ApiError::Validation(ValidationErrorDetails::field(
            "body",
            code,
            rejection.body_text(),
        ))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(ValidationErrorDetails::field(
            "query",
            "invalid_query",
            rejection.body_text(),
        ))
    }
}
