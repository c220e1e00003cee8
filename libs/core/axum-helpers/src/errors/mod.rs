pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// One violated constraint of a request.
///
/// `path` names the offending field (`title`, `color`, `id`) or `body` when the
/// payload itself could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValidationIssue {
    /// Field the issue applies to
    pub path: String,
    /// Machine-readable constraint identifier (e.g. `required`, `length`)
    pub code: String,
    /// Human-readable explanation
    pub message: String,
}

impl ValidationIssue {
    pub fn new(
        path: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Flatten validator field errors into issues, ordered by field path.
pub fn issues_from(errors: &ValidationErrors) -> Vec<ValidationIssue> {
    let mut issues: Vec<ValidationIssue> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                ValidationIssue::new(field.to_string(), error.code.to_string(), message)
            })
        })
        .collect();

    issues.sort_by(|a, b| a.path.cmp(&b.path));
    issues
}

/// Standard error response structure.
///
/// - `code`: Integer error code for logging/monitoring (e.g., 1001)
/// - `error`: Machine-readable error identifier (e.g., "VALIDATION_ERROR")
/// - `message`: Human-readable error message
/// - `issues`: Per-field problems, present only for validation failures
///
/// # JSON Example
///
/// ```json
/// {
///   "code": 1001,
///   "error": "VALIDATION_ERROR",
///   "message": "Validation error",
///   "issues": [
///     { "path": "title", "code": "length", "message": "Title is required" }
///   ]
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Every violated constraint, for validation errors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issues: Option<Vec<ValidationIssue>>,
}

/// Application error type that can be converted to HTTP responses.
///
/// Server-side failures never echo their detail to the client; the detail is
/// logged and the response carries the generic message of its [`ErrorCode`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Invalid UUID for '{param}': {value}")]
    InvalidUuid { param: &'static str, value: String },

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, issues, code) = match self {
            AppError::JsonExtractorRejection(rejection) => map_json_rejection(rejection),
            AppError::ValidationError(e) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    "Validation error: {}",
                    e
                );
                (
                    StatusCode::BAD_REQUEST,
                    ErrorCode::ValidationError.default_message().to_string(),
                    Some(issues_from(&e)),
                    ErrorCode::ValidationError,
                )
            }
            AppError::InvalidUuid { param, value } => {
                tracing::info!(
                    error_code = ErrorCode::InvalidUuid.code(),
                    param,
                    value = %value,
                    "Invalid UUID in path"
                );
                (
                    StatusCode::BAD_REQUEST,
                    ErrorCode::ValidationError.default_message().to_string(),
                    Some(vec![ValidationIssue::new(
                        param,
                        "invalid_uuid",
                        ErrorCode::InvalidUuid.default_message(),
                    )]),
                    ErrorCode::InvalidUuid,
                )
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = ErrorCode::NotFound.code(), "Not found: {}", msg);
                (StatusCode::NOT_FOUND, msg, None, ErrorCode::NotFound)
            }
            AppError::Conflict(msg) => {
                tracing::info!(error_code = ErrorCode::Conflict.code(), "Conflict: {}", msg);
                (StatusCode::CONFLICT, msg, None, ErrorCode::Conflict)
            }
            AppError::InternalServerError(detail) => {
                tracing::error!(
                    error_code = ErrorCode::InternalError.code(),
                    "Internal server error: {}",
                    detail
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::InternalError.default_message().to_string(),
                    None,
                    ErrorCode::InternalError,
                )
            }
        };

        let body = Json(ErrorResponse {
            code: code.code(),
            error: code.as_str().to_string(),
            message,
            issues,
        });

        (status, body).into_response()
    }
}

/// Body decoding failures are validation failures of the `body` path, except a
/// missing JSON content type (415) and transport-level rejections.
fn map_json_rejection(
    rejection: JsonRejection,
) -> (StatusCode, String, Option<Vec<ValidationIssue>>, ErrorCode) {
    tracing::info!(
        error_code = ErrorCode::JsonExtraction.code(),
        "JSON extraction error: {}",
        rejection.body_text()
    );

    match &rejection {
        JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => (
            StatusCode::BAD_REQUEST,
            ErrorCode::ValidationError.default_message().to_string(),
            Some(vec![ValidationIssue::new(
                "body",
                "invalid_json",
                rejection.body_text(),
            )]),
            ErrorCode::JsonExtraction,
        ),
        JsonRejection::MissingJsonContentType(_) => (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ErrorCode::UnsupportedMediaType.default_message().to_string(),
            None,
            ErrorCode::UnsupportedMediaType,
        ),
        _ => (
            rejection.status(),
            rejection.body_text(),
            None,
            ErrorCode::JsonExtraction,
        ),
    }
}

/// Build a JSON error response without going through [`AppError`].
pub fn error_response(status: StatusCode, message: String, error_code: ErrorCode) -> Response {
    let body = Json(ErrorResponse {
        code: error_code.code(),
        error: error_code.as_str().to_string(),
        message,
        issues: None,
    });

    (status, body).into_response()
}
