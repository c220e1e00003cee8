use axum::{http::StatusCode, response::Response};

use super::{error_response, ErrorCode};

/// Fallback for unknown routes, so clients always receive the JSON error shape.
pub async fn not_found() -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        ErrorCode::RouteNotFound.default_message().to_string(),
        ErrorCode::RouteNotFound,
    )
}
