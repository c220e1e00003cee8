//! UUID path parameter extractor with automatic validation.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

/// Extractor for a single UUID path parameter named `id`.
///
/// A value that is not a UUID is rejected as a validation failure of `id`
/// before the handler runs. That includes segments that do not percent-decode
/// to UTF-8, which `Path` itself would reject with a plain-text body.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::UuidPath;
///
/// async fn show(UuidPath(id): UuidPath) -> String {
///     format!("Task ID: {}", id)
/// }
///
/// let app = Router::new().route("/tasks/{id}", get(show));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct UuidPath(pub Uuid);

impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(raw)) => raw,
            Err(rejection) => {
                tracing::debug!(rejection = %rejection.body_text(), "Path rejected");
                // the segment never decoded, so report the undecoded request path
                return Err(AppError::InvalidUuid {
                    param: "id",
                    value: parts.uri.path().to_string(),
                }
                .into_response());
            }
        };

        Uuid::parse_str(&raw).map(UuidPath).map_err(|_| {
            AppError::InvalidUuid {
                param: "id",
                value: raw,
            }
            .into_response()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorResponse;
    use axum::{body::Body, http::Request, http::StatusCode, routing::get, Router};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new().route(
            "/tasks/{id}",
            get(|UuidPath(id): UuidPath| async move { id.to_string() }),
        )
    }

    #[tokio::test]
    async fn test_valid_uuid_reaches_handler() {
        let id = Uuid::now_v7();
        let response = app()
            .oneshot(
                Request::builder()
                    .uri(format!("/tasks/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_invalid_uuid_is_bad_request() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/tasks/not-a-uuid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_non_utf8_segment_gets_structured_body() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/tasks/%FF")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        let issues = body.issues.unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, "id");
        assert_eq!(issues[0].code, "invalid_uuid");
    }
}
