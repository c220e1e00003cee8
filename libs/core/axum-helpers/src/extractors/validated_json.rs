//! JSON extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Decodes the body as `T` and runs its [`Validate`] rules. Decoding failures
/// are reported against the `body` path; rule violations are reported per
/// field, all of them at once.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct Rename {
///     #[validate(required, length(min = 1))]
///     name: Option<String>,
/// }
///
/// async fn rename(ValidatedJson(input): ValidatedJson<Rename>) -> String {
///     input.name.unwrap_or_default()
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        data.validate().map_err(|e| AppError::from(e).into_response())?;

        Ok(ValidatedJson(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorResponse;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        routing::post,
        Router,
    };
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize, Validate)]
    struct Name {
        #[validate(
            required(message = "Name is required"),
            length(min = 1, message = "Name must not be empty")
        )]
        name: Option<String>,
        #[validate(range(min = 1))]
        age: Option<u32>,
    }

    fn app() -> Router {
        Router::new().route(
            "/",
            post(|ValidatedJson(input): ValidatedJson<Name>| async move {
                input.name.unwrap_or_default()
            }),
        )
    }

    async fn send(body: &'static str, content_type: Option<&str>) -> Response {
        let mut request = Request::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            request = request.header(header::CONTENT_TYPE, content_type);
        }
        app()
            .oneshot(request.body(Body::from(body)).unwrap())
            .await
            .unwrap()
    }

    async fn error_of(response: Response) -> ErrorResponse {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_valid_payload_passes() {
        let response = send(r#"{"name":"ok"}"#, Some("application/json")).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_rule_violation_reports_field() {
        let response = send(r#"{"age":3}"#, Some("application/json")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = error_of(response).await;
        assert_eq!(body.message, "Validation error");
        let issues = body.issues.unwrap();
        assert_eq!(issues[0].path, "name");
        assert_eq!(issues[0].message, "Name is required");
    }

    #[tokio::test]
    async fn test_every_violation_is_reported() {
        let response = send(r#"{"name":"","age":0}"#, Some("application/json")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let issues = error_of(response).await.issues.unwrap();
        let paths: Vec<&str> = issues.iter().map(|i| i.path.as_str()).collect();
        assert_eq!(paths, vec!["age", "name"]);
        assert_eq!(issues[1].code, "length");
    }

    #[tokio::test]
    async fn test_malformed_json_reports_body() {
        let response = send("{not json", Some("application/json")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = error_of(response).await;
        assert_eq!(body.message, "Validation error");
        assert_eq!(body.issues.unwrap()[0].path, "body");
    }

    #[tokio::test]
    async fn test_wrong_type_reports_body() {
        let response = send(r#"{"name":42}"#, Some("application/json")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_of(response).await.issues.unwrap()[0].code, "invalid_json");
    }

    #[tokio::test]
    async fn test_missing_content_type_is_unsupported() {
        let response = send(r#"{"name":"ok"}"#, None).await;
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
