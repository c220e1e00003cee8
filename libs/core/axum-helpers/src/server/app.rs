use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use crate::http::security::security_headers;
use axum::{middleware, routing::get, Json, Router};
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, Level};
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable as RedocServable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};

/// Path of the generated OpenAPI document.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Combines API routes with documentation and cross-cutting middleware.
///
/// - OpenAPI document at `/api-docs/openapi.json`, ReDoc at `/redoc`, Scalar at `/scalar`
/// - `apis` merged at the root (routes carry their own prefixes and state)
/// - JSON 404 fallback
/// - Request tracing, security headers, the given CORS layer, response compression
///
/// Health endpoints are merged by the caller (`health_router` plus the app's
/// own readiness route).
///
/// # Example
/// ```ignore
/// let api_routes = Router::new().nest("/tasks", domain_tasks::handlers::router(use_cases));
/// let cors = cors_layer_from_env(&config.environment)?;
/// let router = create_router::<ApiDoc>(api_routes, cors);
/// ```
pub fn create_router<T>(apis: Router, cors: CorsLayer) -> Router
where
    T: OpenApi + 'static,
{
    let openapi = T::openapi();

    Router::new()
        .route(
            OPENAPI_JSON_PATH,
            get({
                let doc = openapi.clone();
                move || async move { Json(doc) }
            }),
        )
        .merge(Redoc::with_url("/redoc", openapi.clone()))
        .merge(Scalar::with_url("/scalar", openapi))
        .merge(apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors)
        .layer(CompressionLayer::new())
}

/// Server with coordinated shutdown and cleanup.
///
/// After a shutdown signal the server stops accepting connections and drains
/// in-flight requests, then `cleanup` runs (e.g. closing the database pool)
/// bounded by `shutdown_timeout`.
///
/// # Example
/// ```ignore
/// let db = state.db.clone();
/// create_production_app(router, &config.server, Duration::from_secs(30), async move {
///     db.close().await.ok();
/// })
/// .await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (coordinator, _rx) = ShutdownCoordinator::new();
    let signal_handle = coordinator.clone();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { signal_handle.wait_for_signal().await })
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    info!(timeout = ?shutdown_timeout, "Running cleanup tasks");
    match tokio::time::timeout(shutdown_timeout, cleanup).await {
        Ok(()) => info!("Cleanup completed successfully"),
        Err(_) => tracing::warn!(
            "Cleanup exceeded timeout of {:?}, forcing shutdown",
            shutdown_timeout
        ),
    }

    serve_result
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    #[derive(OpenApi)]
    #[openapi(info(title = "Test API"))]
    struct TestDoc;

    fn app() -> Router {
        let apis = Router::new().route("/tasks", get(|| async { "[]" }));
        create_router::<TestDoc>(apis, CorsLayer::permissive())
    }

    async fn get_path(path: &str) -> axum::response::Response {
        app()
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_routes_are_mounted_at_root() {
        let response = get_path("/tasks").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["x-frame-options"], "DENY");
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let response = get_path(OPENAPI_JSON_PATH).await;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let doc: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(doc["info"]["title"], "Test API");
    }

    #[tokio::test]
    async fn test_unknown_route_returns_json_404() {
        let response = get_path("/nope").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "ROUTE_NOT_FOUND");
    }
}
