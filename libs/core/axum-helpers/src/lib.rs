//! # Axum Helpers
//!
//! Utilities, middleware and helpers shared by the HTTP services of this workspace.
//!
//! ## Modules
//!
//! - **[`server`]**: Router assembly, health checks, graceful shutdown
//! - **[`http`]**: HTTP middleware (CORS, security headers)
//! - **[`errors`]**: Structured error responses with error codes and validation issues
//! - **[`extractors`]**: UUID path and validated JSON extractors
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::{create_production_app, create_router, cors_layer_from_env};
//! use core_config::{server::ServerConfig, Environment};
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let routes = Router::new(); // Add your routes
//!     let cors = cors_layer_from_env(&Environment::from_env())?;
//!     let router = create_router::<ApiDoc>(routes, cors);
//!
//!     let config = ServerConfig::default();
//!     create_production_app(router, &config, std::time::Duration::from_secs(30), async {}).await?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export server types
pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app,
    create_router, health_router, run_health_checks, shutdown_signal,
};

// Re-export HTTP middleware
pub use http::{create_cors_layer, cors_layer_from_env, security_headers};

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse, ValidationIssue};

// Re-export extractors
pub use extractors::{UuidPath, ValidatedJson};
