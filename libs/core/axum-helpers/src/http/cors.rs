use axum::http::{header, HeaderValue, Method};
use core_config::Environment;
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn};

/// Environment variable holding comma-separated allowed origins.
pub const CORS_ALLOWED_ORIGIN: &str = "CORS_ALLOWED_ORIGIN";

/// Creates a CORS layer restricted to `allowed_origins`.
///
/// Allows the methods used by the API (GET, POST, PUT, PATCH, DELETE, OPTIONS),
/// the `Content-Type`, `Accept` and `Authorization` headers, and caches
/// preflight responses for an hour.
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
        .max_age(Duration::from_secs(3600))
}

/// Creates a permissive CORS layer for development.
///
/// Allows any origin - **DO NOT USE IN PRODUCTION**.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}

/// Parse a comma-separated origin list, skipping blank entries.
pub fn parse_origins(raw: &str) -> io::Result<Vec<HeaderValue>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<HeaderValue>().map_err(|e| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Invalid {} value '{}': {}", CORS_ALLOWED_ORIGIN, s, e),
                )
            })
        })
        .collect()
}

/// Build the CORS layer from `CORS_ALLOWED_ORIGIN`.
///
/// When the variable is unset or blank, development falls back to a
/// permissive layer and production refuses to start.
///
/// # Errors
/// - `CORS_ALLOWED_ORIGIN` contains a value that is not a valid header value
/// - `CORS_ALLOWED_ORIGIN` is missing or empty in production
pub fn cors_layer_from_env(environment: &Environment) -> io::Result<CorsLayer> {
    let raw = std::env::var(CORS_ALLOWED_ORIGIN).unwrap_or_default();
    let origins = parse_origins(&raw)?;

    if origins.is_empty() {
        if environment.allows_permissive_cors() {
            warn!("{} not set, allowing any origin", CORS_ALLOWED_ORIGIN);
            return Ok(create_permissive_cors_layer());
        }

        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "{} environment variable is required in production. Example: {}=https://example.com,https://app.example.com",
                CORS_ALLOWED_ORIGIN, CORS_ALLOWED_ORIGIN
            ),
        ));
    }

    info!(origins = %raw, "CORS configured with allowed origins");
    Ok(create_cors_layer(origins))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_trims_and_skips_blanks() {
        let origins = parse_origins(" http://localhost:3000, ,https://example.com ").unwrap();
        assert_eq!(origins.len(), 2);
        assert_eq!(origins[0], "http://localhost:3000");
        assert_eq!(origins[1], "https://example.com");
    }

    #[test]
    fn test_parse_origins_rejects_invalid_value() {
        let err = parse_origins("http://bad\norigin").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_development_without_origins_is_permissive() {
        temp_env::with_var_unset(CORS_ALLOWED_ORIGIN, || {
            assert!(cors_layer_from_env(&Environment::Development).is_ok());
        });
    }

    #[test]
    fn test_production_without_origins_fails() {
        temp_env::with_var(CORS_ALLOWED_ORIGIN, Some("  "), || {
            let err = cors_layer_from_env(&Environment::Production).unwrap_err();
            assert!(err.to_string().contains(CORS_ALLOWED_ORIGIN));
        });
    }

    #[test]
    fn test_production_with_origins_succeeds() {
        temp_env::with_var(CORS_ALLOWED_ORIGIN, Some("https://example.com"), || {
            assert!(cors_layer_from_env(&Environment::Production).is_ok());
        });
    }
}
