//! Shared application state.

/// Cloned into the readiness route and the shutdown cleanup (cheap Arc clones).
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL database connection pool
    pub db: database::postgres::DatabaseConnection,
}
