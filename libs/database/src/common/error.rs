/// Unified database error type for connection and health operations
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// PostgreSQL-specific errors (SeaORM)
    #[cfg(feature = "postgres")]
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sea_orm::DbErr),

    /// Health check failed
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),
}

/// Store-agnostic classification of a failed store operation.
///
/// Repositories translate this into their own domain errors; only `NotFound`
/// and `Conflict` carry meaning for callers, everything else is an
/// infrastructure failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    /// The statement matched no row (missing id on update/delete/lookup)
    NotFound,
    /// The statement violated a uniqueness constraint
    Conflict,
    /// Connection, protocol, decoding or any other failure
    Other,
}

/// Classify a SeaORM error.
///
/// `RecordNotFound` and `RecordNotUpdated` both mean the targeted row does not
/// exist; unique violations are recognised through the driver's SQL error.
#[cfg(feature = "postgres")]
pub fn classify_db_err(err: &sea_orm::DbErr) -> StoreErrorKind {
    use sea_orm::{DbErr, SqlErr};

    match err {
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => StoreErrorKind::NotFound,
        _ => match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => StoreErrorKind::Conflict,
            _ => StoreErrorKind::Other,
        },
    }
}
