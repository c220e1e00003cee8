use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::{classify_db_err, StoreErrorKind};
use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Task not found: {0}")]
    NotFound(Uuid),

    #[error("Task conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),
}

pub type TaskResult<T> = Result<T, TaskError>;

impl TaskError {
    /// Classify a store error raised by an operation on task `id`.
    pub fn from_db_for(id: Uuid, err: DbErr) -> Self {
        match classify_db_err(&err) {
            StoreErrorKind::NotFound => TaskError::NotFound(id),
            StoreErrorKind::Conflict => TaskError::Conflict(err.to_string()),
            StoreErrorKind::Other => TaskError::Database(err.to_string()),
        }
    }
}

/// Store errors outside a single-task operation; a missing row there is an
/// infrastructure failure, not a client error.
impl From<DbErr> for TaskError {
    fn from(err: DbErr) -> Self {
        match classify_db_err(&err) {
            StoreErrorKind::Conflict => TaskError::Conflict(err.to_string()),
            StoreErrorKind::NotFound | StoreErrorKind::Other => TaskError::Database(err.to_string()),
        }
    }
}

/// Convert TaskError to AppError for standardized error responses
impl From<TaskError> for AppError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::NotFound(id) => {
                tracing::debug!(task_id = %id, "Task not found");
                AppError::NotFound("Task not found".to_string())
            }
            TaskError::Conflict(detail) => {
                tracing::warn!(detail = %detail, "Task conflict");
                AppError::Conflict("Task already exists".to_string())
            }
            TaskError::Database(detail) => AppError::InternalServerError(detail),
            TaskError::Validation(errors) => AppError::ValidationError(errors),
        }
    }
}

impl IntoResponse for TaskError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_not_updated_maps_to_not_found_for_id() {
        let id = Uuid::now_v7();
        match TaskError::from_db_for(id, DbErr::RecordNotUpdated) {
            TaskError::NotFound(found) => assert_eq!(found, id),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_generic_db_error_is_database() {
        let err: TaskError = DbErr::Custom("connection reset".to_string()).into();
        assert!(matches!(err, TaskError::Database(_)));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            TaskError::NotFound(Uuid::now_v7()).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            TaskError::Conflict("dup".to_string()).into_response().status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            TaskError::Database("boom".to_string()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            TaskError::Validation(ValidationErrors::new())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
    }
}
