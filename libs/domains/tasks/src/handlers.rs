use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, ConflictResponse,
        InternalServerErrorResponse, NotFoundResponse, UnsupportedMediaTypeResponse,
    },
    UuidPath, ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{TaskError, TaskResult};
use crate::models::{
    Color, CreateTask, CreateTaskPayload, Task, UpdateTask, UpdateTaskPayload,
};
use crate::repository::TaskRepository;
use crate::use_cases::TaskUseCases;

pub const TAG: &str = "tasks";

/// OpenAPI documentation for Tasks API
#[derive(OpenApi)]
#[openapi(
    paths(list_tasks, show_task, create_task, update_task, delete_task),
    components(
        schemas(Task, Color, CreateTaskPayload, UpdateTaskPayload),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            ConflictResponse,
            UnsupportedMediaTypeResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Task management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the task router; mount it under `/tasks`
pub fn router<R: TaskRepository + 'static>(use_cases: TaskUseCases<R>) -> Router {
    Router::new()
        .route("/", get(list_tasks::<R>).post(create_task::<R>))
        .route(
            "/{id}",
            get(show_task::<R>)
                .put(update_task::<R>)
                .delete(delete_task::<R>),
        )
        .with_state(Arc::new(use_cases))
}

/// List all tasks, newest first
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "List of tasks", body = Vec<Task>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_tasks<R: TaskRepository>(
    State(use_cases): State<Arc<TaskUseCases<R>>>,
) -> TaskResult<Json<Vec<Task>>> {
    let tasks = use_cases.list.execute().await?;
    Ok(Json(tasks))
}

/// Get a task by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = uuid::Uuid, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task found", body = Task),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn show_task<R: TaskRepository>(
    State(use_cases): State<Arc<TaskUseCases<R>>>,
    UuidPath(id): UuidPath,
) -> TaskResult<Json<Task>> {
    let task = use_cases
        .show
        .execute(id)
        .await?
        .ok_or(TaskError::NotFound(id))?;
    Ok(Json(task))
}

/// Create a new task
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateTaskPayload,
    responses(
        (status = 201, description = "Task created successfully", body = Task),
        (status = 400, response = BadRequestValidationResponse),
        (status = 415, response = UnsupportedMediaTypeResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_task<R: TaskRepository>(
    State(use_cases): State<Arc<TaskUseCases<R>>>,
    ValidatedJson(payload): ValidatedJson<CreateTaskPayload>,
) -> TaskResult<impl IntoResponse> {
    let input = CreateTask::try_from(payload)?;
    let task = use_cases.create.execute(input).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// Partially update a task
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = uuid::Uuid, Path, description = "Task ID")
    ),
    request_body = UpdateTaskPayload,
    responses(
        (status = 200, description = "Task updated successfully", body = Task),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 415, response = UnsupportedMediaTypeResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_task<R: TaskRepository>(
    State(use_cases): State<Arc<TaskUseCases<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(payload): ValidatedJson<UpdateTaskPayload>,
) -> TaskResult<Json<Task>> {
    let input = UpdateTask::try_from(payload)?;
    let task = use_cases.update.execute(id, input).await?;
    Ok(Json(task))
}

/// Delete a task
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = uuid::Uuid, Path, description = "Task ID")
    ),
    responses(
        (status = 204, description = "Task deleted successfully"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_task<R: TaskRepository>(
    State(use_cases): State<Arc<TaskUseCases<R>>>,
    UuidPath(id): UuidPath,
) -> TaskResult<StatusCode> {
    use_cases.delete.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
