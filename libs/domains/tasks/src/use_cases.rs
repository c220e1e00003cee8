//! Application actions invoked by the HTTP handlers.
//!
//! Each use case performs exactly one repository call and passes its result
//! through unchanged.

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::TaskResult;
use crate::models::{CreateTask, Task, UpdateTask};
use crate::repository::TaskRepository;

pub struct ListTasksUseCase<R: TaskRepository> {
    repository: Arc<R>,
}

impl<R: TaskRepository> ListTasksUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> TaskResult<Vec<Task>> {
        self.repository.find_all().await
    }
}

pub struct ShowTaskUseCase<R: TaskRepository> {
    repository: Arc<R>,
}

impl<R: TaskRepository> ShowTaskUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn execute(&self, id: Uuid) -> TaskResult<Option<Task>> {
        self.repository.find_by_id(id).await
    }
}

pub struct CreateTaskUseCase<R: TaskRepository> {
    repository: Arc<R>,
}

impl<R: TaskRepository> CreateTaskUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self, input), fields(task_title = %input.title))]
    pub async fn execute(&self, input: CreateTask) -> TaskResult<Task> {
        self.repository.create(input).await
    }
}

pub struct UpdateTaskUseCase<R: TaskRepository> {
    repository: Arc<R>,
}

impl<R: TaskRepository> UpdateTaskUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self, input), fields(task_id = %id))]
    pub async fn execute(&self, id: Uuid, input: UpdateTask) -> TaskResult<Task> {
        self.repository.update(id, input).await
    }
}

pub struct DeleteTaskUseCase<R: TaskRepository> {
    repository: Arc<R>,
}

impl<R: TaskRepository> DeleteTaskUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn execute(&self, id: Uuid) -> TaskResult<()> {
        self.repository.delete(id).await
    }
}

/// The five task use cases sharing one repository handle
pub struct TaskUseCases<R: TaskRepository> {
    pub list: ListTasksUseCase<R>,
    pub show: ShowTaskUseCase<R>,
    pub create: CreateTaskUseCase<R>,
    pub update: UpdateTaskUseCase<R>,
    pub delete: DeleteTaskUseCase<R>,
}

impl<R: TaskRepository> TaskUseCases<R> {
    pub fn new(repository: R) -> Self {
        Self::from_shared(Arc::new(repository))
    }

    pub fn from_shared(repository: Arc<R>) -> Self {
        Self {
            list: ListTasksUseCase::new(repository.clone()),
            show: ShowTaskUseCase::new(repository.clone()),
            create: CreateTaskUseCase::new(repository.clone()),
            update: UpdateTaskUseCase::new(repository.clone()),
            delete: DeleteTaskUseCase::new(repository),
        }
    }
}
