use async_trait::async_trait;
use uuid::Uuid;

use crate::error::TaskResult;
use crate::models::{CreateTask, Task, UpdateTask};

/// Repository trait for Task persistence
///
/// Every method is a single store operation. `update` and `delete` fail with
/// [`TaskError::NotFound`](crate::TaskError::NotFound) when the id is absent.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// All tasks, newest first (ties broken by id, descending)
    async fn find_all(&self) -> TaskResult<Vec<Task>>;

    /// Get a task by ID
    async fn find_by_id(&self, id: Uuid) -> TaskResult<Option<Task>>;

    /// Create a new task
    async fn create(&self, input: CreateTask) -> TaskResult<Task>;

    /// Apply a partial update and return the stored result
    async fn update(&self, id: Uuid, input: UpdateTask) -> TaskResult<Task>;

    /// Delete a task by ID
    async fn delete(&self, id: Uuid) -> TaskResult<()>;
}
