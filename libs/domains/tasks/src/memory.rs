use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    error::{TaskError, TaskResult},
    models::{CreateTask, Task, UpdateTask},
    repository::TaskRepository,
};

/// In-process task store for tests and local experiments.
///
/// Follows the same contract as [`PgTaskRepository`](crate::PgTaskRepository),
/// including newest-first ordering and not-found failures.
#[derive(Default)]
pub struct InMemoryTaskRepository {
    tasks: RwLock<HashMap<Uuid, Task>>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing tasks
    pub fn with_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        Self {
            tasks: RwLock::new(tasks.into_iter().map(|t| (t.id, t)).collect()),
        }
    }

    pub async fn is_empty(&self) -> bool {
        self.tasks.read().await.is_empty()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn find_all(&self) -> TaskResult<Vec<Task>> {
        let mut tasks: Vec<Task> = self.tasks.read().await.values().cloned().collect();
        tasks.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(tasks)
    }

    async fn find_by_id(&self, id: Uuid) -> TaskResult<Option<Task>> {
        Ok(self.tasks.read().await.get(&id).cloned())
    }

    async fn create(&self, input: CreateTask) -> TaskResult<Task> {
        let now = Utc::now();
        let task = Task {
            id: Uuid::now_v7(),
            title: input.title,
            color: input.color,
            completed: false,
            created_at: now,
            updated_at: now,
        };

        self.tasks.write().await.insert(task.id, task.clone());
        tracing::info!(task_id = %task.id, "Created task");
        Ok(task)
    }

    async fn update(&self, id: Uuid, input: UpdateTask) -> TaskResult<Task> {
        let mut tasks = self.tasks.write().await;
        let task = tasks.get_mut(&id).ok_or(TaskError::NotFound(id))?;

        task.apply_update(input);
        // Strictly later than the previous value even on a coarse clock
        task.updated_at = Utc::now().max(task.updated_at + Duration::nanoseconds(1));

        tracing::info!(task_id = %id, "Updated task");
        Ok(task.clone())
    }

    async fn delete(&self, id: Uuid) -> TaskResult<()> {
        self.tasks
            .write()
            .await
            .remove(&id)
            .ok_or(TaskError::NotFound(id))?;

        tracing::info!(task_id = %id, "Deleted task");
        Ok(())
    }
}
