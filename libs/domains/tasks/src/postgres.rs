use async_trait::async_trait;
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};
use uuid::Uuid;

use crate::{
    entity,
    error::{TaskError, TaskResult},
    models::{CreateTask, Task, UpdateTask},
    repository::TaskRepository,
};

/// PostgreSQL-backed task repository (SeaORM)
#[derive(Clone)]
pub struct PgTaskRepository {
    db: DatabaseConnection,
}

impl PgTaskRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn find_all(&self) -> TaskResult<Vec<Task>> {
        let models = entity::Entity::find()
            .order_by_desc(entity::Column::CreatedAt)
            .order_by_desc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> TaskResult<Option<Task>> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TaskError::from_db_for(id, e))?;

        Ok(model.map(Into::into))
    }

    async fn create(&self, input: CreateTask) -> TaskResult<Task> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(task_id = %model.id, "Created task");
        Ok(model.into())
    }

    async fn update(&self, id: Uuid, input: UpdateTask) -> TaskResult<Task> {
        // Only changed columns are written; an unknown id updates no row
        let mut active_model = entity::ActiveModel {
            id: Unchanged(id),
            updated_at: Set(chrono::Utc::now().into()),
            ..Default::default()
        };
        if let Some(title) = input.title {
            active_model.title = Set(title);
        }
        if let Some(color) = input.color {
            active_model.color = Set(color);
        }
        if let Some(completed) = input.completed {
            active_model.completed = Set(completed);
        }

        let model = active_model
            .update(&self.db)
            .await
            .map_err(|e| TaskError::from_db_for(id, e))?;

        tracing::info!(task_id = %id, "Updated task");
        Ok(model.into())
    }

    async fn delete(&self, id: Uuid) -> TaskResult<()> {
        let result = entity::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| TaskError::from_db_for(id, e))?;

        if result.rows_affected == 0 {
            return Err(TaskError::NotFound(id));
        }

        tracing::info!(task_id = %id, "Deleted task");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Color;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

    fn model(title: &str, color: Color, completed: bool) -> entity::Model {
        let now = chrono::Utc::now().into();
        entity::Model {
            id: Uuid::now_v7(),
            title: title.to_string(),
            color,
            completed,
            created_at: now,
            updated_at: now,
        }
    }

    fn repo(db: MockDatabase) -> PgTaskRepository {
        PgTaskRepository::new(db.into_connection())
    }

    #[tokio::test]
    async fn test_find_all_maps_rows() {
        let newer = model("Newer", Color::Red, false);
        let older = model("Older", Color::Green, true);
        let repo = repo(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![newer.clone(), older.clone()]]),
        );

        let tasks = repo.find_all().await.unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id, newer.id);
        assert_eq!(tasks[1].color, Color::Green);
    }

    #[tokio::test]
    async fn test_find_by_id_missing_is_none() {
        let repo = repo(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<entity::Model>::new()]),
        );

        assert!(repo.find_by_id(Uuid::now_v7()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_returns_inserted_row() {
        let row = model("Test Task", Color::Blue, false);
        let repo = repo(
            MockDatabase::new(DatabaseBackend::Postgres).append_query_results([vec![row.clone()]]),
        );

        let task = repo
            .create(CreateTask {
                title: "Test Task".to_string(),
                color: Color::Blue,
            })
            .await
            .unwrap();

        assert_eq!(task.id, row.id);
        assert!(!task.completed);
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        let id = Uuid::now_v7();
        let repo = repo(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<entity::Model>::new()]),
        );

        let err = repo
            .update(
                id,
                UpdateTask {
                    completed: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, TaskError::NotFound(found) if found == id));
    }

    #[tokio::test]
    async fn test_update_returns_stored_row() {
        let row = model("Updated", Color::Blue, true);
        let repo = repo(
            MockDatabase::new(DatabaseBackend::Postgres).append_query_results([vec![row.clone()]]),
        );

        let task = repo
            .update(
                row.id,
                UpdateTask {
                    title: Some("Updated".to_string()),
                    completed: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(task.title, "Updated");
        assert!(task.completed);
    }

    #[tokio::test]
    async fn test_empty_update_still_writes_updated_at() {
        let row = model("Untouched", Color::Yellow, false);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row.clone()]])
            .into_connection();
        let repo = PgTaskRepository::new(db.clone());

        repo.update(row.id, UpdateTask::default()).await.unwrap();
        drop(repo);

        let log = format!("{:?}", db.into_transaction_log());
        assert!(log.contains("UPDATE"));
        assert!(log.contains("updated_at"));
    }

    #[tokio::test]
    async fn test_delete_zero_rows_is_not_found() {
        let repo = repo(MockDatabase::new(DatabaseBackend::Postgres).append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ]));

        let err = repo.delete(Uuid::now_v7()).await.unwrap_err();
        assert!(matches!(err, TaskError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_existing_row() {
        let repo = repo(MockDatabase::new(DatabaseBackend::Postgres).append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
        ]));

        assert!(repo.delete(Uuid::now_v7()).await.is_ok());
    }

    #[tokio::test]
    async fn test_store_failure_is_database_error() {
        let repo = repo(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_errors([DbErr::Custom("connection reset".to_string())]),
        );

        let err = repo.find_all().await.unwrap_err();
        assert!(matches!(err, TaskError::Database(_)));
    }
}
