use crate::models::Color;
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};

/// Sea-ORM Entity for Tasks table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub color: Color,
    pub completed: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::Task {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            color: model.color,
            completed: model.completed,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

// New rows get a time-ordered id, start uncompleted and share one timestamp
impl From<crate::models::CreateTask> for ActiveModel {
    fn from(input: crate::models::CreateTask) -> Self {
        let now: DateTimeWithTimeZone = chrono::Utc::now().into();
        ActiveModel {
            id: Set(Uuid::now_v7()),
            title: Set(input.title),
            color: Set(input.color),
            completed: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }
}
