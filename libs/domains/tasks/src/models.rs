use chrono::{DateTime, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumString, VariantNames};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Task colour, a closed set. The wire form is the upper-case name and is
/// matched case-sensitively.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    VariantNames,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "task_color")]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Color {
    #[sea_orm(string_value = "RED")]
    Red,
    #[sea_orm(string_value = "ORANGE")]
    Orange,
    #[sea_orm(string_value = "YELLOW")]
    Yellow,
    #[sea_orm(string_value = "GREEN")]
    Green,
    #[sea_orm(string_value = "BLUE")]
    Blue,
    #[sea_orm(string_value = "PURPLE")]
    Purple,
    #[sea_orm(string_value = "PINK")]
    Pink,
}

/// Task entity - represents a task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier (UUIDv7)
    pub id: Uuid,
    /// Task title
    #[schema(example = "Buy milk")]
    pub title: String,
    /// Task colour
    pub color: Color,
    /// Whether the task is completed
    pub completed: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Validated input for creating a task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTask {
    pub title: String,
    pub color: Color,
}

/// Validated partial update; `None` leaves the field unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTask {
    pub title: Option<String>,
    pub color: Option<Color>,
    pub completed: Option<bool>,
}

impl UpdateTask {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.color.is_none() && self.completed.is_none()
    }
}

/// Custom validator: the raw value must name one of the [`Color`] variants.
pub fn validate_color(color: &str) -> Result<(), ValidationError> {
    if Color::from_str(color).is_ok() {
        return Ok(());
    }
    let message = format!("Color must be one of: {}", Color::VARIANTS.join(", "));
    Err(ValidationError::new("invalid_enum").with_message(message.into()))
}

/// Request body for `POST /tasks`
///
/// Both fields are optional at the JSON level so that a request missing
/// several fields reports all of them.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateTaskPayload {
    #[validate(
        required(message = "Title is required"),
        length(min = 1, max = 255, message = "Title must be between 1 and 255 characters")
    )]
    #[schema(example = "Test Task", min_length = 1, max_length = 255)]
    pub title: Option<String>,
    #[validate(
        required(message = "Color is required"),
        custom(function = "validate_color")
    )]
    #[schema(value_type = Color)]
    pub color: Option<String>,
}

/// Request body for `PUT /tasks/{id}`; `null` is treated like an absent field
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateTaskPayload {
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    #[schema(example = "Updated", min_length = 1, max_length = 255)]
    pub title: Option<String>,
    #[validate(custom(function = "validate_color"))]
    #[schema(value_type = Option<Color>)]
    pub color: Option<String>,
    pub completed: Option<bool>,
}

impl Task {
    /// Apply a partial update in place. Does not touch timestamps.
    pub fn apply_update(&mut self, update: UpdateTask) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(color) = update.color {
            self.color = color;
        }
        if let Some(completed) = update.completed {
            self.completed = completed;
        }
    }
}
