//! Conversion from request payloads to validated task inputs.
//!
//! The rules live on the payloads as `#[validate(...)]` attributes; the
//! `TryFrom` impls run them and hand back typed inputs.

use std::str::FromStr;
use validator::{Validate, ValidationErrors};

use crate::models::{Color, CreateTask, CreateTaskPayload, UpdateTask, UpdateTaskPayload};

impl TryFrom<CreateTaskPayload> for CreateTask {
    type Error = ValidationErrors;

    fn try_from(payload: CreateTaskPayload) -> Result<Self, Self::Error> {
        payload.validate()?;

        // validate() guarantees both fields are present and the colour parses
        match (payload.title, payload.color.as_deref().map(Color::from_str)) {
            (Some(title), Some(Ok(color))) => Ok(CreateTask { title, color }),
            _ => Err(ValidationErrors::new()),
        }
    }
}

impl TryFrom<UpdateTaskPayload> for UpdateTask {
    type Error = ValidationErrors;

    fn try_from(payload: UpdateTaskPayload) -> Result<Self, Self::Error> {
        payload.validate()?;

        let color = match payload.color.as_deref().map(Color::from_str) {
            Some(Ok(color)) => Some(color),
            Some(Err(_)) => return Err(ValidationErrors::new()),
            None => None,
        };

        Ok(UpdateTask {
            title: payload.title,
            color,
            completed: payload.completed,
        })
    }
}
