//! Tasks Domain
//!
//! CRUD over tasks: a title, a colour and a completion flag.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP routes, extractors validate the boundary
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │  Use cases  │  ← One repository call each
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Trait + PostgreSQL / in-memory implementations
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Task, Color, inputs, payloads
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_tasks::{handlers, PgTaskRepository, TaskUseCases};
//! use sea_orm::Database;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::connect("postgres://...").await?;
//!
//! let use_cases = TaskUseCases::new(PgTaskRepository::new(db));
//! let routes = axum::Router::new().nest("/tasks", handlers::router(use_cases));
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod use_cases;
pub mod validation;

pub use error::{TaskError, TaskResult};
pub use handlers::ApiDoc;
pub use memory::InMemoryTaskRepository;
pub use models::{Color, CreateTask, CreateTaskPayload, Task, UpdateTask, UpdateTaskPayload};
pub use postgres::PgTaskRepository;
pub use repository::TaskRepository;
pub use use_cases::{
    CreateTaskUseCase, DeleteTaskUseCase, ListTasksUseCase, ShowTaskUseCase, TaskUseCases,
    UpdateTaskUseCase,
};
