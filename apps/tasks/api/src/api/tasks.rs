use axum::Router;
use domain_tasks::{handlers, PgTaskRepository, TaskUseCases};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgTaskRepository::new(state.db.clone());
    handlers::router(TaskUseCases::new(repository))
}
