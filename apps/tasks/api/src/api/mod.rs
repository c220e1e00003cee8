use axum::Router;

pub mod health;
pub mod tasks;

/// Service routes with state already applied; docs and middleware are added
/// by `create_router`.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().nest("/tasks", tasks::router(state))
}

/// Creates a router with the /ready endpoint, which pings the database.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
