use utoipa::OpenApi;

/// OpenAPI document for the whole service
#[derive(OpenApi)]
#[openapi(
    nest(
        (path = "/tasks", api = domain_tasks::ApiDoc)
    ),
    components(schemas(axum_helpers::ErrorResponse, axum_helpers::ValidationIssue)),
    info(
        title = "Tasks API",
        description = "Create, list, update and delete tasks"
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_paths_are_nested() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/tasks"));
        assert!(doc.paths.paths.contains_key("/tasks/{id}"));
    }
}
