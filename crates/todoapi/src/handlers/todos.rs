//! Todo CRUD handlers.
//!
//! Each handler delegates to an operation function that takes the repository
//! as an argument, so every operation runs against whichever backend it is
//! handed.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Path, State},
};
use chrono::Utc;

use todoapi_core::storage::TodoRepository;
use todoapi_core::todo::{
    parse_create_request, parse_update_request, sort_todos_newest_first, MessageResponse,
    TodoError, TodoList,
};

use crate::{handlers::ApiError, response::JsonResponse, state::AppState};

fn body_text(body: &[u8]) -> Result<&str, TodoError> {
    std::str::from_utf8(body).map_err(|e| TodoError::InvalidBody(e.to_string()))
}

/// Unreadable bodies (including ones over the size limit) are reported in the
/// JSON error envelope instead of axum's plain-text rejection.
fn read_body(body: Result<Bytes, BytesRejection>) -> Result<Bytes, TodoError> {
    body.map_err(|rejection| TodoError::InvalidBody(rejection.body_text()))
}

/// Create a new todo (POST /todos).
pub async fn create_todo(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<JsonResponse, ApiError> {
    let body = read_body(body)?;
    create_todo_impl(state.todo_repo.as_ref(), &body).await
}

/// Get a single todo by ID (GET /todos/{id}).
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<JsonResponse, ApiError> {
    get_todo_impl(state.todo_repo.as_ref(), &id).await
}

/// List all todos, newest first (GET /todos).
pub async fn list_todos(State(state): State<AppState>) -> Result<JsonResponse, ApiError> {
    list_todos_impl(state.todo_repo.as_ref()).await
}

/// Partially update a todo (PUT /todos/{id}).
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> Result<JsonResponse, ApiError> {
    let body = read_body(body)?;
    update_todo_impl(state.todo_repo.as_ref(), &id, &body).await
}

/// Delete a todo (DELETE /todos/{id}).
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<JsonResponse, ApiError> {
    delete_todo_impl(state.todo_repo.as_ref(), &id).await
}

#[tracing::instrument(name = "create_todo", skip_all)]
pub async fn create_todo_impl(
    repo: &dyn TodoRepository,
    body: &[u8],
) -> Result<JsonResponse, ApiError> {
    let todo = parse_create_request(body_text(body)?)?.into_todo(Utc::now())?;

    repo.create_todo(&todo).await?;

    tracing::info!(todo_id = %todo.id, title = %todo.title, "Created todo");

    Ok(JsonResponse::created(&todo))
}

#[tracing::instrument(name = "get_todo", skip(repo))]
pub async fn get_todo_impl(repo: &dyn TodoRepository, id: &str) -> Result<JsonResponse, ApiError> {
    let todo = repo.get_todo(id).await?.ok_or(ApiError::NotFound)?;

    Ok(JsonResponse::ok(&todo))
}

#[tracing::instrument(name = "list_todos", skip_all)]
pub async fn list_todos_impl(repo: &dyn TodoRepository) -> Result<JsonResponse, ApiError> {
    let mut todos = repo.list_todos().await?;
    sort_todos_newest_first(&mut todos);

    tracing::debug!(count = todos.len(), "Listed todos");

    Ok(JsonResponse::ok(&TodoList::new(todos)))
}

#[tracing::instrument(name = "update_todo", skip(repo, body))]
pub async fn update_todo_impl(
    repo: &dyn TodoRepository,
    id: &str,
    body: &[u8],
) -> Result<JsonResponse, ApiError> {
    let changes = parse_update_request(body_text(body)?)?.into_changes(Utc::now())?;

    if repo.get_todo(id).await?.is_none() {
        return Err(ApiError::NotFound);
    }

    let todo = repo.update_todo(id, &changes).await?;

    tracing::info!(todo_id = %todo.id, touch_only = changes.is_touch_only(), "Updated todo");

    Ok(JsonResponse::ok(&todo))
}

#[tracing::instrument(name = "delete_todo", skip(repo))]
pub async fn delete_todo_impl(
    repo: &dyn TodoRepository,
    id: &str,
) -> Result<JsonResponse, ApiError> {
    if repo.get_todo(id).await?.is_none() {
        return Err(ApiError::NotFound);
    }

    repo.delete_todo(id).await?;

    tracing::info!(todo_id = %id, "Deleted todo");

    Ok(JsonResponse::ok(&MessageResponse::deleted()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use axum::{http::StatusCode, response::IntoResponse};
    use chrono::{DateTime, TimeZone};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};

    use todoapi_core::storage::{RepositoryError, Result as RepoResult};
    use todoapi_core::todo::{Todo, TodoChanges};

    use crate::storage::inmemory::InMemoryRepository;

    /// Repository whose every call fails like an unreachable store.
    struct FailingRepository;

    fn unavailable() -> RepositoryError {
        RepositoryError::ConnectionFailed("dispatch failure: connection refused".to_string())
    }

    #[async_trait]
    impl TodoRepository for FailingRepository {
        async fn get_todo(&self, _id: &str) -> RepoResult<Option<Todo>> {
            Err(unavailable())
        }

        async fn list_todos(&self) -> RepoResult<Vec<Todo>> {
            Err(unavailable())
        }

        async fn create_todo(&self, _todo: &Todo) -> RepoResult<()> {
            Err(unavailable())
        }

        async fn update_todo(&self, _id: &str, _changes: &TodoChanges) -> RepoResult<Todo> {
            Err(unavailable())
        }

        async fn delete_todo(&self, _id: &str) -> RepoResult<()> {
            Err(unavailable())
        }
    }

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, hour, 0, 0).unwrap()
    }

    fn stored(id: &str, title: &str, hour: u32) -> Todo {
        Todo::new_at(title, "", at(hour)).with_id(id)
    }

    async fn error_body(err: ApiError) -> Value {
        let body = err.into_response().into_body().collect().await.unwrap();
        serde_json::from_slice(&body.to_bytes()).unwrap()
    }

    // ------------------------------------------------------------------------
    // Create
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_create_todo() {
        let repo = InMemoryRepository::new();

        let response = create_todo_impl(&repo, br#"{"title": "Buy milk"}"#)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);

        let todo = response.json();
        assert!(!todo["id"].as_str().unwrap().is_empty());
        assert_eq!(todo["title"], "Buy milk");
        assert_eq!(todo["description"], "");
        assert_eq!(todo["completed"], false);
        assert_eq!(todo["created_at"], todo["updated_at"]);

        let id = todo["id"].as_str().unwrap();
        let persisted = repo.get_todo(id).await.unwrap().unwrap();
        assert_eq!(persisted.title, "Buy milk");
    }

    #[tokio::test]
    async fn test_create_todo_with_description() {
        let repo = InMemoryRepository::new();

        let response = create_todo_impl(
            &repo,
            br#"{"title": "Buy milk", "description": "2 liters"}"#,
        )
        .await
        .unwrap();

        assert_eq!(response.json()["description"], "2 liters");
    }

    #[tokio::test]
    async fn test_create_todo_without_title() {
        let repo = InMemoryRepository::new();

        let err = create_todo_impl(&repo, br#"{"description": "no title"}"#)
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error_body(err).await, json!({"error": "Title is required"}));
        assert!(repo.list_todos().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_todo_with_blank_title() {
        let repo = InMemoryRepository::new();

        let err = create_todo_impl(&repo, br#"{"title": "  "}"#)
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(repo.list_todos().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_todo_with_malformed_body() {
        let repo = InMemoryRepository::new();

        let bodies: [&[u8]; 3] = [b"", b"{not json", b"\xff\xfe"];
        for body in bodies {
            let err = create_todo_impl(&repo, body).await.unwrap_err();
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
            let body = error_body(err).await;
            assert!(body["error"]
                .as_str()
                .unwrap()
                .starts_with("Invalid request body"));
        }
    }

    // ------------------------------------------------------------------------
    // Get
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_get_todo() {
        let todo = stored("todo-1", "Buy milk", 10);
        let repo = InMemoryRepository::with_todos([todo.clone()]);

        let response = get_todo_impl(&repo, "todo-1").await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.json(), serde_json::to_value(&todo).unwrap());
    }

    #[tokio::test]
    async fn test_get_missing_todo() {
        let repo = InMemoryRepository::new();

        let err = get_todo_impl(&repo, "missing").await.unwrap_err();

        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(error_body(err).await, json!({"error": "Todo not found"}));
    }

    // ------------------------------------------------------------------------
    // List
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_list_todos_newest_first() {
        let mut undated = stored("todo-0", "Undated", 0);
        undated.created_at = None;

        let repo = InMemoryRepository::with_todos([
            stored("todo-1", "Oldest", 8),
            undated,
            stored("todo-3", "Newest", 12),
            stored("todo-2", "Middle", 10),
        ]);

        let response = list_todos_impl(&repo).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.json();
        assert_eq!(body["count"], 4);

        let ids: Vec<&str> = body["todos"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["todo-3", "todo-2", "todo-1", "todo-0"]);
    }

    #[tokio::test]
    async fn test_list_todos_empty() {
        let repo = InMemoryRepository::new();

        let response = list_todos_impl(&repo).await.unwrap();

        assert_eq!(response.json(), json!({"todos": [], "count": 0}));
    }

    // ------------------------------------------------------------------------
    // Update
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_update_completed_only() {
        let original = Todo::new_at("Buy milk", "2 liters", at(10)).with_id("todo-1");
        let repo = InMemoryRepository::with_todos([original.clone()]);

        let response = update_todo_impl(&repo, "todo-1", br#"{"completed": true}"#)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let updated = repo.get_todo("todo-1").await.unwrap().unwrap();
        assert!(updated.completed);
        assert_eq!(updated.title, original.title);
        assert_eq!(updated.description, original.description);
        assert_eq!(updated.created_at, original.created_at);
        assert!(updated.updated_at > original.updated_at);

        assert_eq!(response.json(), serde_json::to_value(&updated).unwrap());
    }

    #[tokio::test]
    async fn test_update_title_and_description() {
        let repo = InMemoryRepository::with_todos([stored("todo-1", "Buy milk", 10)]);

        let response = update_todo_impl(
            &repo,
            "todo-1",
            br#"{"title": "Buy oat milk", "description": "unsweetened"}"#,
        )
        .await
        .unwrap();

        let body = response.json();
        assert_eq!(body["title"], "Buy oat milk");
        assert_eq!(body["description"], "unsweetened");
        assert_eq!(body["completed"], false);
    }

    #[tokio::test]
    async fn test_update_with_empty_body_refreshes_updated_at() {
        let original = stored("todo-1", "Buy milk", 10);
        let repo = InMemoryRepository::with_todos([original.clone()]);

        update_todo_impl(&repo, "todo-1", b"{}").await.unwrap();

        let updated = repo.get_todo("todo-1").await.unwrap().unwrap();
        assert_eq!(updated.title, original.title);
        assert!(updated.updated_at > original.updated_at);
    }

    #[tokio::test]
    async fn test_update_missing_todo() {
        let repo = InMemoryRepository::new();

        let err = update_todo_impl(&repo, "missing", br#"{"completed": true}"#)
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert!(repo.list_todos().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_with_blank_title() {
        let repo = InMemoryRepository::with_todos([stored("todo-1", "Buy milk", 10)]);

        let err = update_todo_impl(&repo, "todo-1", br#"{"title": ""}"#)
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        let unchanged = repo.get_todo("todo-1").await.unwrap().unwrap();
        assert_eq!(unchanged.title, "Buy milk");
    }

    // ------------------------------------------------------------------------
    // Delete
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_delete_todo_then_get() {
        let repo = InMemoryRepository::with_todos([stored("todo-1", "Buy milk", 10)]);

        let response = delete_todo_impl(&repo, "todo-1").await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.json(),
            json!({"message": "Todo deleted successfully"})
        );

        let err = get_todo_impl(&repo, "todo-1").await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_missing_todo() {
        let repo = InMemoryRepository::new();

        let err = delete_todo_impl(&repo, "missing").await.unwrap_err();

        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_twice_reports_not_found() {
        let repo = InMemoryRepository::with_todos([stored("todo-1", "Buy milk", 10)]);

        delete_todo_impl(&repo, "todo-1").await.unwrap();
        let err = delete_todo_impl(&repo, "todo-1").await.unwrap_err();

        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    // ------------------------------------------------------------------------
    // Storage failures
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_storage_failures_are_internal_errors() {
        let repo = FailingRepository;

        let errors = vec![
            create_todo_impl(&repo, br#"{"title": "Buy milk"}"#)
                .await
                .unwrap_err(),
            get_todo_impl(&repo, "todo-1").await.unwrap_err(),
            list_todos_impl(&repo).await.unwrap_err(),
            update_todo_impl(&repo, "todo-1", br#"{"completed": true}"#)
                .await
                .unwrap_err(),
            delete_todo_impl(&repo, "todo-1").await.unwrap_err(),
        ];

        for err in errors {
            assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(
                error_body(err).await,
                json!({"error": "Internal server error"})
            );
        }
    }
}
