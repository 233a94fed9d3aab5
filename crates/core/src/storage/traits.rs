use async_trait::async_trait;

use crate::todo::{Todo, TodoChanges};

use super::Result;

/// Repository for todo records, keyed by `id`.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Gets a todo by its ID. A missing record is `Ok(None)`.
    async fn get_todo(&self, id: &str) -> Result<Option<Todo>>;

    /// Gets every stored todo, in no particular order.
    async fn list_todos(&self) -> Result<Vec<Todo>>;

    /// Inserts a new todo.
    async fn create_todo(&self, todo: &Todo) -> Result<()>;

    /// Applies a partial update and returns the full record afterwards.
    ///
    /// Fails with `NotFound` if the record does not exist when the write lands.
    async fn update_todo(&self, id: &str, changes: &TodoChanges) -> Result<Todo>;

    /// Deletes a todo by its ID. Deleting a missing record is not an error.
    async fn delete_todo(&self, id: &str) -> Result<()>;
}
