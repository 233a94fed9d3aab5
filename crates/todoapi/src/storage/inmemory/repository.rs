//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use todoapi_core::storage::{RepositoryError, Result, TodoRepository};
use todoapi_core::todo::{Todo, TodoChanges};

/// In-memory storage backend.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    todos: Arc<RwLock<HashMap<String, Todo>>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            todos: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Creates a repository pre-populated with the given todos.
    #[cfg(test)]
    pub fn with_todos(todos: impl IntoIterator<Item = Todo>) -> Self {
        let todos = todos
            .into_iter()
            .map(|todo| (todo.id.clone(), todo))
            .collect();
        Self {
            todos: Arc::new(RwLock::new(todos)),
        }
    }
}

#[async_trait]
impl TodoRepository for InMemoryRepository {
    async fn get_todo(&self, id: &str) -> Result<Option<Todo>> {
        let todos = self.todos.read().await;
        Ok(todos.get(id).cloned())
    }

    async fn list_todos(&self) -> Result<Vec<Todo>> {
        let todos = self.todos.read().await;
        Ok(todos.values().cloned().collect())
    }

    async fn create_todo(&self, todo: &Todo) -> Result<()> {
        let mut todos = self.todos.write().await;
        if todos.contains_key(&todo.id) {
            return Err(RepositoryError::AlreadyExists(todo.id.clone()));
        }
        todos.insert(todo.id.clone(), todo.clone());
        Ok(())
    }

    async fn update_todo(&self, id: &str, changes: &TodoChanges) -> Result<Todo> {
        let mut todos = self.todos.write().await;
        let todo = todos
            .get_mut(id)
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;
        changes.apply_to(todo);
        Ok(todo.clone())
    }

    async fn delete_todo(&self, id: &str) -> Result<()> {
        let mut todos = self.todos.write().await;
        todos.remove(id);
        Ok(())
    }
}
