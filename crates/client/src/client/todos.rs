//! Todo API operations.

use todoapi_core::todo::{
    CreateTodoRequest, MessageResponse, Todo, TodoList, UpdateTodoRequest,
};

use super::TodoClient;
use crate::error::Result;

fn todo_resource(id: &str) -> String {
    format!("todo {}", id)
}

impl TodoClient {
    /// List all todos, newest first.
    pub async fn list_todos(&self) -> Result<TodoList> {
        let response = self.client.get(self.url("/todos")).send().await?;
        self.handle_response(response, "todos").await
    }

    /// Get a todo by ID.
    pub async fn get_todo(&self, id: &str) -> Result<Todo> {
        let response = self
            .client
            .get(self.url(&format!("/todos/{}", id)))
            .send()
            .await?;
        self.handle_response(response, &todo_resource(id)).await
    }

    /// Create a new todo.
    pub async fn create_todo(&self, req: &CreateTodoRequest) -> Result<Todo> {
        let response = self
            .client
            .post(self.url("/todos"))
            .json(req)
            .send()
            .await?;
        self.handle_response(response, "todos").await
    }

    /// Partially update a todo.
    pub async fn update_todo(&self, id: &str, req: &UpdateTodoRequest) -> Result<Todo> {
        let response = self
            .client
            .put(self.url(&format!("/todos/{}", id)))
            .json(req)
            .send()
            .await?;
        self.handle_response(response, &todo_resource(id)).await
    }

    /// Flip the completed flag of a todo.
    pub async fn toggle_todo(&self, id: &str) -> Result<Todo> {
        let todo = self.get_todo(id).await?;
        let req = UpdateTodoRequest::new().with_completed(!todo.completed);
        self.update_todo(id, &req).await
    }

    /// Delete a todo by ID.
    pub async fn delete_todo(&self, id: &str) -> Result<MessageResponse> {
        let response = self
            .client
            .delete(self.url(&format!("/todos/{}", id)))
            .send()
            .await?;
        self.handle_response(response, &todo_resource(id)).await
    }
}
