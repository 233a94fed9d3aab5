//! API request types for todo operations.
//!
//! These types are shared between the server and client for type-safe API communication.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::TodoError;
use super::operations::validate_title;
use super::types::{Todo, TodoChanges};

/// Request payload for creating a new todo.
///
/// `title` is optional at the type level so a missing title is reported as a
/// validation error rather than a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTodoRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateTodoRequest {
    /// Create a new request with just a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: None,
        }
    }

    /// Set the todo description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Validate and convert into a new Todo stamped at `now`.
    pub fn into_todo(self, now: DateTime<Utc>) -> Result<Todo, TodoError> {
        let title = self.title.ok_or(TodoError::MissingTitle)?;
        validate_title(&title)?;
        Ok(Todo::new_at(title, self.description.unwrap_or_default(), now))
    }
}

/// Request payload for a partial todo update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTodoRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl UpdateTodoRequest {
    /// Create an empty update request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the todo title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the todo description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the completion flag.
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Validate and convert into changes stamped at `now`.
    pub fn into_changes(self, now: DateTime<Utc>) -> Result<TodoChanges, TodoError> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        Ok(TodoChanges {
            title: self.title,
            description: self.description,
            completed: self.completed,
            updated_at: now,
        })
    }
}
