use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single task entry.
///
/// `extra` holds stored attributes that are not part of the model. They are
/// flattened into the JSON object so a stored record is returned verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(
        default,
        with = "crate::serde::optional_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "crate::serde::optional_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Todo {
    /// Creates a new, not yet completed todo stamped with the current time.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new_at(title, description, Utc::now())
    }

    /// Creates a new todo with `created_at == updated_at == now`.
    pub fn new_at(
        title: impl Into<String>,
        description: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: description.into(),
            completed: false,
            created_at: Some(now),
            updated_at: Some(now),
            extra: BTreeMap::new(),
        }
    }

    /// Sets a specific ID for this todo (useful for testing).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Marks the todo as completed or not.
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// A partial update to a todo.
///
/// `None` fields are left untouched. `updated_at` is always written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

impl TodoChanges {
    /// An update that only refreshes `updated_at`.
    pub fn touch(updated_at: DateTime<Utc>) -> Self {
        Self {
            title: None,
            description: None,
            completed: None,
            updated_at,
        }
    }

    /// Returns true if no model field is changed.
    pub fn is_touch_only(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }

    /// Apply the changes to an existing todo.
    pub fn apply_to(&self, todo: &mut Todo) {
        if let Some(title) = &self.title {
            todo.title = title.clone();
        }
        if let Some(description) = &self.description {
            todo.description = description.clone();
        }
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
        todo.updated_at = Some(self.updated_at);
    }
}
