//! Response envelopes returned by the API.

use serde::{Deserialize, Serialize};

use super::types::Todo;

/// Acknowledgment message returned by a successful delete.
pub const DELETED_MESSAGE: &str = "Todo deleted successfully";

/// All todos plus their count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoList {
    pub todos: Vec<Todo>,
    pub count: usize,
}

impl TodoList {
    pub fn new(todos: Vec<Todo>) -> Self {
        let count = todos.len();
        Self { todos, count }
    }
}

/// A plain acknowledgment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn deleted() -> Self {
        Self {
            message: DELETED_MESSAGE.to_string(),
        }
    }
}

/// Error envelope for 4xx/5xx responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_list_counts_items() {
        let list = TodoList::new(vec![Todo::new("a", ""), Todo::new("b", "")]);
        assert_eq!(list.count, 2);

        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json["count"], 2);
        assert_eq!(json["todos"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_empty_todo_list() {
        let json = serde_json::to_value(TodoList::new(Vec::new())).unwrap();
        assert_eq!(json, serde_json::json!({"todos": [], "count": 0}));
    }

    #[test]
    fn test_deleted_message_shape() {
        let json = serde_json::to_value(MessageResponse::deleted()).unwrap();
        assert_eq!(json, serde_json::json!({"message": "Todo deleted successfully"}));
    }

    #[test]
    fn test_error_response_shape() {
        let json = serde_json::to_value(ErrorResponse::new("Todo not found")).unwrap();
        assert_eq!(json, serde_json::json!({"error": "Todo not found"}));
    }
}
