use super::error::TodoError;
use super::requests::{CreateTodoRequest, UpdateTodoRequest};
use super::types::Todo;

/// Validates a todo title.
pub fn validate_title(title: &str) -> Result<(), TodoError> {
    if title.trim().is_empty() {
        return Err(TodoError::EmptyTitle);
    }
    Ok(())
}

/// Parses a create request from a JSON request body.
pub fn parse_create_request(body: &str) -> Result<CreateTodoRequest, TodoError> {
    serde_json::from_str(body).map_err(|e| TodoError::InvalidBody(e.to_string()))
}

/// Parses a partial update request from a JSON request body.
pub fn parse_update_request(body: &str) -> Result<UpdateTodoRequest, TodoError> {
    serde_json::from_str(body).map_err(|e| TodoError::InvalidBody(e.to_string()))
}

/// Sorts todos by `created_at`, most recent first.
/// Todos without `created_at` go last, keeping their relative order.
pub fn sort_todos_newest_first(todos: &mut [Todo]) {
    todos.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn todo_at(title: &str, hour: Option<u32>) -> Todo {
        let mut todo = Todo::new(title, "");
        todo.created_at = hour.map(|h| Utc.with_ymd_and_hms(2024, 1, 15, h, 0, 0).unwrap());
        todo
    }

    #[test]
    fn test_validate_title() {
        assert!(validate_title("Buy milk").is_ok());
        assert_eq!(validate_title(""), Err(TodoError::EmptyTitle));
        assert_eq!(validate_title(" \t\n"), Err(TodoError::EmptyTitle));
    }

    #[test]
    fn test_parse_create_request() {
        let request = parse_create_request(r#"{"title": "Buy milk"}"#).unwrap();
        assert_eq!(request.title.as_deref(), Some("Buy milk"));
        assert_eq!(request.description, None);
    }

    #[test]
    fn test_parse_create_request_without_title() {
        let request = parse_create_request(r#"{"description": "no title"}"#).unwrap();
        assert_eq!(request.title, None);
    }

    #[test]
    fn test_parse_create_request_ignores_unknown_fields() {
        let request = parse_create_request(r#"{"title": "x", "completed": true}"#).unwrap();
        assert_eq!(request.title.as_deref(), Some("x"));
    }

    #[test]
    fn test_parse_rejects_malformed_bodies() {
        for body in ["", "not json", r#""text""#, "null", r#"{"title": 5}"#] {
            assert!(
                matches!(parse_create_request(body), Err(TodoError::InvalidBody(_))),
                "body {body:?} should be rejected"
            );
        }
        assert!(matches!(
            parse_update_request(r#"{"completed": "yes"}"#),
            Err(TodoError::InvalidBody(_))
        ));
    }

    #[test]
    fn test_parse_update_request_null_is_absent() {
        let request = parse_update_request(r#"{"description": null}"#).unwrap();
        assert_eq!(request, UpdateTodoRequest::default());
    }

    #[test]
    fn test_parse_update_request_empty_object() {
        let request = parse_update_request("{}").unwrap();
        assert_eq!(request, UpdateTodoRequest::default());
    }

    #[test]
    fn test_sort_newest_first() {
        let mut todos = vec![
            todo_at("old", Some(8)),
            todo_at("new", Some(12)),
            todo_at("mid", Some(10)),
        ];

        sort_todos_newest_first(&mut todos);

        let titles: Vec<&str> = todos.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_sort_puts_missing_created_at_last() {
        let mut todos = vec![
            todo_at("undated-1", None),
            todo_at("dated", Some(9)),
            todo_at("undated-2", None),
        ];

        sort_todos_newest_first(&mut todos);

        let titles: Vec<&str> = todos.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["dated", "undated-1", "undated-2"]);
    }
}
