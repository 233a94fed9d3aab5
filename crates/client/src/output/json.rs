//! JSON output formatting.

/// Format a value as compact JSON.
pub fn format_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use todoapi_core::todo::{MessageResponse, TodoList};

    #[test]
    fn test_format_json_is_compact() {
        assert_eq!(
            format_json(&TodoList::new(vec![])),
            r#"{"todos":[],"count":0}"#
        );
        assert_eq!(
            format_json(&MessageResponse::deleted()),
            r#"{"message":"Todo deleted successfully"}"#
        );
    }
}
