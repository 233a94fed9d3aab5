//! Pretty output formatting.

use todoapi_core::serde::format_timestamp;
use todoapi_core::todo::{Todo, TodoList};

/// Format a todo for display.
pub fn format_todo(todo: &Todo) -> String {
    let mark = if todo.completed { "x" } else { " " };
    let mut output = format!("[{}] {}\n  ID: {}", mark, todo.title, todo.id);
    if !todo.description.is_empty() {
        output.push_str(&format!("\n  Description: {}", todo.description));
    }
    if let Some(created_at) = &todo.created_at {
        output.push_str(&format!("\n  Created: {}", format_timestamp(created_at)));
    }
    if let Some(updated_at) = &todo.updated_at {
        output.push_str(&format!("\n  Updated: {}", format_timestamp(updated_at)));
    }
    output
}

/// Format a todo listing for display.
pub fn format_todos(list: &TodoList) -> String {
    if list.todos.is_empty() {
        return "No todos found.".to_string();
    }
    let mut output = format!("TODOS ({})\n", list.count);
    output.push_str(&"-".repeat(40));
    for todo in &list.todos {
        output.push_str(&format!("\n{}", format_todo(todo)));
        output.push('\n');
    }
    output
}
