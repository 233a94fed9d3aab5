use thiserror::Error;

/// Errors that can occur when parsing or validating a todo request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TodoError {
    #[error("Title is required")]
    MissingTitle,
    #[error("Title cannot be empty")]
    EmptyTitle,
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}
