mod error;
mod operations;
mod requests;
mod responses;
mod types;

pub use error::TodoError;
pub use operations::{
    parse_create_request, parse_update_request, sort_todos_newest_first, validate_title,
};
pub use requests::{CreateTodoRequest, UpdateTodoRequest};
pub use responses::{ErrorResponse, MessageResponse, TodoList, DELETED_MESSAGE};
pub use types::{Todo, TodoChanges};
