//! Todo CLI commands.

use clap::{Parser, Subcommand};

/// Todo management commands.
#[derive(Debug, Parser)]
pub struct TodosCommand {
    #[command(subcommand)]
    pub action: TodosAction,
}

/// Available todo actions.
#[derive(Debug, Subcommand)]
pub enum TodosAction {
    /// List all todos, newest first.
    List,
    /// Create a new todo.
    Create {
        /// Todo title.
        #[arg(long)]
        title: String,
        /// Todo description.
        #[arg(long)]
        description: Option<String>,
    },
    /// Get todo by ID.
    Get {
        /// Todo ID.
        id: String,
    },
    /// Update a todo. Omitted fields are left unchanged.
    Update {
        /// Todo ID.
        id: String,
        /// New title.
        #[arg(long)]
        title: Option<String>,
        /// New description.
        #[arg(long)]
        description: Option<String>,
        /// New completion state.
        #[arg(long)]
        completed: Option<bool>,
    },
    /// Flip the completion state of a todo.
    Toggle {
        /// Todo ID.
        id: String,
    },
    /// Delete todo by ID.
    Delete {
        /// Todo ID.
        id: String,
    },
}
