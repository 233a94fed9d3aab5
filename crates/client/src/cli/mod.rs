//! CLI command definitions.

pub mod health;
pub mod todos;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the todoapi service.
#[derive(Debug, Parser)]
#[command(name = "todoapi-client")]
#[command(about = "CLI client for the todoapi service", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "TODOAPI_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Todo management.
    Todos(todos::TodosCommand),
    /// Server liveness check.
    Health(health::HealthCommand),
}
