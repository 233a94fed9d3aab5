//! Health CLI commands.

use clap::Parser;

/// Liveness check against `/livez`.
#[derive(Debug, Parser)]
pub struct HealthCommand {}
