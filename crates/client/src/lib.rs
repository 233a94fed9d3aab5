//! todoapi_client - HTTP client and CLI for the todoapi service.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::TodoClient;
pub use error::{ClientError, Result};
