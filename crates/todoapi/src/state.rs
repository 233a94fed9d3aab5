//! Application state with repository-based storage.
//!
//! The state is cloned for every request. The storage backend behind the
//! repository trait object is chosen at compile time.

use std::sync::Arc;

use todoapi_core::storage::TodoRepository;

use crate::config::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Todo repository (in-memory or DynamoDB).
    pub todo_repo: Arc<dyn TodoRepository>,
}

impl AppState {
    /// Creates an AppState around an existing repository.
    pub fn with_repository(todo_repo: Arc<dyn TodoRepository>) -> Self {
        Self { todo_repo }
    }
}

#[cfg(feature = "inmemory")]
impl AppState {
    /// Creates an AppState backed by process-local storage.
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        use crate::storage::inmemory::InMemoryRepository;

        tracing::warn!(
            table = %config.table_name,
            "Using in-memory storage, todos are lost on restart"
        );

        Ok(Self::with_repository(Arc::new(InMemoryRepository::new())))
    }
}

#[cfg(feature = "dynamodb")]
impl AppState {
    /// Creates an AppState backed by a DynamoDB table.
    ///
    /// Credentials and region come from the AWS SDK default chain.
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        use crate::storage::dynamodb::DynamoDbRepository;

        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(endpoint_url) = &config.dynamodb_endpoint_url {
            tracing::info!(endpoint = %endpoint_url, "Using custom DynamoDB endpoint");
            loader = loader.endpoint_url(endpoint_url);
        }
        let aws_config = loader.load().await;
        let dynamodb_client = aws_sdk_dynamodb::Client::new(&aws_config);

        Ok(Self::with_repository(Arc::new(DynamoDbRepository::new(
            dynamodb_client,
            config.table_name.clone(),
        ))))
    }
}

#[cfg(test)]
impl Default for AppState {
    /// Creates an AppState with empty in-memory storage for testing.
    fn default() -> Self {
        Self::with_repository(Arc::new(crate::storage::inmemory::InMemoryRepository::new()))
    }
}
