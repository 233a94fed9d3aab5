use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the table holding todo records (default: "todos")
    pub table_name: String,
    /// Custom DynamoDB endpoint, e.g. DynamoDB Local (default: none)
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub dynamodb_endpoint_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TABLE_NAME` - Table holding todo records (default: "todos")
    /// - `DYNAMODB_ENDPOINT_URL` - Custom DynamoDB endpoint (default: AWS)
    pub fn from_env() -> Self {
        Self {
            table_name: env::var("TABLE_NAME")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| "todos".to_string()),
            dynamodb_endpoint_url: env::var("DYNAMODB_ENDPOINT_URL")
                .ok()
                .filter(|v| !v.trim().is_empty()),
        }
    }
}
