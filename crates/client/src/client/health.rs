//! Health check operations.

use super::TodoClient;
use crate::error::{ClientError, Result};

impl TodoClient {
    /// Check that the server process is up.
    pub async fn livez(&self) -> Result<()> {
        let response = self.client.get(self.url("/livez")).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: "Liveness check failed".to_string(),
            })
        }
    }
}
