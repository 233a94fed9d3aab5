use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use todoapi_core::storage::{repository_error_to_status_code, RepositoryError};
use todoapi_core::todo::{ErrorResponse, TodoError};

use crate::response::JsonResponse;

pub const NOT_FOUND_MESSAGE: &str = "Todo not found";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Error returned by the todo handlers.
///
/// Conversions log the failure where it happens, so the current handler span
/// is attached. Internal details never reach the response body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(TodoError),
    #[error("Todo not found")]
    NotFound,
    #[error("Internal error: {0}")]
    Internal(#[source] RepositoryError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the caller.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::Validation(e) => e.to_string(),
            ApiError::NotFound => NOT_FOUND_MESSAGE.to_string(),
            ApiError::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

impl From<TodoError> for ApiError {
    fn from(err: TodoError) -> Self {
        tracing::warn!(error = %err, "Rejected request");
        ApiError::Validation(err)
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        if repository_error_to_status_code(&err) == 404 {
            return ApiError::NotFound;
        }
        tracing::error!(error = %err, "Storage operation failed");
        ApiError::Internal(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        JsonResponse::new(self.status_code(), &ErrorResponse::new(self.public_message()))
            .into_response()
    }
}
