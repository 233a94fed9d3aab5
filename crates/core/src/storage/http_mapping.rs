//! Pure functions for mapping repository errors to HTTP status codes.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - everything else -> 500 (Internal Server Error)
///
/// Storage failures are never surfaced to callers with more detail than a 500.
///
/// # Examples
///
/// ```
/// use todoapi_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::NotFound("abc-123".to_string());
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound(_) => 404,
        RepositoryError::AlreadyExists(_)
        | RepositoryError::ConnectionFailed(_)
        | RepositoryError::QueryFailed(_)
        | RepositoryError::Serialization(_)
        | RepositoryError::InvalidData(_) => 500,
    }
}
