use crate::actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during cook profile operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CookError {
    #[error("Cook profile not found: {0}")]
    NotFound(String),
    #[error("Forbidden: {0}")]
    Forbidden(String),
    #[error("Cook profile validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for CookError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => CookError::NotFound(id),
            other => CookError::ActorCommunicationError(other.to_string()),
        }
    }
}
