use crate::actor_framework::FrameworkError;
use crate::cook_actor::CookError;
use thiserror::Error;

/// Errors that can occur during meal operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MealError {
    #[error("Meal not found: {0}")]
    NotFound(String),
    #[error("Forbidden: {0}")]
    Forbidden(String),
    #[error("Meal validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for MealError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => MealError::NotFound(id),
            other => MealError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<CookError> for MealError {
    fn from(e: CookError) -> Self {
        MealError::ActorCommunicationError(e.to_string())
    }
}
