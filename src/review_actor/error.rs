use crate::actor_framework::FrameworkError;
use crate::domain::OrderStatus;
use crate::order_actor::OrderError;
use thiserror::Error;

/// Errors that can occur during review operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReviewError {
    #[error("Review not found: {0}")]
    NotFound(String),
    #[error("Order is {0}, only completed orders can be reviewed")]
    OrderNotCompleted(OrderStatus),
    #[error("Forbidden: {0}")]
    Forbidden(String),
    #[error("Order already reviewed: {0}")]
    AlreadyReviewed(String),
    #[error("Review validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for ReviewError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => ReviewError::NotFound(id),
            other => ReviewError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<OrderError> for ReviewError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::NotFound(id) => ReviewError::NotFound(id),
            OrderError::Forbidden(msg) => ReviewError::Forbidden(msg),
            other => ReviewError::ActorCommunicationError(other.to_string()),
        }
    }
}
