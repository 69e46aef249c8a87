use crate::actor_framework::FrameworkError;
use crate::cook_actor::CookError;
use crate::domain::OrderStatus;
use crate::meal_actor::MealError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),
    #[error("Illegal transition from {from} to {to}")]
    IllegalTransition { from: OrderStatus, to: OrderStatus },
    #[error("Forbidden: {0}")]
    Forbidden(String),
    #[error("Order total {total} is below the cook's minimum order amount of {minimum}")]
    BelowMinimumOrder { total: Decimal, minimum: Decimal },
    #[error("Cook does not offer delivery")]
    DeliveryUnavailable,
    #[error("Meal is not available: {0}")]
    MealUnavailable(String),
    #[error("Order validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<MealError> for OrderError {
    fn from(e: MealError) -> Self {
        match e {
            MealError::NotFound(id) => OrderError::NotFound(id),
            MealError::Forbidden(msg) => OrderError::Forbidden(msg),
            MealError::ValidationError(msg) => OrderError::ValidationError(msg),
            MealError::ActorCommunicationError(msg) => OrderError::ActorCommunicationError(msg),
        }
    }
}

impl From<CookError> for OrderError {
    fn from(e: CookError) -> Self {
        match e {
            CookError::NotFound(id) => OrderError::NotFound(id),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
