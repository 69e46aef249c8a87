use super::{MealId, OrderId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Longest accepted review comment, in characters.
pub const MAX_COMMENT_CHARS: usize = 500;

/// A customer's rating of a completed order. Immutable once written, and
/// identified by the order it rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub order_id: OrderId,
    pub customer_id: UserId,
    pub cook_id: UserId,
    pub meal_id: MealId,
    pub rating: u8,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ReviewCreate {
    pub customer_id: UserId,
    pub cook_id: UserId,
    pub meal_id: MealId,
    pub rating: u8,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}
