use super::{MealId, OrderId, UserId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;
use thiserror::Error;

/// Lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    New,
    Confirmed,
    Preparing,
    Ready,
    OutForDelivery,
    Delivered,
    Completed,
    Cancelled,
}

use OrderStatus::*;

impl OrderStatus {
    pub const ALL: [OrderStatus; 8] = [
        New,
        Confirmed,
        Preparing,
        Ready,
        OutForDelivery,
        Delivered,
        Completed,
        Cancelled,
    ];

    /// Legal next states. `Ready` branches: pickup orders may complete
    /// directly, delivery orders go out first.
    pub fn successors(self) -> &'static [OrderStatus] {
        match self {
            New => &[Confirmed, Cancelled],
            Confirmed => &[Preparing, Cancelled],
            Preparing => &[Ready, Cancelled],
            Ready => &[OutForDelivery, Completed, Cancelled],
            OutForDelivery => &[Delivered, Cancelled],
            Delivered => &[Completed],
            Completed | Cancelled => &[],
        }
    }

    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        self.successors().contains(&next)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Completed | Cancelled)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            New => "new",
            Confirmed => "confirmed",
            Preparing => "preparing",
            Ready => "ready",
            OutForDelivery => "out_for_delivery",
            Delivered => "delivered",
            Completed => "completed",
            Cancelled => "cancelled",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unknown order status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMethod {
    Pickup,
    Delivery,
}

/// How the order reaches the customer. A delivery always carries its address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum DeliveryDetails {
    Pickup,
    Delivery { address: String },
}

impl DeliveryDetails {
    pub fn delivery(address: impl Into<String>) -> Self {
        DeliveryDetails::Delivery {
            address: address.into(),
        }
    }

    pub fn method(&self) -> DeliveryMethod {
        match self {
            DeliveryDetails::Pickup => DeliveryMethod::Pickup,
            DeliveryDetails::Delivery { .. } => DeliveryMethod::Delivery,
        }
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            DeliveryDetails::Pickup => None,
            DeliveryDetails::Delivery { address } => Some(address),
        }
    }

    pub fn is_delivery(&self) -> bool {
        self.method() == DeliveryMethod::Delivery
    }
}

/// A customer's request for a quantity of one meal from one cook.
///
/// Meal name and image are snapshots taken at order time; `total_amount` is
/// computed once at creation and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: UserId,
    pub cook_id: UserId,
    pub meal_id: MealId,
    pub meal_name: String,
    pub meal_image_url: Option<String>,
    pub quantity: u32,
    pub total_amount: Decimal,
    pub delivery: DeliveryDetails,
    pub requested_time: DateTime<Utc>,
    pub special_instructions: Option<String>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Params for creating a new order, assembled after pricing.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer_id: UserId,
    pub cook_id: UserId,
    pub meal_id: MealId,
    pub meal_name: String,
    pub meal_image_url: Option<String>,
    pub quantity: u32,
    pub total_amount: Decimal,
    pub delivery: DeliveryDetails,
    pub requested_time: DateTime<Utc>,
    pub special_instructions: Option<String>,
    pub created_at: DateTime<Utc>,
}
