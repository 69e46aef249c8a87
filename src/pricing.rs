//! Order price composition. Computed once when an order is placed and frozen
//! on the order afterwards.

use crate::domain::{CookPolicy, DeliveryDetails, Meal};
use crate::order_actor::OrderError;
use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBreakdown {
    pub subtotal: Decimal,
    pub delivery_fee: Decimal,
    pub total: Decimal,
}

/// Subtotal is price times quantity; the cook's delivery fee is added only
/// for delivery orders and only when the cook charges one.
pub fn compute_total(meal: &Meal, quantity: u32, delivery: &DeliveryDetails, policy: &CookPolicy) -> PriceBreakdown {
    let subtotal = meal.price * Decimal::from(quantity);
    let delivery_fee = match (delivery, policy.delivery_fee) {
        (DeliveryDetails::Delivery { .. }, Some(fee)) => fee,
        _ => Decimal::ZERO,
    };
    PriceBreakdown {
        subtotal,
        delivery_fee,
        total: subtotal + delivery_fee,
    }
}

/// Rejects totals under the cook's minimum order amount, if one is set.
pub fn ensure_minimum_order(total: Decimal, policy: &CookPolicy) -> Result<(), OrderError> {
    match policy.minimum_order_amount {
        Some(minimum) if total < minimum => Err(OrderError::BelowMinimumOrder { total, minimum }),
        _ => Ok(()),
    }
}
