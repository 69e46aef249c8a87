use super::ReviewError;
use crate::domain::{Order, OrderStatus, Principal};

/// Server-side re-check of review eligibility: only the ordering customer,
/// only once the order is completed.
pub fn ensure_reviewable(by: &Principal, order: &Order) -> Result<(), ReviewError> {
    if !by.is_customer(&order.customer_id) {
        return Err(ReviewError::Forbidden(format!(
            "{by} did not place order {}",
            order.id
        )));
    }
    if order.status != OrderStatus::Completed {
        return Err(ReviewError::OrderNotCompleted(order.status));
    }
    Ok(())
}
