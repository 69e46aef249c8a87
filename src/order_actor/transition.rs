//! The order state machine.
//!
//! A transition request is checked in two steps: the target must be a legal
//! successor of the current status (`IllegalTransition` otherwise), and the
//! principal must be allowed to drive that edge (`Forbidden` otherwise).
//! Forward progress belongs to the owning cook. The ordering customer may
//! cancel while the order is `new` or `confirmed`; the cook may cancel at any
//! stage the graph allows.
//!
//! An accepted transition writes `status` and `updated_at` and nothing else.

use super::OrderError;
use crate::domain::{Order, OrderStatus, Principal};
use chrono::{DateTime, Utc};
use tracing::{info, instrument, warn};

/// Statuses from which the ordering customer may still cancel.
pub const CUSTOMER_CANCELLABLE: [OrderStatus; 2] = [OrderStatus::New, OrderStatus::Confirmed];

#[derive(Debug, Clone, PartialEq)]
pub struct TransitionRequest {
    pub by: Principal,
    pub to: OrderStatus,
    pub at: DateTime<Utc>,
}

/// Fails with `IllegalTransition` when `to` is not a successor of the current status.
pub fn ensure_legal(from: OrderStatus, to: OrderStatus) -> Result<(), OrderError> {
    if from.can_transition_to(to) {
        Ok(())
    } else {
        Err(OrderError::IllegalTransition { from, to })
    }
}

/// Fails with `Forbidden` when `by` may not move `order` to `to`.
pub fn authorize(by: &Principal, order: &Order, to: OrderStatus) -> Result<(), OrderError> {
    if by.is_cook(&order.cook_id) {
        return Ok(());
    }
    if to == OrderStatus::Cancelled && by.is_customer(&order.customer_id) {
        return if CUSTOMER_CANCELLABLE.contains(&order.status) {
            Ok(())
        } else {
            Err(OrderError::Forbidden(format!(
                "customer cannot cancel an order that is {}",
                order.status
            )))
        };
    }
    if by.is_customer(&order.customer_id) {
        return Err(OrderError::Forbidden(format!(
            "only the cook can move an order to {to}"
        )));
    }
    Err(OrderError::Forbidden(format!("{by} is not a party to order {}", order.id)))
}

/// Legality then authorization, without touching the order.
pub fn check_transition(by: &Principal, order: &Order, to: OrderStatus) -> Result<(), OrderError> {
    ensure_legal(order.status, to)?;
    authorize(by, order, to)
}

/// Applies an accepted transition in place. On error the order is unchanged.
#[instrument(
    fields(order_id = %order.id, from = %order.status, to = %request.to, by = %request.by),
    skip(order, request)
)]
pub fn apply_transition(order: &mut Order, request: &TransitionRequest) -> Result<(), OrderError> {
    if let Err(e) = check_transition(&request.by, order, request.to) {
        warn!(error = %e, "Transition rejected");
        return Err(e);
    }
    order.status = request.to;
    order.updated_at = request.at;
    info!("Transition accepted");
    Ok(())
}

/// Returns the next snapshot of `order`, leaving the input as it was.
pub fn transition(order: &Order, request: &TransitionRequest) -> Result<Order, OrderError> {
    let mut next = order.clone();
    apply_transition(&mut next, request)?;
    Ok(next)
}
