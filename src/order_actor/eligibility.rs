//! Read-only flags derived from an order's status. Nothing here is stored.

use super::{authorize, CUSTOMER_CANCELLABLE};
use crate::domain::{DeliveryMethod, Order, OrderStatus, Principal, Role};

pub fn can_cancel(order: &Order, acting_role: Role) -> bool {
    match acting_role {
        Role::Customer => CUSTOMER_CANCELLABLE.contains(&order.status),
        Role::Cook => !order.status.is_terminal(),
    }
}

/// Cook view: whether the status can still be advanced.
pub fn can_update_status(order: &Order) -> bool {
    !order.status.is_terminal()
}

/// Whether a review may be offered. The one-review-per-order rule is enforced
/// at submission time.
pub fn can_review(order: &Order) -> bool {
    order.status == OrderStatus::Completed
}

pub fn can_reorder(order: &Order) -> bool {
    order.status == OrderStatus::Completed
}

/// The transitions a UI should offer `by`: legal, authorized, and consistent
/// with the order's delivery method at the `ready` branch.
pub fn offered_transitions(order: &Order, by: &Principal) -> Vec<OrderStatus> {
    order
        .status
        .successors()
        .iter()
        .copied()
        .filter(|&to| authorize(by, order, to).is_ok())
        .filter(|&to| match (order.delivery.method(), to) {
            (DeliveryMethod::Pickup, OrderStatus::OutForDelivery) => false,
            (DeliveryMethod::Delivery, OrderStatus::Completed) => order.status != OrderStatus::Ready,
            _ => true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DeliveryDetails, MealId, OrderId, UserId};
    use chrono::Utc;
    use rust_decimal_macros::dec;
    use OrderStatus::*;

    fn order(status: OrderStatus, delivery: DeliveryDetails) -> Order {
        let now = Utc::now();
        Order {
            id: OrderId::from("order_1"),
            customer_id: UserId::from("alice"),
            cook_id: UserId::from("bob"),
            meal_id: MealId::from("meal_1"),
            meal_name: "Tacos".into(),
            meal_image_url: None,
            quantity: 1,
            total_amount: dec!(9.50),
            delivery,
            requested_time: now,
            special_instructions: None,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_review_and_reorder_only_when_completed() {
        for status in OrderStatus::ALL {
            let o = order(status, DeliveryDetails::Pickup);
            assert_eq!(can_review(&o), status == Completed, "{status}");
            assert_eq!(can_reorder(&o), status == Completed, "{status}");
        }
    }

    #[test]
    fn test_cancel_flags_per_role() {
        for status in OrderStatus::ALL {
            let o = order(status, DeliveryDetails::Pickup);
            assert_eq!(can_cancel(&o, Role::Customer), matches!(status, New | Confirmed));
            assert_eq!(can_cancel(&o, Role::Cook), !matches!(status, Completed | Cancelled));
            assert_eq!(can_update_status(&o), !matches!(status, Completed | Cancelled));
        }
    }

    #[test]
    fn test_ready_branch_follows_delivery_method() {
        let cook = Principal::cook("bob");
        let pickup = order(Ready, DeliveryDetails::Pickup);
        assert_eq!(offered_transitions(&pickup, &cook), vec![Completed, Cancelled]);

        let delivery = order(Ready, DeliveryDetails::delivery("3 Oak Ave"));
        assert_eq!(offered_transitions(&delivery, &cook), vec![OutForDelivery, Cancelled]);

        let delivered = order(Delivered, DeliveryDetails::delivery("3 Oak Ave"));
        assert_eq!(offered_transitions(&delivered, &cook), vec![Completed]);
    }

    #[test]
    fn test_customer_is_offered_cancel_only_early() {
        let customer = Principal::customer("alice");
        assert_eq!(offered_transitions(&order(Confirmed, DeliveryDetails::Pickup), &customer), vec![Cancelled]);
        assert!(offered_transitions(&order(Preparing, DeliveryDetails::Pickup), &customer).is_empty());
    }
}
