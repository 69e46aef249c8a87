//! Role-specific views over a set of orders. Pure filter and stable sort;
//! nothing is mutated or fetched here.

use crate::domain::{Order, OrderStatus};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{self, Display};

/// The cook's selectable views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderPartition {
    #[default]
    Active,
    All,
    History,
}

impl OrderPartition {
    pub fn includes(self, status: OrderStatus) -> bool {
        match self {
            OrderPartition::Active => !status.is_terminal(),
            OrderPartition::All => true,
            OrderPartition::History => status.is_terminal(),
        }
    }
}

impl Display for OrderPartition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderPartition::Active => f.write_str("active"),
            OrderPartition::All => f.write_str("all"),
            OrderPartition::History => f.write_str("history"),
        }
    }
}

/// Newest `created_at` first. Equal timestamps compare equal so a stable
/// sort keeps store order.
pub fn newest_first(a: &Order, b: &Order) -> Ordering {
    b.created_at.cmp(&a.created_at)
}

/// Customer view: every order, newest first.
pub fn customer_view(orders: &[Order]) -> Vec<Order> {
    cook_view(orders, OrderPartition::All)
}

/// Cook view for one partition, newest first.
pub fn cook_view(orders: &[Order], partition: OrderPartition) -> Vec<Order> {
    let mut view: Vec<Order> = orders
        .iter()
        .filter(|order| partition.includes(order.status))
        .cloned()
        .collect();
    view.sort_by(newest_first);
    view
}
