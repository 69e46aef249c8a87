//! Role-aware clients over the resource actors. Every call takes the acting
//! [`Principal`](crate::domain::Principal) and stamps time from an injected clock.

#[macro_use]
mod macros;

pub mod cook_client;
pub mod meal_client;
pub mod order_board;
pub mod order_client;
pub mod review_client;

pub use cook_client::*;
pub use meal_client::*;
pub use order_board::*;
pub use order_client::*;
pub use review_client::*;

use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Source of "now" for every write.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

pub fn system_clock() -> Clock {
    Arc::new(Utc::now)
}
