use super::MarketConfig;
use crate::actor_framework::ResourceActor;
use crate::clients::{system_clock, Clock, CookClient, CookOrderBoard, MealClient, OrderClient, ReviewClient};
use crate::discovery::BrowseFilter;
use crate::domain::{CookProfile, Meal, MealId, Order, OrderId, Principal, Review};
use crate::geo::Coordinates;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// `prefix_1`, `prefix_2`, ...
fn sequential_ids<I: From<String>>(prefix: &'static str) -> impl Fn() -> I + Send + Sync + 'static {
    let counter = Arc::new(AtomicU64::new(1));
    move || I::from(format!("{}_{}", prefix, counter.fetch_add(1, Ordering::SeqCst)))
}

/// The marketplace: one actor per collection, wired into role-aware clients.
///
/// Every client clone shares the actors' mailboxes. [`shutdown`](Self::shutdown)
/// only completes once all clones, boards included, have been dropped.
pub struct MarketSystem {
    pub order_client: OrderClient,
    pub meal_client: MealClient,
    pub cook_client: CookClient,
    pub review_client: ReviewClient,
    default_radius_km: f64,
    handles: Vec<JoinHandle<()>>,
}

impl MarketSystem {
    pub fn new(config: &MarketConfig) -> Self {
        Self::with_clock(config, system_clock())
    }

    pub fn with_clock(config: &MarketConfig, clock: Clock) -> Self {
        let buffer = config.channel_buffer;

        // 1. Cook profiles, keyed by the cook's uid
        let (cook_actor, cook_inner) = ResourceActor::<CookProfile>::keyed(buffer);
        let cook_client = CookClient::new(cook_inner, clock.clone());
        let cook_handle = tokio::spawn(cook_actor.run());

        // 2. Meals
        let (meal_actor, meal_inner) = ResourceActor::<Meal>::new(buffer, sequential_ids::<MealId>("meal"));
        let meal_client = MealClient::new(meal_inner, cook_client.clone(), clock.clone());
        let meal_handle = tokio::spawn(meal_actor.run());

        // 3. Orders
        let (order_actor, order_inner) = ResourceActor::<Order>::new(buffer, sequential_ids::<OrderId>("order"));
        let order_client = OrderClient::new(order_inner, meal_client.clone(), cook_client.clone(), clock.clone());
        let order_handle = tokio::spawn(order_actor.run());

        // 4. Reviews, keyed by the order they rate
        let (review_actor, review_inner) = ResourceActor::<Review>::keyed(buffer);
        let review_client = ReviewClient::new(review_inner, order_client.clone(), clock);
        let review_handle = tokio::spawn(review_actor.run());

        info!(channel_buffer = buffer, "Market system started");
        Self {
            order_client,
            meal_client,
            cook_client,
            review_client,
            default_radius_km: config.discovery.default_radius_km,
            handles: vec![cook_handle, meal_handle, order_handle, review_handle],
        }
    }

    /// A browse filter seeded with the configured radius.
    pub fn browse_filter(&self, origin: Option<Coordinates>) -> BrowseFilter {
        BrowseFilter {
            origin,
            radius_km: self.default_radius_km,
            ..BrowseFilter::default()
        }
    }

    pub fn order_board(&self, cook: Principal) -> CookOrderBoard {
        CookOrderBoard::new(self.order_client.clone(), cook)
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down market system...");

        // Dropping the clients closes the channels; each actor exits its loop.
        drop(self.review_client);
        drop(self.order_client);
        drop(self.meal_client);
        drop(self.cook_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Market system shutdown complete.");
        Ok(())
    }
}
