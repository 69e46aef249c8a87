use super::{FetchScope, OrderClient};
use crate::domain::{Order, Principal};
use crate::order_actor::{cook_view, OrderError, OrderPartition};
use tracing::{debug, instrument};

/// A cook's local snapshot of their orders, switched between partitions.
///
/// The first `active` view reads only non-terminal orders. Asking for `all`
/// or `history` widens the snapshot once; after that, switching partitions is
/// a pure filter over the snapshot until [`refresh`](Self::refresh).
pub struct CookOrderBoard {
    orders: OrderClient,
    cook: Principal,
    snapshot: Vec<Order>,
    loaded: Option<FetchScope>,
    fetches: usize,
}

impl CookOrderBoard {
    pub fn new(orders: OrderClient, cook: Principal) -> Self {
        Self {
            orders,
            cook,
            snapshot: Vec::new(),
            loaded: None,
            fetches: 0,
        }
    }

    #[instrument(skip(self), fields(cook = %self.cook.uid))]
    pub async fn select(&mut self, partition: OrderPartition) -> Result<Vec<Order>, OrderError> {
        let needed = match partition {
            OrderPartition::Active => FetchScope::ActiveOnly,
            OrderPartition::All | OrderPartition::History => FetchScope::Everything,
        };
        let covered = matches!(
            (self.loaded, needed),
            (Some(FetchScope::Everything), _) | (Some(FetchScope::ActiveOnly), FetchScope::ActiveOnly)
        );
        if !covered {
            self.fetch(needed).await?;
        } else {
            debug!("Serving partition from snapshot");
        }
        Ok(cook_view(&self.snapshot, partition))
    }

    /// Re-reads the widest scope fetched so far.
    pub async fn refresh(&mut self) -> Result<(), OrderError> {
        let scope = self.loaded.unwrap_or(FetchScope::ActiveOnly);
        self.fetch(scope).await
    }

    /// How many reads this board has issued.
    pub fn fetches(&self) -> usize {
        self.fetches
    }

    async fn fetch(&mut self, scope: FetchScope) -> Result<(), OrderError> {
        self.snapshot = self.orders.orders_for_cook(&self.cook, scope).await?;
        self.loaded = Some(scope);
        self.fetches += 1;
        Ok(())
    }
}
