use super::{Clock, CookClient, MealClient};
use crate::actor_framework::{Query, ResourceClient};
use crate::domain::{
    DeliveryDetails, MealId, Order, OrderCreate, OrderId, OrderStatus, Principal, Role, UserId,
};
use crate::order_actor::{
    can_reorder, customer_view, newest_first, OrderAction, OrderError, TransitionRequest,
};
use crate::pricing::{compute_total, ensure_minimum_order};
use chrono::{DateTime, Utc};
use tracing::{debug, error, info, instrument, warn};

/// What a customer submits when ordering.
#[derive(Debug, Clone)]
pub struct PlaceOrder {
    pub meal_id: MealId,
    pub quantity: u32,
    pub delivery: DeliveryDetails,
    pub requested_time: DateTime<Utc>,
    pub special_instructions: Option<String>,
}

/// How much of a cook's order set to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchScope {
    /// Only non-terminal orders.
    ActiveOnly,
    Everything,
}

/// Starting point for re-entering order creation from a completed order.
#[derive(Debug, Clone, PartialEq)]
pub struct ReorderTemplate {
    pub meal_id: MealId,
    pub quantity: u32,
    pub delivery: DeliveryDetails,
}

/// Client for interacting with the Order actor.
///
/// Order placement orchestrates the meal and cook actors: the meal is
/// resolved, priced against the cook's policy, checked against the minimum
/// order amount and only then persisted.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    meal_client: MealClient,
    cook_client: CookClient,
    clock: Clock,
}

impl_client_methods!(OrderClient, Order, OrderId, OrderError, order);

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>, meal_client: MealClient, cook_client: CookClient, clock: Clock) -> Self {
        Self {
            inner,
            meal_client,
            cook_client,
            clock,
        }
    }

    #[instrument(
        skip(self, by, request),
        fields(customer_id = %by.uid, meal_id = %request.meal_id, quantity = request.quantity)
    )]
    pub async fn place_order(&self, by: &Principal, request: PlaceOrder) -> Result<Order, OrderError> {
        info!("Processing place_order request");

        if by.role != Role::Customer {
            error!("Only customers can place orders");
            return Err(OrderError::Forbidden(format!("{by} is not a customer")));
        }
        if request.quantity == 0 {
            return Err(OrderError::ValidationError("quantity must be at least 1".into()));
        }

        // Step 1: Resolve the meal
        let meal = match self.meal_client.get_meal(request.meal_id.clone()).await {
            Ok(Some(meal)) => meal,
            Ok(None) => {
                error!("Meal not found");
                return Err(OrderError::NotFound(request.meal_id.to_string()));
            }
            Err(e) => {
                error!(error = %e, "Meal lookup failed");
                return Err(e.into());
            }
        };
        if !meal.available {
            warn!("Meal is not available");
            return Err(OrderError::MealUnavailable(meal.name));
        }
        if !meal.schedule.is_available_on(request.requested_time) {
            warn!(requested_time = %request.requested_time, "Meal is not offered on the requested day");
            return Err(OrderError::MealUnavailable(meal.name));
        }

        // Step 2: Cook policy and delivery eligibility
        let policy = self.cook_client.policy_for(meal.cook_id.clone()).await?;
        if request.delivery.is_delivery() && !policy.delivery_available {
            warn!("Cook does not deliver");
            return Err(OrderError::DeliveryUnavailable);
        }

        // Step 3: Price once, reject below the minimum before anything is stored
        let price = compute_total(&meal, request.quantity, &request.delivery, &policy);
        if let Err(e) = ensure_minimum_order(price.total, &policy) {
            warn!(total = %price.total, "Order below minimum");
            return Err(e);
        }

        // Step 4: Persist
        let params = OrderCreate {
            customer_id: by.uid.clone(),
            cook_id: meal.cook_id.clone(),
            meal_id: meal.id.clone(),
            meal_name: meal.name.clone(),
            meal_image_url: meal.image_url.clone(),
            quantity: request.quantity,
            total_amount: price.total,
            delivery: request.delivery,
            requested_time: request.requested_time,
            special_instructions: request.special_instructions,
            created_at: (self.clock)(),
        };
        let id = self.inner.create(params).await?;
        info!(order_id = %id, total = %price.total, "Order created successfully");
        self.require_order(id).await
    }

    /// Runs a transition inside the order actor, so the check and the write
    /// see the same status.
    #[instrument(skip(self, by), fields(by = %by))]
    pub async fn transition(&self, by: &Principal, id: OrderId, to: OrderStatus) -> Result<Order, OrderError> {
        debug!("Sending request");
        let request = TransitionRequest {
            by: by.clone(),
            to,
            at: (self.clock)(),
        };
        self.inner
            .perform_action(id, OrderAction::Transition(request))
            .await
    }

    pub async fn cancel(&self, by: &Principal, id: OrderId) -> Result<Order, OrderError> {
        self.transition(by, id, OrderStatus::Cancelled).await
    }

    /// An order as seen by one of its parties.
    #[instrument(skip(self, by), fields(by = %by))]
    pub async fn view_order(&self, by: &Principal, id: OrderId) -> Result<Order, OrderError> {
        let order = self.require_order(id).await?;
        if by.is_customer(&order.customer_id) || by.is_cook(&order.cook_id) {
            Ok(order)
        } else {
            Err(OrderError::Forbidden(format!("{by} is not a party to order {}", order.id)))
        }
    }

    /// Customer view: all of the caller's orders, newest first.
    #[instrument(skip(self, by), fields(by = %by))]
    pub async fn orders_for_customer(&self, by: &Principal) -> Result<Vec<Order>, OrderError> {
        if by.role != Role::Customer {
            return Err(OrderError::Forbidden(format!("{by} is not a customer")));
        }
        let customer_id = by.uid.clone();
        let orders = self
            .inner
            .query(
                Query::all()
                    .filter(move |order: &Order| order.customer_id == customer_id)
                    .sort_by(newest_first),
            )
            .await?;
        Ok(customer_view(&orders))
    }

    /// The cook's orders, newest first. `ActiveOnly` narrows the read to
    /// non-terminal statuses.
    #[instrument(skip(self, by), fields(by = %by))]
    pub async fn orders_for_cook(&self, by: &Principal, scope: FetchScope) -> Result<Vec<Order>, OrderError> {
        if by.role != Role::Cook {
            return Err(OrderError::Forbidden(format!("{by} is not a cook")));
        }
        let cook_id: UserId = by.uid.clone();
        let active_only = scope == FetchScope::ActiveOnly;
        let orders = self
            .inner
            .query(
                Query::all()
                    .filter(move |order: &Order| {
                        order.cook_id == cook_id && (!active_only || !order.status.is_terminal())
                    })
                    .sort_by(newest_first),
            )
            .await?;
        info!(count = orders.len(), ?scope, "Cook orders fetched");
        Ok(orders)
    }

    /// Meal, quantity and delivery of a completed order, for ordering again.
    #[instrument(skip(self, by), fields(by = %by))]
    pub async fn reorder_template(&self, by: &Principal, id: OrderId) -> Result<ReorderTemplate, OrderError> {
        let order = self.require_order(id).await?;
        if !by.is_customer(&order.customer_id) {
            return Err(OrderError::Forbidden(format!("{by} did not place order {}", order.id)));
        }
        if !can_reorder(&order) {
            return Err(OrderError::ValidationError(format!(
                "order is {}, only completed orders can be reordered",
                order.status
            )));
        }
        Ok(ReorderTemplate {
            meal_id: order.meal_id,
            quantity: order.quantity,
            delivery: order.delivery,
        })
    }
}
