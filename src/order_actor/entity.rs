use super::{apply_transition, OrderError, TransitionRequest};
use crate::actor_framework::Entity;
use crate::domain::{DeliveryDetails, Order, OrderCreate, OrderId, OrderStatus};

/// Custom actions for Order entities.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Move the order along the state machine on behalf of a principal.
    Transition(TransitionRequest),
}

impl Entity for Order {
    type Id = OrderId;
    type CreateParams = OrderCreate;
    type Patch = ();
    type Action = OrderAction;
    type ActionResult = Order;
    type Error = OrderError;

    fn id(&self) -> &OrderId {
        &self.id
    }

    /// Creates a new Order in status `new`.
    ///
    /// # Errors
    /// Rejects a zero quantity, a blank delivery address and a requested time
    /// that is not after creation.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        if params.quantity == 0 {
            return Err(OrderError::ValidationError("quantity must be at least 1".into()));
        }
        if let DeliveryDetails::Delivery { address } = &params.delivery {
            if address.trim().is_empty() {
                return Err(OrderError::ValidationError("delivery address is required".into()));
            }
        }
        if params.requested_time <= params.created_at {
            return Err(OrderError::ValidationError("requested time must be in the future".into()));
        }

        Ok(Self {
            id,
            customer_id: params.customer_id,
            cook_id: params.cook_id,
            meal_id: params.meal_id,
            meal_name: params.meal_name,
            meal_image_url: params.meal_image_url,
            quantity: params.quantity,
            total_amount: params.total_amount,
            delivery: params.delivery,
            requested_time: params.requested_time,
            special_instructions: params
                .special_instructions
                .filter(|text| !text.trim().is_empty()),
            status: OrderStatus::New,
            created_at: params.created_at,
            updated_at: params.created_at,
        })
    }

    /// Orders have no free-form updates; status moves only through
    /// [`OrderAction::Transition`].
    fn on_update(&mut self, _patch: ()) -> Result<(), OrderError> {
        Err(OrderError::Forbidden("orders change only through status transitions".into()))
    }

    fn on_delete(&self) -> Result<(), OrderError> {
        Err(OrderError::Forbidden("orders cannot be deleted".into()))
    }

    fn handle_action(&mut self, action: OrderAction) -> Result<Order, OrderError> {
        match action {
            OrderAction::Transition(request) => {
                apply_transition(self, &request)?;
                Ok(self.clone())
            }
        }
    }
}
