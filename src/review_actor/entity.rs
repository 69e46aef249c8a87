use super::ReviewError;
use crate::actor_framework::Entity;
use crate::domain::{OrderId, Review, ReviewCreate, MAX_COMMENT_CHARS};

/// Reviews are keyed by the order they rate, so the store itself holds at
/// most one per order.
impl Entity for Review {
    type Id = OrderId;
    type CreateParams = ReviewCreate;
    type Patch = ();
    type Action = ();
    type ActionResult = ();
    type Error = ReviewError;

    fn id(&self) -> &OrderId {
        &self.order_id
    }

    /// # Errors
    /// Rating outside 1..=5, blank comment, or comment over [`MAX_COMMENT_CHARS`].
    fn from_create_params(order_id: OrderId, params: ReviewCreate) -> Result<Self, ReviewError> {
        if !(1..=5).contains(&params.rating) {
            return Err(ReviewError::ValidationError(format!(
                "rating must be between 1 and 5, got {}",
                params.rating
            )));
        }
        let comment = params.comment.trim().to_string();
        if comment.is_empty() {
            return Err(ReviewError::ValidationError("comment is required".into()));
        }
        if comment.chars().count() > MAX_COMMENT_CHARS {
            return Err(ReviewError::ValidationError(format!(
                "comment is limited to {MAX_COMMENT_CHARS} characters"
            )));
        }
        Ok(Self {
            order_id,
            customer_id: params.customer_id,
            cook_id: params.cook_id,
            meal_id: params.meal_id,
            rating: params.rating,
            comment,
            created_at: params.created_at,
        })
    }

    /// The existing-document branch of create-if-absent: an order already
    /// carrying a review refuses another.
    fn on_upsert(&mut self, _params: ReviewCreate) -> Result<(), ReviewError> {
        Err(ReviewError::AlreadyReviewed(self.order_id.to_string()))
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), ReviewError> {
        Err(ReviewError::Forbidden("reviews cannot be edited".into()))
    }

    fn on_delete(&self) -> Result<(), ReviewError> {
        Err(ReviewError::Forbidden("reviews cannot be deleted".into()))
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), ReviewError> {
        Ok(())
    }
}
