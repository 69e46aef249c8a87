use super::{Clock, OrderClient};
use crate::actor_framework::{Query, ResourceClient};
use crate::domain::{OrderId, Principal, Review, ReviewCreate, UserId};
use crate::review_actor::{ensure_reviewable, ReviewError};
use std::cmp::Ordering;
use tracing::{error, info, instrument, warn};

/// Client for interacting with the Review actor.
#[derive(Clone)]
pub struct ReviewClient {
    inner: ResourceClient<Review>,
    order_client: OrderClient,
    clock: Clock,
}

impl_client_methods!(ReviewClient, Review, OrderId, ReviewError, review);

impl ReviewClient {
    pub fn new(inner: ResourceClient<Review>, order_client: OrderClient, clock: Clock) -> Self {
        Self {
            inner,
            order_client,
            clock,
        }
    }

    /// Re-checks eligibility against the stored order; what the client
    /// showed the user is not trusted. The review is inserted create-if-absent
    /// under the order id, so the duplicate check and the write happen in one
    /// actor turn.
    #[instrument(skip(self, by, comment), fields(by = %by))]
    pub async fn submit_review(
        &self,
        by: &Principal,
        order_id: OrderId,
        rating: u8,
        comment: String,
    ) -> Result<Review, ReviewError> {
        let order = match self.order_client.get_order(order_id.clone()).await {
            Ok(Some(order)) => order,
            Ok(None) => {
                error!("Order not found");
                return Err(ReviewError::NotFound(order_id.to_string()));
            }
            Err(e) => {
                error!(error = %e, "Order lookup failed");
                return Err(e.into());
            }
        };

        if let Err(e) = ensure_reviewable(by, &order) {
            warn!(error = %e, "Review rejected");
            return Err(e);
        }

        let params = ReviewCreate {
            customer_id: order.customer_id,
            cook_id: order.cook_id,
            meal_id: order.meal_id,
            rating,
            comment,
            created_at: (self.clock)(),
        };
        match self.inner.upsert(order_id, params).await {
            Ok(review) => {
                info!(rating, "Review created");
                Ok(review)
            }
            Err(e) => {
                warn!(error = %e, "Review not stored");
                Err(e)
            }
        }
    }

    /// Reviews of one cook, newest first.
    #[instrument(skip(self))]
    pub async fn reviews_for_cook(&self, cook_id: UserId) -> Result<Vec<Review>, ReviewError> {
        self.inner
            .query(
                Query::all()
                    .filter(move |review: &Review| review.cook_id == cook_id)
                    .sort_by(|a: &Review, b: &Review| -> Ordering { b.created_at.cmp(&a.created_at) }),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_system::MarketSystem;
    use crate::domain::{DeliveryDetails, MealId, Order, OrderStatus};
    use crate::test_support::{cook, customer, place, profile, seeded_market, TestClock};
    use chrono::Duration;
    use rust_decimal_macros::dec;

    async fn order_at(market: &MarketSystem, clock: &TestClock, meal_id: MealId, stop: OrderStatus) -> Order {
        let order = market
            .order_client
            .place_order(&customer(), place(meal_id, 1, DeliveryDetails::Pickup, clock))
            .await
            .unwrap();
        let path = [OrderStatus::Confirmed, OrderStatus::Preparing, OrderStatus::Ready, OrderStatus::Completed];
        let mut current = order;
        for next in path {
            if current.status == stop {
                break;
            }
            current = market.order_client.transition(&cook(), current.id.clone(), next).await.unwrap();
        }
        current
    }

    #[tokio::test]
    async fn test_review_completed_order_once() {
        let (market, clock, meal) = seeded_market(profile(None, None), dec!(12)).await;
        let order = order_at(&market, &clock, meal.id.clone(), OrderStatus::Completed).await;

        let review = market
            .review_client
            .submit_review(&customer(), order.id.clone(), 5, "  Best lasagna in town ".into())
            .await
            .unwrap();
        assert_eq!(review.rating, 5);
        assert_eq!(review.comment, "Best lasagna in town");
        assert_eq!(review.cook_id, order.cook_id);
        assert_eq!(review.meal_id, meal.id);
        assert_eq!(review.created_at, clock.now());

        let again = market
            .review_client
            .submit_review(&customer(), order.id.clone(), 1, "Changed my mind".into())
            .await;
        assert_eq!(again, Err(ReviewError::AlreadyReviewed(order.id.to_string())));
    }

    #[tokio::test]
    async fn test_concurrent_submissions_store_one_review() {
        let (market, clock, meal) = seeded_market(profile(None, None), dec!(12)).await;
        let order = order_at(&market, &clock, meal.id, OrderStatus::Completed).await;
        let reviews = &market.review_client;

        let (customer_a, customer_b) = (customer(), customer());
        let (first, second) = tokio::join!(
            reviews.submit_review(&customer_a, order.id.clone(), 5, "Loved it".into()),
            reviews.submit_review(&customer_b, order.id.clone(), 2, "Too salty".into()),
        );

        let outcomes = [first, second];
        assert_eq!(outcomes.iter().filter(|outcome| outcome.is_ok()).count(), 1);
        assert!(outcomes
            .iter()
            .any(|outcome| *outcome == Err(ReviewError::AlreadyReviewed(order.id.to_string()))));

        let stored = reviews.reviews_for_cook(UserId::from("bob")).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(reviews.require_review(order.id.clone()).await.unwrap(), stored[0]);
    }

    #[tokio::test]
    async fn test_preparing_order_is_not_reviewable() {
        let (market, clock, meal) = seeded_market(profile(None, None), dec!(12)).await;
        let order = order_at(&market, &clock, meal.id, OrderStatus::Preparing).await;

        let result = market
            .review_client
            .submit_review(&customer(), order.id, 4, "Smells great".into())
            .await;
        assert_eq!(result, Err(ReviewError::OrderNotCompleted(OrderStatus::Preparing)));
    }

    #[tokio::test]
    async fn test_only_the_ordering_customer_reviews() {
        let (market, clock, meal) = seeded_market(profile(None, None), dec!(12)).await;
        let order = order_at(&market, &clock, meal.id, OrderStatus::Completed).await;

        for stranger in [cook(), Principal::customer("dave")] {
            assert!(matches!(
                market
                    .review_client
                    .submit_review(&stranger, order.id.clone(), 3, "Fine".into())
                    .await,
                Err(ReviewError::Forbidden(_))
            ));
        }
        assert!(matches!(
            market
                .review_client
                .submit_review(&customer(), OrderId::from("order_404"), 3, "Fine".into())
                .await,
            Err(ReviewError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_invalid_rating_or_comment() {
        let (market, clock, meal) = seeded_market(profile(None, None), dec!(12)).await;
        let order = order_at(&market, &clock, meal.id, OrderStatus::Completed).await;
        let reviews = &market.review_client;

        for (rating, comment) in [(0, "ok".to_string()), (6, "ok".to_string()), (3, "   ".to_string()), (3, "x".repeat(501))] {
            assert!(matches!(
                reviews.submit_review(&customer(), order.id.clone(), rating, comment).await,
                Err(ReviewError::ValidationError(_))
            ));
        }
        // nothing was stored, so a valid review still goes through
        assert!(reviews.submit_review(&customer(), order.id, 3, "x".repeat(500)).await.is_ok());
    }

    #[tokio::test]
    async fn test_reviews_for_cook_newest_first() {
        let (market, clock, meal) = seeded_market(profile(None, None), dec!(12)).await;
        let first = order_at(&market, &clock, meal.id.clone(), OrderStatus::Completed).await;
        let second = order_at(&market, &clock, meal.id.clone(), OrderStatus::Completed).await;

        market.review_client.submit_review(&customer(), first.id, 4, "Good".into()).await.unwrap();
        clock.advance(Duration::hours(1));
        market.review_client.submit_review(&customer(), second.id, 5, "Better".into()).await.unwrap();

        let listed = market.review_client.reviews_for_cook(UserId::from("bob")).await.unwrap();
        let ratings: Vec<u8> = listed.iter().map(|review| review.rating).collect();
        assert_eq!(ratings, vec![5, 4]);
        assert!(market.review_client.reviews_for_cook(UserId::from("carol")).await.unwrap().is_empty());
    }
}
