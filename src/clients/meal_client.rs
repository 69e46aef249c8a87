use super::{Clock, CookClient};
use crate::actor_framework::{Query, ResourceClient};
use crate::discovery::{browse_meals, BrowseFilter, Listing};
use crate::domain::{Meal, MealCreate, MealDetails, MealId, Principal, Role, UserId};
use crate::meal_actor::{MealAction, MealError, MealUpdate};
use tracing::{debug, error, info, instrument};

/// Client for interacting with the Meal actor.
#[derive(Clone)]
pub struct MealClient {
    inner: ResourceClient<Meal>,
    cook_client: CookClient,
    clock: Clock,
}

impl_client_methods!(MealClient, Meal, MealId, MealError, meal);

impl MealClient {
    pub fn new(inner: ResourceClient<Meal>, cook_client: CookClient, clock: Clock) -> Self {
        Self {
            inner,
            cook_client,
            clock,
        }
    }

    /// Publishes a meal for the calling cook, copying the cook's location.
    #[instrument(skip(self, by, details), fields(by = %by, meal_name = %details.name))]
    pub async fn create_meal(&self, by: &Principal, details: MealDetails) -> Result<Meal, MealError> {
        if by.role != Role::Cook {
            error!("Only cooks can publish meals");
            return Err(MealError::Forbidden(format!("{by} is not a cook")));
        }

        let location = self
            .cook_client
            .get_profile(by.uid.clone())
            .await?
            .and_then(|profile| profile.location);

        let params = MealCreate {
            cook_id: by.uid.clone(),
            details,
            location,
            created_at: (self.clock)(),
        };
        let id = self.inner.create(params).await?;
        info!(meal_id = %id, "Meal created successfully");
        self.require_meal(id).await
    }

    #[instrument(skip(self, by, details), fields(by = %by))]
    pub async fn update_meal(&self, by: &Principal, id: MealId, details: MealDetails) -> Result<Meal, MealError> {
        debug!("Sending request");
        let update = MealUpdate {
            by: by.clone(),
            details,
            at: (self.clock)(),
        };
        self.inner.update(id, update).await
    }

    #[instrument(skip(self, by), fields(by = %by))]
    pub async fn set_available(&self, by: &Principal, id: MealId, available: bool) -> Result<Meal, MealError> {
        debug!("Sending request");
        let action = MealAction::SetAvailable {
            by: by.clone(),
            available,
            at: (self.clock)(),
        };
        self.inner.perform_action(id, action).await
    }

    #[instrument(skip(self, by), fields(by = %by))]
    pub async fn delete_meal(&self, by: &Principal, id: MealId) -> Result<(), MealError> {
        let meal = self.require_meal(id.clone()).await?;
        if !by.is_cook(&meal.cook_id) {
            error!("Delete by non-owner rejected");
            return Err(MealError::Forbidden(format!("{by} does not own this meal")));
        }
        self.inner.delete(id).await?;
        info!("Meal deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn meals_by_cook(&self, cook_id: UserId) -> Result<Vec<Meal>, MealError> {
        debug!("Sending request");
        self.inner
            .query(Query::all().filter(move |meal: &Meal| meal.cook_id == cook_id))
            .await
    }

    #[instrument(skip(self))]
    pub async fn browse(&self, filter: BrowseFilter) -> Result<Vec<Listing<Meal>>, MealError> {
        debug!("Sending request");
        let meals = self
            .inner
            .query(Query::all().filter(|meal: &Meal| meal.available))
            .await?;
        let listings = browse_meals(meals, &filter);
        info!(count = listings.len(), "Meals browsed");
        Ok(listings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor_framework::ResourceActor;
    use crate::clients::system_clock;
    use crate::domain::{CookProfile, CookProfileUpdate, CuisineType, WeeklySchedule};
    use crate::geo::Coordinates;
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    fn spawn() -> (MealClient, CookClient) {
        let (cook_actor, cook_inner) = ResourceActor::<CookProfile>::keyed(10);
        tokio::spawn(cook_actor.run());
        let cooks = CookClient::new(cook_inner, system_clock());

        let counter = Arc::new(AtomicU64::new(1));
        let next_id = move || MealId::new(format!("meal_{}", counter.fetch_add(1, Ordering::SeqCst)));
        let (meal_actor, meal_inner) = ResourceActor::<Meal>::new(10, next_id);
        tokio::spawn(meal_actor.run());
        (MealClient::new(meal_inner, cooks.clone(), system_clock()), cooks)
    }

    fn details(name: &str) -> MealDetails {
        MealDetails {
            name: name.into(),
            description: String::new(),
            price: dec!(9),
            ingredients: vec!["beans".into()],
            allergens: vec!["soy".into()],
            cuisine: CuisineType::Mexican,
            preparation_minutes: 20,
            schedule: WeeklySchedule::every_day(),
            image_url: None,
        }
    }

    #[tokio::test]
    async fn test_create_copies_cook_location() {
        let (meals, cooks) = spawn();
        let bob = Principal::cook("bob");
        let home = Coordinates::new(19.43, -99.13);
        cooks
            .save_profile(
                &bob,
                CookProfileUpdate {
                    bio: String::new(),
                    specialties: [CuisineType::Mexican].into_iter().collect(),
                    delivery_available: false,
                    delivery_radius_km: None,
                    delivery_fee: None,
                    minimum_order_amount: None,
                    available_days: Default::default(),
                    location: Some(home),
                },
            )
            .await
            .unwrap();

        let meal = meals.create_meal(&bob, details("Burrito")).await.unwrap();
        assert_eq!(meal.id, MealId::from("meal_1"));
        assert_eq!(meal.location, Some(home));
    }

    #[tokio::test]
    async fn test_customers_cannot_publish() {
        let (meals, _) = spawn();
        let err = meals
            .create_meal(&Principal::customer("alice"), details("Burrito"))
            .await
            .unwrap_err();
        assert!(matches!(err, MealError::Forbidden(_)));
    }

    #[tokio::test]
    async fn test_non_owner_cannot_edit_toggle_or_delete() {
        let (meals, _) = spawn();
        let bob = Principal::cook("bob");
        let carol = Principal::cook("carol");
        let meal = meals.create_meal(&bob, details("Tamales")).await.unwrap();

        assert!(matches!(
            meals.update_meal(&carol, meal.id.clone(), details("Stolen")).await,
            Err(MealError::Forbidden(_))
        ));
        assert!(matches!(
            meals.set_available(&carol, meal.id.clone(), false).await,
            Err(MealError::Forbidden(_))
        ));
        assert!(matches!(
            meals.delete_meal(&carol, meal.id.clone()).await,
            Err(MealError::Forbidden(_))
        ));

        let unchanged = meals.require_meal(meal.id.clone()).await.unwrap();
        assert_eq!(unchanged.name, "Tamales");
        assert!(unchanged.available);

        meals.delete_meal(&bob, meal.id.clone()).await.unwrap();
        assert!(meals.get_meal(meal.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unavailable_meals_are_not_browsable() {
        let (meals, _) = spawn();
        let bob = Principal::cook("bob");
        let first = meals.create_meal(&bob, details("Pozole")).await.unwrap();
        meals.create_meal(&bob, details("Elote")).await.unwrap();
        meals.set_available(&bob, first.id, false).await.unwrap();

        let listed = meals.browse(BrowseFilter::default()).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].item.name, "Elote");
        assert_eq!(meals.meals_by_cook(UserId::from("bob")).await.unwrap().len(), 2);
    }
}
