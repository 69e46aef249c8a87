//! Shared fixtures for client and end-to-end tests.

use crate::app_system::{MarketConfig, MarketSystem};
use crate::clients::{Clock, PlaceOrder};
use crate::domain::{
    CookProfileUpdate, CuisineType, DeliveryDetails, Meal, MealDetails, MealId, Principal, WeeklySchedule,
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use std::sync::{Arc, Mutex};

/// A clock that only moves when told to.
#[derive(Clone)]
pub struct TestClock(Arc<Mutex<DateTime<Utc>>>);

impl TestClock {
    pub fn new() -> Self {
        Self(Arc::new(Mutex::new(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap())))
    }

    pub fn now(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }

    pub fn advance(&self, by: Duration) {
        *self.0.lock().unwrap() += by;
    }

    pub fn clock(&self) -> Clock {
        let inner = self.0.clone();
        Arc::new(move || *inner.lock().unwrap())
    }
}

pub fn cook() -> Principal {
    Principal::cook("bob")
}

pub fn customer() -> Principal {
    Principal::customer("alice")
}

pub fn profile(delivery_fee: Option<Decimal>, minimum_order_amount: Option<Decimal>) -> CookProfileUpdate {
    CookProfileUpdate {
        bio: "Weeknight Italian".into(),
        specialties: [CuisineType::Italian].into_iter().collect(),
        delivery_available: delivery_fee.is_some(),
        delivery_radius_km: None,
        delivery_fee,
        minimum_order_amount,
        available_days: Default::default(),
        location: None,
    }
}

pub fn meal_details(name: &str, price: Decimal) -> MealDetails {
    MealDetails {
        name: name.into(),
        description: "Family recipe".into(),
        price,
        ingredients: vec!["flour".into(), "eggs".into()],
        allergens: vec!["gluten".into()],
        cuisine: CuisineType::Italian,
        preparation_minutes: 45,
        schedule: WeeklySchedule::every_day(),
        image_url: Some("https://img.example/lasagna.jpg".into()),
    }
}

pub fn place(meal_id: MealId, quantity: u32, delivery: DeliveryDetails, clock: &TestClock) -> PlaceOrder {
    PlaceOrder {
        meal_id,
        quantity,
        delivery,
        requested_time: clock.now() + Duration::hours(2),
        special_instructions: None,
    }
}

/// A running market where `bob` has a profile and one meal on offer.
pub async fn seeded_market(profile: CookProfileUpdate, price: Decimal) -> (MarketSystem, TestClock, Meal) {
    let clock = TestClock::new();
    let system = MarketSystem::with_clock(&MarketConfig::default(), clock.clock());
    system.cook_client.save_profile(&cook(), profile).await.unwrap();
    let meal = system
        .meal_client
        .create_meal(&cook(), meal_details("Lasagna", price))
        .await
        .unwrap();
    (system, clock, meal)
}
