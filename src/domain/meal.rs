use super::{MealId, UserId};
use crate::geo::Coordinates;
use chrono::{DateTime, Datelike, Utc, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fixed catalog of cuisines a meal or cook can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CuisineType {
    American,
    Caribbean,
    Chinese,
    French,
    Greek,
    Indian,
    Italian,
    Japanese,
    Korean,
    Mediterranean,
    Mexican,
    MiddleEastern,
    Thai,
    Vietnamese,
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAvailability {
    pub available: bool,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

/// Per-weekday availability, indexed Monday first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    days: [DayAvailability; 7],
}

impl WeeklySchedule {
    pub fn every_day() -> Self {
        let mut schedule = Self::default();
        for day in schedule.days.iter_mut() {
            day.available = true;
        }
        schedule
    }

    pub fn set(&mut self, weekday: Weekday, availability: DayAvailability) {
        self.days[weekday.num_days_from_monday() as usize] = availability;
    }

    pub fn day(&self, weekday: Weekday) -> &DayAvailability {
        &self.days[weekday.num_days_from_monday() as usize]
    }

    pub fn is_available_on(&self, at: DateTime<Utc>) -> bool {
        self.day(at.weekday()).available
    }
}

/// A dish published by exactly one cook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: MealId,
    pub cook_id: UserId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub ingredients: Vec<String>,
    pub allergens: Vec<String>,
    pub cuisine: CuisineType,
    pub preparation_minutes: u32,
    pub available: bool,
    pub schedule: WeeklySchedule,
    pub image_url: Option<String>,
    /// Copied from the owning cook's profile when the meal is created.
    pub location: Option<Coordinates>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Cook-editable fields of a meal. Validated in full on create and on update.
#[derive(Debug, Clone, PartialEq)]
pub struct MealDetails {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub ingredients: Vec<String>,
    pub allergens: Vec<String>,
    pub cuisine: CuisineType,
    pub preparation_minutes: u32,
    pub schedule: WeeklySchedule,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct MealCreate {
    pub cook_id: UserId,
    pub details: MealDetails,
    pub location: Option<Coordinates>,
    pub created_at: DateTime<Utc>,
}
