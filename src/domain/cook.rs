use super::{CuisineType, UserId};
use crate::geo::Coordinates;
use chrono::{DateTime, Utc, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// One per cook identity; keyed by the cook's uid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CookProfile {
    pub cook_id: UserId,
    pub bio: String,
    pub specialties: BTreeSet<CuisineType>,
    pub delivery_available: bool,
    pub delivery_radius_km: Option<f64>,
    pub delivery_fee: Option<Decimal>,
    pub minimum_order_amount: Option<Decimal>,
    pub available_days: HashSet<Weekday>,
    pub location: Option<Coordinates>,
    /// Maintained by the review subsystem only.
    pub average_rating: f64,
    pub total_reviews: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Owner-editable profile fields, used for both first creation and later edits.
#[derive(Debug, Clone, PartialEq)]
pub struct CookProfileUpdate {
    pub bio: String,
    pub specialties: BTreeSet<CuisineType>,
    pub delivery_available: bool,
    pub delivery_radius_km: Option<f64>,
    pub delivery_fee: Option<Decimal>,
    pub minimum_order_amount: Option<Decimal>,
    pub available_days: HashSet<Weekday>,
    pub location: Option<Coordinates>,
}

/// The commercial terms of a cook that order placement depends on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CookPolicy {
    pub delivery_available: bool,
    pub delivery_fee: Option<Decimal>,
    pub minimum_order_amount: Option<Decimal>,
}

impl CookProfile {
    pub fn policy(&self) -> CookPolicy {
        CookPolicy {
            delivery_available: self.delivery_available,
            delivery_fee: self.delivery_fee,
            minimum_order_amount: self.minimum_order_amount,
        }
    }
}
