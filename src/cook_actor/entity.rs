use super::CookError;
use crate::actor_framework::Entity;
use crate::domain::{CookProfile, CookProfileUpdate, Principal, UserId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Upsert params: the edit plus who is making it, and when.
#[derive(Debug, Clone)]
pub struct CookProfileUpsert {
    pub by: Principal,
    pub update: CookProfileUpdate,
    pub at: DateTime<Utc>,
}

fn ensure_owner(by: &Principal, cook_id: &UserId) -> Result<(), CookError> {
    if by.is_cook(cook_id) {
        Ok(())
    } else {
        Err(CookError::Forbidden(format!("{by} cannot edit the profile of {cook_id}")))
    }
}

fn validate(update: &CookProfileUpdate) -> Result<(), CookError> {
    if update.specialties.is_empty() {
        return Err(CookError::ValidationError("at least one specialty is required".into()));
    }
    if update.delivery_fee.is_some_and(|fee| fee < Decimal::ZERO) {
        return Err(CookError::ValidationError("delivery fee cannot be negative".into()));
    }
    if update.minimum_order_amount.is_some_and(|min| min < Decimal::ZERO) {
        return Err(CookError::ValidationError("minimum order amount cannot be negative".into()));
    }
    if update.delivery_radius_km.is_some_and(|km| km <= 0.0) {
        return Err(CookError::ValidationError("delivery radius must be positive".into()));
    }
    Ok(())
}

impl CookProfile {
    fn apply(&mut self, update: CookProfileUpdate, at: DateTime<Utc>) {
        self.bio = update.bio;
        self.specialties = update.specialties;
        self.delivery_available = update.delivery_available;
        self.delivery_radius_km = update.delivery_radius_km;
        self.delivery_fee = update.delivery_fee;
        self.minimum_order_amount = update.minimum_order_amount;
        self.available_days = update.available_days;
        self.location = update.location;
        self.updated_at = at;
    }
}

impl Entity for CookProfile {
    type Id = UserId;
    type CreateParams = CookProfileUpsert;
    type Patch = ();
    type Action = ();
    type ActionResult = ();
    type Error = CookError;

    fn id(&self) -> &UserId {
        &self.cook_id
    }

    /// First save of a profile. Ratings start empty.
    fn from_create_params(cook_id: UserId, params: CookProfileUpsert) -> Result<Self, CookError> {
        ensure_owner(&params.by, &cook_id)?;
        validate(&params.update)?;
        let at = params.at;
        let mut profile = Self {
            cook_id,
            bio: String::new(),
            specialties: Default::default(),
            delivery_available: false,
            delivery_radius_km: None,
            delivery_fee: None,
            minimum_order_amount: None,
            available_days: Default::default(),
            location: None,
            average_rating: 0.0,
            total_reviews: 0,
            created_at: at,
            updated_at: at,
        };
        profile.apply(params.update, at);
        Ok(profile)
    }

    /// Later saves patch the owner's fields; `average_rating` and
    /// `total_reviews` belong to the review subsystem and are left alone.
    fn on_upsert(&mut self, params: CookProfileUpsert) -> Result<(), CookError> {
        ensure_owner(&params.by, &self.cook_id)?;
        validate(&params.update)?;
        self.apply(params.update, params.at);
        Ok(())
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), CookError> {
        Err(CookError::Forbidden("profiles are saved whole through upsert".into()))
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), CookError> {
        Ok(())
    }
}
