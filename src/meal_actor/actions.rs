use crate::domain::{MealDetails, Principal};
use chrono::{DateTime, Utc};

/// Full edit of a meal by its owner. Re-validated like a creation.
#[derive(Debug, Clone)]
pub struct MealUpdate {
    pub by: Principal,
    pub details: MealDetails,
    pub at: DateTime<Utc>,
}

/// Custom actions for Meal entities.
#[derive(Debug, Clone)]
pub enum MealAction {
    /// Restricted field update: flips `available` without re-validating the rest.
    SetAvailable {
        by: Principal,
        available: bool,
        at: DateTime<Utc>,
    },
}
