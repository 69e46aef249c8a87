use super::{MealAction, MealError, MealUpdate};
use crate::actor_framework::Entity;
use crate::domain::{Meal, MealCreate, MealDetails, MealId, Principal, UserId};
use rust_decimal::Decimal;

/// Checks the cook-editable fields of a meal.
pub fn validate_details(details: &MealDetails) -> Result<(), MealError> {
    if details.name.trim().is_empty() {
        return Err(MealError::ValidationError("name is required".into()));
    }
    if details.price <= Decimal::ZERO {
        return Err(MealError::ValidationError("price must be positive".into()));
    }
    if !details.ingredients.iter().any(|i| !i.trim().is_empty()) {
        return Err(MealError::ValidationError("at least one ingredient is required".into()));
    }
    if details.preparation_minutes == 0 {
        return Err(MealError::ValidationError("preparation time must be positive".into()));
    }
    Ok(())
}

fn ensure_owner(by: &Principal, cook_id: &UserId) -> Result<(), MealError> {
    if by.is_cook(cook_id) {
        Ok(())
    } else {
        Err(MealError::Forbidden(format!("{by} does not own this meal")))
    }
}

fn clean_list(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

impl Entity for Meal {
    type Id = MealId;
    type CreateParams = MealCreate;
    type Patch = MealUpdate;
    type Action = MealAction;
    type ActionResult = Meal;
    type Error = MealError;

    fn id(&self) -> &MealId {
        &self.id
    }

    /// Creates an available meal from validated details.
    fn from_create_params(id: MealId, params: MealCreate) -> Result<Self, MealError> {
        validate_details(&params.details)?;
        let details = params.details;
        Ok(Self {
            id,
            cook_id: params.cook_id,
            name: details.name.trim().to_string(),
            description: details.description,
            price: details.price,
            ingredients: clean_list(details.ingredients),
            allergens: clean_list(details.allergens),
            cuisine: details.cuisine,
            preparation_minutes: details.preparation_minutes,
            available: true,
            schedule: details.schedule,
            image_url: details.image_url,
            location: params.location,
            created_at: params.created_at,
            updated_at: params.created_at,
        })
    }

    /// Replaces the editable fields. Ownership, availability and location are kept.
    fn on_update(&mut self, update: MealUpdate) -> Result<(), MealError> {
        ensure_owner(&update.by, &self.cook_id)?;
        validate_details(&update.details)?;
        let details = update.details;
        self.name = details.name.trim().to_string();
        self.description = details.description;
        self.price = details.price;
        self.ingredients = clean_list(details.ingredients);
        self.allergens = clean_list(details.allergens);
        self.cuisine = details.cuisine;
        self.preparation_minutes = details.preparation_minutes;
        self.schedule = details.schedule;
        self.image_url = details.image_url;
        self.updated_at = update.at;
        Ok(())
    }

    fn handle_action(&mut self, action: MealAction) -> Result<Meal, MealError> {
        match action {
            MealAction::SetAvailable { by, available, at } => {
                ensure_owner(&by, &self.cook_id)?;
                self.available = available;
                self.updated_at = at;
                Ok(self.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CuisineType, WeeklySchedule};
    use chrono::{Duration, Utc};
    use rust_decimal_macros::dec;

    fn details() -> MealDetails {
        MealDetails {
            name: " Green curry ".into(),
            description: "Coconut and basil".into(),
            price: dec!(11.50),
            ingredients: vec!["coconut milk".into(), "".into(), "basil".into()],
            allergens: vec![],
            cuisine: CuisineType::Thai,
            preparation_minutes: 25,
            schedule: WeeklySchedule::every_day(),
            image_url: None,
        }
    }

    fn meal() -> Meal {
        Meal::from_create_params(
            MealId::from("meal_1"),
            MealCreate {
                cook_id: UserId::from("bob"),
                details: details(),
                location: None,
                created_at: Utc::now(),
            },
        )
        .unwrap()
    }

    #[test]
    fn test_create_trims_and_starts_available() {
        let meal = meal();
        assert_eq!(meal.name, "Green curry");
        assert_eq!(meal.ingredients, ["coconut milk", "basil"]);
        assert!(meal.available);
    }

    #[test]
    fn test_validation_failures() {
        let cases: Vec<fn(&mut MealDetails)> = vec![
            |d| d.name = "  ".into(),
            |d| d.price = Decimal::ZERO,
            |d| d.ingredients = vec![" ".into()],
            |d| d.preparation_minutes = 0,
        ];
        for break_it in cases {
            let mut d = details();
            break_it(&mut d);
            assert!(matches!(validate_details(&d), Err(MealError::ValidationError(_))));
        }
    }

    #[test]
    fn test_only_owner_can_update() {
        let mut meal = meal();
        let mut changed = details();
        changed.price = dec!(13);
        let at = meal.created_at + Duration::minutes(3);

        let err = meal
            .on_update(MealUpdate {
                by: Principal::cook("carol"),
                details: changed.clone(),
                at,
            })
            .unwrap_err();
        assert!(matches!(err, MealError::Forbidden(_)));

        meal.on_update(MealUpdate {
            by: Principal::cook("bob"),
            details: changed,
            at,
        })
        .unwrap();
        assert_eq!(meal.price, dec!(13));
        assert_eq!(meal.updated_at, at);
    }

    #[test]
    fn test_availability_toggle_is_owner_only() {
        let mut meal = meal();
        let at = Utc::now();
        assert!(meal
            .handle_action(MealAction::SetAvailable {
                by: Principal::customer("bob"),
                available: false,
                at,
            })
            .is_err());
        let updated = meal
            .handle_action(MealAction::SetAvailable {
                by: Principal::cook("bob"),
                available: false,
                at,
            })
            .unwrap();
        assert!(!updated.available);
    }
}
