//! Browse flow upstream of ordering: distance annotation, radius filter and
//! nearby-first ordering over meals and cooks.

use crate::domain::{CookProfile, CuisineType, Meal};
use crate::geo::{compare_nearest, distance_from, format_distance, within_radius, Coordinates};

/// What the caller is looking for.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrowseFilter {
    /// Caller location; without it nothing gets a distance.
    pub origin: Option<Coordinates>,
    /// Zero means any distance.
    pub radius_km: f64,
    pub cuisine: Option<CuisineType>,
    pub nearby_first: bool,
}

/// A discoverable item with its distance from the caller, when computable.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<T> {
    pub item: T,
    pub distance_km: Option<f64>,
}

impl<T> Listing<T> {
    pub fn distance_label(&self) -> Option<String> {
        self.distance_km.map(format_distance)
    }
}

fn select<T>(
    items: Vec<T>,
    filter: &BrowseFilter,
    locate: impl Fn(&T) -> Option<Coordinates>,
    keep: impl Fn(&T) -> bool,
) -> Vec<Listing<T>> {
    let mut listings: Vec<Listing<T>> = items
        .into_iter()
        .filter(|item| keep(item))
        .map(|item| {
            let distance_km = distance_from(filter.origin, locate(&item));
            Listing { item, distance_km }
        })
        .filter(|listing| within_radius(listing.distance_km, filter.radius_km))
        .collect();
    if filter.nearby_first {
        listings.sort_by(|a, b| compare_nearest(a.distance_km, b.distance_km));
    }
    listings
}

/// Available meals matching the filter.
pub fn browse_meals(meals: Vec<Meal>, filter: &BrowseFilter) -> Vec<Listing<Meal>> {
    select(
        meals,
        filter,
        |meal| meal.location,
        |meal| meal.available && filter.cuisine.map_or(true, |c| meal.cuisine == c),
    )
}

/// Cooks whose specialties match the filter.
pub fn browse_cooks(profiles: Vec<CookProfile>, filter: &BrowseFilter) -> Vec<Listing<CookProfile>> {
    select(
        profiles,
        filter,
        |profile| profile.location,
        |profile| filter.cuisine.map_or(true, |c| profile.specialties.contains(&c)),
    )
}
