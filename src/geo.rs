//! Great-circle distance and the proximity helpers built on it.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Haversine distance in kilometres.
pub fn distance_km(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos() * b.latitude.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Distance from `origin`, when both ends are known.
pub fn distance_from(origin: Option<Coordinates>, target: Option<Coordinates>) -> Option<f64> {
    Some(distance_km(origin?, target?))
}

/// A radius of zero (or less) means "any distance". Candidates without a
/// distance are kept only when the radius is unbounded.
pub fn within_radius(distance: Option<f64>, radius_km: f64) -> bool {
    if radius_km <= 0.0 {
        return true;
    }
    distance.map_or(false, |d| d <= radius_km)
}

/// Orders by ascending distance; unknown distances go last. Used with a
/// stable sort so ties keep their relative order.
pub fn compare_nearest(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Human-readable distance: metres below one kilometre, one decimal above.
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("{} m", (km * 1000.0).round() as u64)
    } else {
        format!("{:.1} km", km)
    }
}
