use thiserror::Error;

use crate::core::distance::{validate_coordinates, GeoError};
use crate::models::{Country, Facility, GymFilters, GymRecord, PriceRange};

/// Errors for filter configurations that cannot be applied
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    #[error("maxDistance must be a non-negative number of kilometers, got {0}")]
    NegativeMaxDistance(f64),

    #[error("minRating must be between 0 and 5, got {0}")]
    MinRatingOutOfRange(f64),

    #[error("Invalid user location: {0}")]
    InvalidUserLocation(#[from] GeoError),

    #[error("Gym {gym_id} has an invalid location: {source}")]
    InvalidGymLocation { gym_id: String, source: GeoError },
}

/// Reject filter values that would silently produce a wrong result set
pub fn validate_filters(filters: &GymFilters) -> Result<(), FilterError> {
    if let Some(max_distance) = filters.max_distance {
        if !(max_distance >= 0.0 && max_distance.is_finite()) {
            return Err(FilterError::NegativeMaxDistance(max_distance));
        }
    }

    if let Some(min_rating) = filters.min_rating {
        if !(0.0..=5.0).contains(&min_rating) {
            return Err(FilterError::MinRatingOutOfRange(min_rating));
        }
    }

    if let Some(location) = &filters.user_location {
        validate_coordinates(location)?;
    }

    Ok(())
}

/// Exact country match; `None` matches everything
#[inline]
pub fn matches_country(gym: &GymRecord, country: Option<Country>) -> bool {
    country.map_or(true, |country| gym.location.country == country)
}

/// Exact, case-sensitive city match; `None` or an empty string matches everything
#[inline]
pub fn matches_city(gym: &GymRecord, city: Option<&str>) -> bool {
    match city {
        Some(city) if !city.is_empty() => gym.location.city == city,
        _ => true,
    }
}

/// Case-insensitive substring match against the gym name
///
/// The query is trimmed first; a blank query matches everything.
#[inline]
pub fn matches_search_query(gym: &GymRecord, query: Option<&str>) -> bool {
    let query = match query.map(str::trim) {
        Some(query) if !query.is_empty() => query,
        _ => return true,
    };

    gym.name.to_lowercase().contains(&query.to_lowercase())
}

/// Inclusive upper bound on distance
///
/// Without a computed distance (no user location) this never rejects.
#[inline]
pub fn within_max_distance(distance_km: Option<f64>, max_distance: Option<f64>) -> bool {
    match (distance_km, max_distance) {
        (Some(distance), Some(max)) => distance <= max,
        _ => true,
    }
}

/// Gym must offer every requested facility
#[inline]
pub fn has_all_facilities(gym: &GymRecord, required: &[Facility]) -> bool {
    required.iter().all(|facility| gym.has_facility(*facility))
}

/// Gym's tier must be one of the requested tiers; an empty list matches everything
#[inline]
pub fn matches_price_range(gym: &GymRecord, accepted: &[PriceRange]) -> bool {
    accepted.is_empty() || accepted.contains(&gym.price_range)
}

/// Inclusive rating lower bound; `None` and `0` mean unset
#[inline]
pub fn meets_min_rating(gym: &GymRecord, min_rating: Option<f64>) -> bool {
    match min_rating {
        Some(min) if min > 0.0 => gym.rating >= min,
        _ => true,
    }
}
