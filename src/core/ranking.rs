use std::cmp::Ordering;

use crate::models::GymMatch;

/// Order two matches nearest first
///
/// Ties on distance go to the higher rating, then to the alphabetically
/// earlier name. Matches without a distance sort after those with one.
pub fn compare_by_proximity(a: &GymMatch, b: &GymMatch) -> Ordering {
    compare_distance(a.distance_km, b.distance_km)
        .then_with(|| b.gym.rating.total_cmp(&a.gym.rating))
        .then_with(|| a.gym.name.cmp(&b.gym.name))
}

#[inline]
fn compare_distance(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sort matches in place, nearest first (stable)
pub fn rank_by_proximity(matches: &mut [GymMatch]) {
    matches.sort_by(compare_by_proximity);
}
