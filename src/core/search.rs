use crate::core::{
    distance::{compute_distance_km, format_distance},
    filters::{
        has_all_facilities, matches_city, matches_country, matches_price_range,
        matches_search_query, meets_min_rating, validate_filters, within_max_distance,
        FilterError,
    },
    ranking::rank_by_proximity,
};
use crate::models::{Coordinates, GymFilters, GymMatch, GymRecord};

/// Filter and rank gyms
///
/// # Pipeline Stages
/// 1. Country, city and name filters
/// 2. Distance annotation (only with a user location)
/// 3. Distance bound (only with a user location)
/// 4. Facility, price and rating filters
/// 5. Nearest-first ordering (only with a user location)
///
/// Without a user location the input order is preserved. The input slice
/// is never modified; every returned match owns a copy of its record.
///
/// # Errors
/// Fails before looking at any record if the filters are malformed, and
/// fails on the first gym that survives stage 1 with out-of-range
/// coordinates when a distance has to be computed for it. Gyms already
/// excluded by country, city or name are never measured.
pub fn filter_gyms(
    records: &[GymRecord],
    filters: &GymFilters,
) -> Result<Vec<GymMatch>, FilterError> {
    validate_filters(filters)?;

    let origin = filters.user_location.as_ref();

    let candidates = records
        .iter()
        // Stage 1: location and name
        .filter(|gym| matches_country(gym, filters.country))
        .filter(|gym| matches_city(gym, filters.city.as_deref()))
        .filter(|gym| matches_search_query(gym, filters.search_query.as_deref()))
        // Stage 2: distance annotation on working copies
        .map(|gym| annotate(gym, origin))
        .collect::<Result<Vec<_>, _>>()?;

    let mut matches: Vec<GymMatch> = candidates
        .into_iter()
        // Stage 3: distance bound
        .filter(|m| within_max_distance(m.distance_km, filters.max_distance))
        // Stage 4: amenities, price and rating
        .filter(|m| has_all_facilities(&m.gym, &filters.facilities))
        .filter(|m| matches_price_range(&m.gym, &filters.price_range))
        .filter(|m| meets_min_rating(&m.gym, filters.min_rating))
        .collect();

    // Stage 5: ordering
    if origin.is_some() {
        rank_by_proximity(&mut matches);
    }

    tracing::debug!(
        "Gym search kept {} of {} records (located: {})",
        matches.len(),
        records.len(),
        origin.is_some()
    );

    Ok(matches)
}

fn annotate(gym: &GymRecord, origin: Option<&Coordinates>) -> Result<GymMatch, FilterError> {
    let distance_km = match origin {
        Some(origin) => Some(
            compute_distance_km(origin, &gym.location.coordinates()).map_err(|source| {
                FilterError::InvalidGymLocation {
                    gym_id: gym.id.clone(),
                    source,
                }
            })?,
        ),
        None => None,
    };

    Ok(GymMatch {
        gym: gym.clone(),
        distance: distance_km.map(format_distance),
        distance_km,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Country, Facility, GymLocation, PriceRange};
    use std::collections::BTreeSet;

    fn create_gym(id: &str, country: Country, rating: f64, lat: f64, lon: f64) -> GymRecord {
        GymRecord {
            id: id.to_string(),
            name: format!("Gym {}", id),
            location: GymLocation {
                address: format!("{} Galle Road", id),
                city: "Colombo".to_string(),
                country,
                latitude: lat,
                longitude: lon,
            },
            rating,
            review_count: 10,
            price_range: PriceRange::Moderate,
            price_per_month: 40.0,
            facilities: BTreeSet::from([Facility::Wifi]),
            images: vec![],
            image: None,
            opening_hours: String::new(),
            description: String::new(),
            phone_number: String::new(),
            website: String::new(),
        }
    }

    fn ids(matches: &[GymMatch]) -> Vec<&str> {
        matches.iter().map(|m| m.gym.id.as_str()).collect()
    }

    #[test]
    fn test_empty_records_yield_empty_result() {
        let result = filter_gyms(&[], &GymFilters::default()).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_identity_filter_preserves_order() {
        let records = vec![
            create_gym("c", Country::SriLanka, 3.0, 6.9, 79.8),
            create_gym("a", Country::Dubai, 5.0, 25.2, 55.3),
            create_gym("b", Country::Australia, 4.0, -33.8, 151.2),
        ];

        let result = filter_gyms(&records, &GymFilters::default()).unwrap();

        assert_eq!(ids(&result), vec!["c", "a", "b"]);
        assert!(result.iter().all(|m| m.distance_km.is_none() && m.distance.is_none()));
    }

    #[test]
    fn test_location_annotates_and_sorts() {
        let records = vec![
            create_gym("far", Country::SriLanka, 4.0, 7.0, 79.8612),
            create_gym("near", Country::SriLanka, 4.0, 6.93, 79.8612),
        ];
        let filters = GymFilters {
            user_location: Some(Coordinates::new(6.9271, 79.8612)),
            ..Default::default()
        };

        let result = filter_gyms(&records, &filters).unwrap();

        assert_eq!(ids(&result), vec!["near", "far"]);
        assert_eq!(result[0].distance.as_deref(), Some("322 m"));
        assert_eq!(result[1].distance.as_deref(), Some("8.1 km"));
    }

    #[test]
    fn test_invalid_filters_fail_before_scanning() {
        let records = vec![create_gym("a", Country::SriLanka, 4.0, 6.9, 79.8)];
        let filters = GymFilters {
            max_distance: Some(-3.0),
            ..Default::default()
        };

        assert_eq!(
            filter_gyms(&records, &filters),
            Err(FilterError::NegativeMaxDistance(-3.0))
        );
    }

    #[test]
    fn test_gym_with_bad_coordinates_reported() {
        let records = vec![create_gym("broken", Country::Dubai, 4.0, 95.0, 55.0)];
        let filters = GymFilters {
            user_location: Some(Coordinates::new(25.2, 55.3)),
            ..Default::default()
        };

        let err = filter_gyms(&records, &filters).unwrap_err();
        assert!(matches!(err, FilterError::InvalidGymLocation { ref gym_id, .. } if gym_id == "broken"));
    }

    #[test]
    fn test_bad_coordinates_outside_country_filter_ignored() {
        let records = vec![
            create_gym("broken", Country::Dubai, 4.0, 95.0, 55.0),
            create_gym("ok", Country::SriLanka, 4.0, 6.93, 79.8612),
        ];
        let filters = GymFilters {
            country: Some(Country::SriLanka),
            user_location: Some(Coordinates::new(6.9271, 79.8612)),
            ..Default::default()
        };

        let result = filter_gyms(&records, &filters).unwrap();

        assert_eq!(ids(&result), vec!["ok"]);
        assert!(result[0].distance_km.is_some());
    }

    #[test]
    fn test_input_not_mutated() {
        let records = vec![
            create_gym("b", Country::SriLanka, 4.0, 6.95, 79.86),
            create_gym("a", Country::SriLanka, 4.0, 6.92, 79.86),
        ];
        let snapshot = records.clone();
        let filters = GymFilters {
            user_location: Some(Coordinates::new(6.9271, 79.8612)),
            min_rating: Some(3.5),
            ..Default::default()
        };

        let _ = filter_gyms(&records, &filters).unwrap();

        assert_eq!(records, snapshot);
    }
}
