use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::onboarding::{OnboardingEvent, OnboardingState};
use crate::models::domain::{null_as_empty, Coordinates, Country, GymFilters, PriceRange};
use crate::models::facility::Facility;

/// Request to search the gym catalog
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SearchGymsRequest {
    #[serde(default)]
    pub country: Option<Country>,
    #[validate(length(max = 100))]
    #[serde(default)]
    pub city: Option<String>,
    #[validate(length(max = 100))]
    #[serde(default)]
    pub search_query: Option<String>,
    #[serde(default)]
    pub max_distance: Option<f64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub facilities: Vec<Facility>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub price_range: Vec<PriceRange>,
    #[serde(default)]
    pub min_rating: Option<f64>,
    #[serde(default)]
    pub user_location: Option<Coordinates>,
    /// Caps how many matches are returned; the total count is unaffected
    #[validate(range(min = 1, max = 500))]
    #[serde(default)]
    pub limit: Option<u16>,
}

impl SearchGymsRequest {
    pub fn to_filters(&self) -> GymFilters {
        GymFilters {
            country: self.country,
            city: self.city.clone(),
            search_query: self.search_query.clone(),
            max_distance: self.max_distance,
            facilities: self.facilities.clone(),
            price_range: self.price_range.clone(),
            min_rating: self.min_rating,
            user_location: self.user_location,
        }
    }
}

/// Request carrying the current onboarding state and the answer for its step
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AdvanceOnboardingRequest {
    #[validate(nested)]
    pub state: OnboardingState,
    pub event: OnboardingEvent,
}

/// Request carrying only the current onboarding state
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OnboardingStateRequest {
    #[validate(nested)]
    pub state: OnboardingState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_request_deserializes_camel_case() {
        let json = r#"{
            "country": "Sri Lanka",
            "searchQuery": "power",
            "maxDistance": 5,
            "facilities": ["wifi", "24hours"],
            "priceRange": ["$", "$$"],
            "userLocation": { "latitude": 6.9271, "longitude": 79.8612 },
            "limit": 10
        }"#;

        let request: SearchGymsRequest = serde_json::from_str(json).unwrap();
        let filters = request.to_filters();

        assert_eq!(filters.country, Some(Country::SriLanka));
        assert_eq!(filters.search_query.as_deref(), Some("power"));
        assert_eq!(filters.max_distance, Some(5.0));
        assert_eq!(filters.facilities, vec![Facility::Wifi, Facility::Open24Hours]);
        assert_eq!(filters.price_range, vec![PriceRange::Budget, PriceRange::Moderate]);
        assert_eq!(request.limit, Some(10));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_empty_body_is_identity_search() {
        let request: SearchGymsRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.to_filters(), GymFilters::default());
    }

    #[test]
    fn test_limit_out_of_range_fails_validation() {
        let request = SearchGymsRequest {
            limit: Some(0),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_onboarding_draft_bounds_validated() {
        let json = r#"{
            "state": { "step": "weight", "profile": { "name": "Ayesha", "age": 27, "heightCm": 40.0 } },
            "event": { "type": "weight_entered", "value": 58.0 }
        }"#;
        let request: AdvanceOnboardingRequest = serde_json::from_str(json).unwrap();
        assert!(request.validate().is_err());

        let mut request = request;
        request.state.profile.height_cm = Some(162.0);
        assert!(request.validate().is_ok());

        request.state.profile.name = Some("x".repeat(51));
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_null_lists_mean_unset() {
        let json = r#"{ "facilities": null, "priceRange": null }"#;

        let request: SearchGymsRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.to_filters(), GymFilters::default());

        let filters: GymFilters = serde_json::from_str(json).unwrap();
        assert_eq!(filters, GymFilters::default());
    }

    #[test]
    fn test_unknown_facility_rejected() {
        let json = r#"{ "facilities": ["wifi", "helipad"] }"#;
        assert!(serde_json::from_str::<SearchGymsRequest>(json).is_err());
    }
}
