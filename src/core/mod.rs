// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod onboarding;
pub mod ranking;
pub mod search;

pub use distance::{compute_distance_km, format_distance, haversine_distance, GeoError};
pub use filters::{validate_filters, FilterError};
pub use onboarding::{OnboardingError, OnboardingEvent, OnboardingState, OnboardingStep};
pub use ranking::{compare_by_proximity, rank_by_proximity};
pub use search::filter_gyms;
