// Model exports
pub mod domain;
pub mod facility;
pub mod profile;
pub mod requests;
pub mod responses;

pub use domain::{Coordinates, Country, GymFilters, GymLocation, GymMatch, GymRecord, PriceRange};
pub use facility::{Facility, ParseFacilityError};
pub use profile::{ActivityLevel, CompletedProfile, ExperienceLevel, FitnessGoal, Gender, ProfileDraft};
pub use requests::{AdvanceOnboardingRequest, OnboardingStateRequest, SearchGymsRequest};
pub use responses::{ErrorResponse, FacilityInfo, HealthResponse, OnboardingStateResponse, SearchGymsResponse};
