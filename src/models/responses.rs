use serde::{Deserialize, Serialize};

use crate::core::onboarding::OnboardingState;
use crate::models::domain::GymMatch;
use crate::models::facility::Facility;

/// Response for the gym search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchGymsResponse {
    pub gyms: Vec<GymMatch>,
    pub total_results: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub gyms_loaded: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Entry of the facility vocabulary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacilityInfo {
    pub tag: Facility,
    pub label: String,
    pub icon: String,
}

impl From<Facility> for FacilityInfo {
    fn from(facility: Facility) -> Self {
        Self {
            tag: facility,
            label: facility.label().to_string(),
            icon: facility.icon().to_string(),
        }
    }
}

/// Onboarding state plus how far along the wizard it is
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingStateResponse {
    pub state: OnboardingState,
    pub completed_steps: usize,
    pub total_steps: usize,
}

impl From<OnboardingState> for OnboardingStateResponse {
    fn from(state: OnboardingState) -> Self {
        let (completed_steps, total_steps) = state.progress();
        Self {
            state,
            completed_steps,
            total_steps,
        }
    }
}
