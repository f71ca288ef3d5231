use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

/// What the user wants to get out of training
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    LoseWeight,
    BuildMuscle,
    ImproveEndurance,
    StayHealthy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// Profile as it accumulates across the onboarding steps
///
/// The `validate` bounds match the per-step checks in `core::onboarding`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileDraft {
    #[validate(length(min = 1, max = 50))]
    pub name: Option<String>,
    pub gender: Option<Gender>,
    #[validate(range(min = 13, max = 100))]
    pub age: Option<u8>,
    #[validate(range(min = 100.0, max = 250.0))]
    pub height_cm: Option<f64>,
    #[validate(range(min = 30.0, max = 300.0))]
    pub weight_kg: Option<f64>,
    pub goal: Option<FitnessGoal>,
    pub activity_level: Option<ActivityLevel>,
    pub experience: Option<ExperienceLevel>,
    #[validate(range(min = 1, max = 7))]
    pub workout_days_per_week: Option<u8>,
}

/// Profile produced once every onboarding step has been answered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedProfile {
    pub profile_id: uuid::Uuid,
    pub name: String,
    pub gender: Gender,
    pub age: u8,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub bmi: f64,
    pub goal: FitnessGoal,
    pub activity_level: ActivityLevel,
    pub experience: ExperienceLevel,
    pub workout_days_per_week: u8,
    pub completed_at: chrono::DateTime<chrono::Utc>,
}
