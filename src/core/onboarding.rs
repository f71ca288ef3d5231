//! Onboarding wizard as a pure state machine
//!
//! The wizard state is a plain value. Each answer is applied with
//! [`advance`], which returns a new state and leaves the old one untouched,
//! so a client can hold the state, replay it, or step [`go_back`] freely.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

use crate::models::{
    ActivityLevel, CompletedProfile, ExperienceLevel, FitnessGoal, Gender, ProfileDraft,
};

const MAX_NAME_LEN: usize = 50;
const AGE_RANGE: (u8, u8) = (13, 100);
const HEIGHT_RANGE_CM: (f64, f64) = (100.0, 250.0);
const WEIGHT_RANGE_KG: (f64, f64) = (30.0, 300.0);
const WORKOUT_DAYS_RANGE: (u8, u8) = (1, 7);

/// Errors produced by onboarding transitions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OnboardingError {
    #[error("Expected an answer for step {expected:?}, got one for {got:?}")]
    UnexpectedStep {
        expected: OnboardingStep,
        got: OnboardingStep,
    },

    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Onboarding is not finished: missing {0}")]
    Incomplete(&'static str),

    #[error("Onboarding already reached the review step")]
    AlreadyFinished,
}

/// Wizard steps in the order they are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    Name,
    Gender,
    Age,
    Height,
    Weight,
    Goal,
    ActivityLevel,
    Experience,
    WorkoutDays,
    Review,
}

impl OnboardingStep {
    pub const ORDER: [OnboardingStep; 10] = [
        OnboardingStep::Name,
        OnboardingStep::Gender,
        OnboardingStep::Age,
        OnboardingStep::Height,
        OnboardingStep::Weight,
        OnboardingStep::Goal,
        OnboardingStep::ActivityLevel,
        OnboardingStep::Experience,
        OnboardingStep::WorkoutDays,
        OnboardingStep::Review,
    ];

    fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Option<OnboardingStep> {
        Self::ORDER.get(self.index() + 1).copied()
    }

    pub fn previous(self) -> Option<OnboardingStep> {
        self.index().checked_sub(1).map(|i| Self::ORDER[i])
    }
}

/// One answer, tagged with the step it belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum OnboardingEvent {
    NameEntered(String),
    GenderSelected(Gender),
    AgeEntered(u8),
    HeightEntered(f64),
    WeightEntered(f64),
    GoalSelected(FitnessGoal),
    ActivityLevelSelected(ActivityLevel),
    ExperienceSelected(ExperienceLevel),
    WorkoutDaysSelected(u8),
}

impl OnboardingEvent {
    /// Step this answer belongs to
    pub fn step(&self) -> OnboardingStep {
        match self {
            OnboardingEvent::NameEntered(_) => OnboardingStep::Name,
            OnboardingEvent::GenderSelected(_) => OnboardingStep::Gender,
            OnboardingEvent::AgeEntered(_) => OnboardingStep::Age,
            OnboardingEvent::HeightEntered(_) => OnboardingStep::Height,
            OnboardingEvent::WeightEntered(_) => OnboardingStep::Weight,
            OnboardingEvent::GoalSelected(_) => OnboardingStep::Goal,
            OnboardingEvent::ActivityLevelSelected(_) => OnboardingStep::ActivityLevel,
            OnboardingEvent::ExperienceSelected(_) => OnboardingStep::Experience,
            OnboardingEvent::WorkoutDaysSelected(_) => OnboardingStep::WorkoutDays,
        }
    }
}

/// Current step plus everything answered so far
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct OnboardingState {
    pub step: OnboardingStep,
    #[validate(nested)]
    pub profile: ProfileDraft,
}

impl OnboardingState {
    pub fn new() -> Self {
        Self {
            step: OnboardingStep::Name,
            profile: ProfileDraft::default(),
        }
    }

    /// `(answered steps, steps needing an answer)`
    pub fn progress(&self) -> (usize, usize) {
        (self.step.index(), OnboardingStep::ORDER.len() - 1)
    }

    pub fn is_ready_for_review(&self) -> bool {
        self.step == OnboardingStep::Review
    }
}

impl Default for OnboardingState {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply the answer for the current step and move to the next one
pub fn advance(
    state: &OnboardingState,
    event: OnboardingEvent,
) -> Result<OnboardingState, OnboardingError> {
    if state.step == OnboardingStep::Review {
        return Err(OnboardingError::AlreadyFinished);
    }
    if event.step() != state.step {
        return Err(OnboardingError::UnexpectedStep {
            expected: state.step,
            got: event.step(),
        });
    }

    let mut profile = state.profile.clone();
    match event {
        OnboardingEvent::NameEntered(name) => profile.name = Some(validate_name(&name)?),
        OnboardingEvent::GenderSelected(gender) => profile.gender = Some(gender),
        OnboardingEvent::AgeEntered(age) => {
            profile.age = Some(check_range("age", age, AGE_RANGE)?);
        }
        OnboardingEvent::HeightEntered(height) => {
            profile.height_cm = Some(check_range("height", height, HEIGHT_RANGE_CM)?);
        }
        OnboardingEvent::WeightEntered(weight) => {
            profile.weight_kg = Some(check_range("weight", weight, WEIGHT_RANGE_KG)?);
        }
        OnboardingEvent::GoalSelected(goal) => profile.goal = Some(goal),
        OnboardingEvent::ActivityLevelSelected(level) => profile.activity_level = Some(level),
        OnboardingEvent::ExperienceSelected(level) => profile.experience = Some(level),
        OnboardingEvent::WorkoutDaysSelected(days) => {
            profile.workout_days_per_week =
                Some(check_range("workout days", days, WORKOUT_DAYS_RANGE)?);
        }
    }

    let step = state.step.next().unwrap_or(OnboardingStep::Review);
    tracing::trace!("Onboarding advanced from {:?} to {:?}", state.step, step);

    Ok(OnboardingState { step, profile })
}

/// Return to the previous step, keeping every answer entered so far
pub fn go_back(state: &OnboardingState) -> OnboardingState {
    OnboardingState {
        step: state.step.previous().unwrap_or(state.step),
        profile: state.profile.clone(),
    }
}

/// Turn a reviewed draft into a finished profile
pub fn complete(state: &OnboardingState) -> Result<CompletedProfile, OnboardingError> {
    if !state.is_ready_for_review() {
        return Err(OnboardingError::Incomplete(step_field(state.step)));
    }

    // Drafts are client-held and may not have passed through `advance`
    let draft = &state.profile;
    let name = validate_name(draft.name.as_deref().ok_or(OnboardingError::Incomplete("name"))?)?;
    let age = check_range(
        "age",
        draft.age.ok_or(OnboardingError::Incomplete("age"))?,
        AGE_RANGE,
    )?;
    let height_cm = check_range(
        "height",
        draft.height_cm.ok_or(OnboardingError::Incomplete("height"))?,
        HEIGHT_RANGE_CM,
    )?;
    let weight_kg = check_range(
        "weight",
        draft.weight_kg.ok_or(OnboardingError::Incomplete("weight"))?,
        WEIGHT_RANGE_KG,
    )?;
    let workout_days_per_week = check_range(
        "workout days",
        draft
            .workout_days_per_week
            .ok_or(OnboardingError::Incomplete("workout days"))?,
        WORKOUT_DAYS_RANGE,
    )?;

    Ok(CompletedProfile {
        profile_id: uuid::Uuid::new_v4(),
        name,
        gender: draft.gender.ok_or(OnboardingError::Incomplete("gender"))?,
        age,
        height_cm,
        weight_kg,
        bmi: body_mass_index(weight_kg, height_cm),
        goal: draft.goal.ok_or(OnboardingError::Incomplete("goal"))?,
        activity_level: draft
            .activity_level
            .ok_or(OnboardingError::Incomplete("activity level"))?,
        experience: draft.experience.ok_or(OnboardingError::Incomplete("experience"))?,
        workout_days_per_week,
        completed_at: chrono::Utc::now(),
    })
}

/// BMI in kg/m², rounded to one decimal
pub fn body_mass_index(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    (weight_kg / (height_m * height_m) * 10.0).round() / 10.0
}

fn validate_name(name: &str) -> Result<String, OnboardingError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(OnboardingError::InvalidInput {
            field: "name",
            reason: "must not be empty".to_string(),
        });
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(OnboardingError::InvalidInput {
            field: "name",
            reason: format!("must be at most {} characters", MAX_NAME_LEN),
        });
    }
    Ok(name.to_string())
}

fn check_range<T>(field: &'static str, value: T, (min, max): (T, T)) -> Result<T, OnboardingError>
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    if value >= min && value <= max {
        Ok(value)
    } else {
        Err(OnboardingError::InvalidInput {
            field,
            reason: format!("{} is outside {}-{}", value, min, max),
        })
    }
}

fn step_field(step: OnboardingStep) -> &'static str {
    match step {
        OnboardingStep::Name => "name",
        OnboardingStep::Gender => "gender",
        OnboardingStep::Age => "age",
        OnboardingStep::Height => "height",
        OnboardingStep::Weight => "weight",
        OnboardingStep::Goal => "goal",
        OnboardingStep::ActivityLevel => "activity level",
        OnboardingStep::Experience => "experience",
        OnboardingStep::WorkoutDays => "workout days",
        OnboardingStep::Review => "review",
    }
}
