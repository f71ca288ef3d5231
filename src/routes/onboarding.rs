use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;

use crate::core::onboarding::{self, OnboardingState};
use crate::models::{AdvanceOnboardingRequest, OnboardingStateRequest, OnboardingStateResponse};
use crate::routes::error_response;

/// Configure the onboarding wizard routes
///
/// The server keeps no wizard state: every request carries the current
/// state and gets the next one back.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/onboarding/start", web::post().to(start))
        .route("/onboarding/advance", web::post().to(advance))
        .route("/onboarding/back", web::post().to(back))
        .route("/onboarding/complete", web::post().to(complete));
}

async fn start() -> impl Responder {
    HttpResponse::Ok().json(OnboardingStateResponse::from(OnboardingState::new()))
}

/// Apply one answer
///
/// POST /api/v1/onboarding/advance
///
/// Request body:
/// ```json
/// {
///   "state": { "step": "age", "profile": { "name": "Ayesha", "gender": "female" } },
///   "event": { "type": "age_entered", "value": 27 }
/// }
/// ```
async fn advance(req: web::Json<AdvanceOnboardingRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return invalid_draft(errors);
    }

    let AdvanceOnboardingRequest { state, event } = req.into_inner();

    match onboarding::advance(&state, event) {
        Ok(next) => HttpResponse::Ok().json(OnboardingStateResponse::from(next)),
        Err(e) => {
            tracing::info!("Rejected onboarding answer at {:?}: {}", state.step, e);
            error_response(StatusCode::BAD_REQUEST, "Invalid onboarding answer", e.to_string())
        }
    }
}

async fn back(req: web::Json<OnboardingStateRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return invalid_draft(errors);
    }

    HttpResponse::Ok().json(OnboardingStateResponse::from(onboarding::go_back(&req.state)))
}

async fn complete(req: web::Json<OnboardingStateRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return invalid_draft(errors);
    }

    match onboarding::complete(&req.state) {
        Ok(profile) => {
            tracing::info!("Onboarding completed: profile {}", profile.profile_id);
            HttpResponse::Ok().json(profile)
        }
        Err(e) => error_response(StatusCode::BAD_REQUEST, "Onboarding incomplete", e.to_string()),
    }
}

fn invalid_draft(errors: validator::ValidationErrors) -> HttpResponse {
    tracing::info!("Validation failed for onboarding draft: {:?}", errors);
    error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string())
}
