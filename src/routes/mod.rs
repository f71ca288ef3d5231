// Route exports
pub mod gyms;
pub mod onboarding;

use actix_web::{error, http::StatusCode, web, HttpRequest, HttpResponse};
use std::sync::Arc;

use crate::config::SearchSettings;
use crate::models::ErrorResponse;
use crate::services::GymCatalog;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<GymCatalog>,
    pub search: SearchSettings,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(gyms::configure)
            .configure(onboarding::configure),
    );
}

/// Build a JSON error response with the given status
pub(crate) fn error_response(status: StatusCode, error: &str, message: String) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: status.as_u16(),
    })
}

/// Turn JSON payload errors into the standard error body
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    let response = error_response(
        StatusCode::BAD_REQUEST,
        "invalid_json",
        format!("Invalid JSON: {}", err),
    );
    error::InternalError::from_response(err, response).into()
}
