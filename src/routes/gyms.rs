use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{Facility, FacilityInfo, HealthResponse, SearchGymsRequest, SearchGymsResponse};
use crate::routes::{error_response, AppState};

/// Configure all gym-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/gyms/search", web::post().to(search_gyms))
        .route("/gyms/{id}", web::get().to(get_gym))
        .route("/facilities", web::get().to(list_facilities));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let gyms_loaded = state.catalog.len();
    let status = if gyms_loaded > 0 { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        gyms_loaded,
        timestamp: chrono::Utc::now(),
    })
}

/// Search gyms endpoint
///
/// POST /api/v1/gyms/search
///
/// Request body:
/// ```json
/// {
///   "country": "Sri Lanka",
///   "city": "Colombo",
///   "searchQuery": "power",
///   "maxDistance": 10,
///   "facilities": ["wifi", "pool"],
///   "priceRange": ["$", "$$"],
///   "minRating": 4.0,
///   "userLocation": { "latitude": 6.9271, "longitude": 79.8612 },
///   "limit": 20
/// }
/// ```
async fn search_gyms(
    state: web::Data<AppState>,
    req: web::Json<SearchGymsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for search request: {:?}", errors);
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string());
    }

    let filters = req.to_filters();
    let mut gyms = match state.catalog.search(&filters) {
        Ok(gyms) => gyms,
        Err(e) => {
            tracing::info!("Rejected gym search filters: {}", e);
            return error_response(StatusCode::BAD_REQUEST, "Invalid filters", e.to_string());
        }
    };

    let total_results = gyms.len();
    // Truncation only shapes the page; the engine always returns every match
    let limit = req
        .limit
        .unwrap_or(state.search.default_limit)
        .min(state.search.max_limit) as usize;
    gyms.truncate(limit);

    tracing::info!(
        "Returning {} of {} gyms (country: {:?}, located: {})",
        gyms.len(),
        total_results,
        filters.country,
        filters.user_location.is_some()
    );

    HttpResponse::Ok().json(SearchGymsResponse {
        gyms,
        total_results,
    })
}

/// Single gym endpoint
///
/// GET /api/v1/gyms/{id}
async fn get_gym(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();

    match state.catalog.get(&id) {
        Some(gym) => HttpResponse::Ok().json(gym),
        None => {
            tracing::debug!("Gym not found: {}", id);
            error_response(
                StatusCode::NOT_FOUND,
                "Gym not found",
                format!("No gym with id {}", id),
            )
        }
    }
}

/// Facility vocabulary endpoint
async fn list_facilities() -> impl Responder {
    let facilities: Vec<FacilityInfo> = Facility::ALL.into_iter().map(FacilityInfo::from).collect();
    HttpResponse::Ok().json(facilities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchSettings;
    use crate::models::{ErrorResponse, GymRecord};
    use crate::services::GymCatalog;
    use actix_web::{test, App};
    use std::sync::Arc;

    fn app_state() -> AppState {
        AppState {
            catalog: Arc::new(GymCatalog::builtin().unwrap()),
            search: SearchSettings::default(),
        }
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state()))
                .configure(crate::routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/health").to_request();
        let body: HealthResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.status, "healthy");
        assert!(body.gyms_loaded > 0);
    }

    #[actix_web::test]
    async fn test_search_with_limit_reports_total() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state()))
                .configure(crate::routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/gyms/search")
            .set_json(serde_json::json!({ "country": "Dubai", "limit": 2 }))
            .to_request();
        let body: SearchGymsResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.gyms.len(), 2);
        assert_eq!(body.total_results, 4);
        assert!(body.gyms.iter().all(|m| m.gym.location.country.as_str() == "Dubai"));
    }

    #[actix_web::test]
    async fn test_search_with_location_annotates_distance() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state()))
                .configure(crate::routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/gyms/search")
            .set_json(serde_json::json!({
                "userLocation": { "latitude": 6.9271, "longitude": 79.8612 },
                "maxDistance": 10
            }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let gyms = body["gyms"].as_array().unwrap();
        assert_eq!(gyms.len(), 3);
        assert!(gyms.iter().all(|g| g["distance"].is_string() && g["distanceKm"].is_number()));
    }

    #[actix_web::test]
    async fn test_search_rejects_negative_distance() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state()))
                .configure(crate::routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/gyms/search")
            .set_json(serde_json::json!({ "maxDistance": -5 }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "Invalid filters");
    }

    #[actix_web::test]
    async fn test_get_gym_found_and_missing() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state()))
                .configure(crate::routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/gyms/ae-dxb-002").to_request();
        let gym: GymRecord = test::call_and_read_body_json(&app, req).await;
        assert_eq!(gym.name, "GymNation Al Barsha");

        let req = test::TestRequest::get().uri("/api/v1/gyms/nope").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_list_facilities() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state()))
                .configure(crate::routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/facilities").to_request();
        let body: Vec<FacilityInfo> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.len(), Facility::ALL.len());
        assert!(body.iter().any(|f| f.tag == Facility::Open24Hours && f.label == "Open 24 Hours"));
    }
}
