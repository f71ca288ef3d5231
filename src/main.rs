use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use gym_search::config::{LoggingSettings, Settings};
use gym_search::routes::{self, handle_json_payload_error, AppState};
use gym_search::services::{CatalogError, GymCatalog};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level when set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

async fn load_catalog(settings: &Settings) -> Result<GymCatalog, CatalogError> {
    match &settings.catalog.path {
        Some(path) => {
            info!("Loading gym catalog from {}", path);
            GymCatalog::load(path).await
        }
        None => {
            info!("No catalog path configured, using built-in dataset");
            GymCatalog::builtin()
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };

    init_logging(&settings.logging);

    info!("Starting gym search service...");

    let catalog = match load_catalog(&settings).await {
        Ok(catalog) => Arc::new(catalog),
        Err(e) => {
            error!("Failed to load gym catalog: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidData, e));
        }
    };

    info!("Gym catalog loaded ({} gyms)", catalog.len());

    let app_state = AppState {
        catalog,
        search: settings.search.clone(),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
