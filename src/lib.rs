//! Gym Search - gym discovery and onboarding core for a fitness app
//!
//! This library provides the gym filter engine (haversine distances,
//! multi-criteria filtering and proximity ranking), the onboarding wizard
//! state machine, and the catalog and HTTP layers built on top of them.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{compute_distance_km, filter_gyms, format_distance, FilterError, GeoError};
pub use crate::models::{Coordinates, Country, Facility, GymFilters, GymMatch, GymRecord, PriceRange};
pub use crate::services::GymCatalog;
