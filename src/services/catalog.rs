use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::core::{
    distance::{validate_coordinates, GeoError},
    filters::FilterError,
    search::filter_gyms,
};
use crate::models::{GymFilters, GymMatch, GymRecord};

/// Dataset compiled into the binary, used when no catalog path is configured
const BUILTIN_GYMS: &str = include_str!("../../data/gyms.json");

/// Errors that can occur while loading the gym catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Duplicate gym id: {0}")]
    DuplicateId(String),

    #[error("Invalid gym {id}: {reason}")]
    InvalidRecord { id: String, reason: String },

    #[error("Invalid location for gym {id}: {source}")]
    InvalidLocation { id: String, source: GeoError },
}

/// Read-only gym reference data
///
/// Loaded once at startup, validated, and shared between workers.
#[derive(Debug, Clone)]
pub struct GymCatalog {
    gyms: Vec<GymRecord>,
    by_id: HashMap<String, usize>,
}

impl GymCatalog {
    /// Build a catalog from records, rejecting malformed ones
    pub fn from_records(gyms: Vec<GymRecord>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(gyms.len());

        for (position, gym) in gyms.iter().enumerate() {
            validate_record(gym)?;
            if by_id.insert(gym.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(gym.id.clone()));
            }
        }

        Ok(Self { gyms, by_id })
    }

    /// Parse a JSON array of gym records
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let gyms: Vec<GymRecord> = serde_json::from_str(json)?;
        Self::from_records(gyms)
    }

    /// Catalog bundled with the binary
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_GYMS)
    }

    /// Load a catalog from a JSON file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await?;
        let catalog = Self::from_json_str(&json)?;

        tracing::debug!("Loaded {} gyms from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// All gyms in catalog order
    pub fn all(&self) -> &[GymRecord] {
        &self.gyms
    }

    pub fn get(&self, id: &str) -> Option<&GymRecord> {
        self.by_id.get(id).map(|&position| &self.gyms[position])
    }

    pub fn len(&self) -> usize {
        self.gyms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gyms.is_empty()
    }

    /// Run the gym filter engine over the whole catalog
    pub fn search(&self, filters: &GymFilters) -> Result<Vec<GymMatch>, FilterError> {
        filter_gyms(&self.gyms, filters)
    }
}

fn validate_record(gym: &GymRecord) -> Result<(), CatalogError> {
    let invalid = |reason: String| CatalogError::InvalidRecord {
        id: gym.id.clone(),
        reason,
    };

    if gym.id.trim().is_empty() {
        return Err(invalid("id must not be empty".to_string()));
    }
    if !(0.0..=5.0).contains(&gym.rating) {
        return Err(invalid(format!("rating {} is outside [0, 5]", gym.rating)));
    }
    if !(gym.price_per_month >= 0.0 && gym.price_per_month.is_finite()) {
        return Err(invalid(format!(
            "pricePerMonth {} must be a non-negative number",
            gym.price_per_month
        )));
    }

    validate_coordinates(&gym.location.coordinates()).map_err(|source| {
        CatalogError::InvalidLocation {
            id: gym.id.clone(),
            source,
        }
    })
}
