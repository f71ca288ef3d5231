use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::facility::Facility;

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Countries the gym catalog covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    #[serde(rename = "Sri Lanka")]
    SriLanka,
    #[serde(rename = "Dubai")]
    Dubai,
    #[serde(rename = "Australia")]
    Australia,
}

impl Country {
    pub const ALL: [Country; 3] = [Country::SriLanka, Country::Dubai, Country::Australia];

    pub fn as_str(&self) -> &'static str {
        match self {
            Country::SriLanka => "Sri Lanka",
            Country::Dubai => "Dubai",
            Country::Australia => "Australia",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse cost tier, shown as a `$`-count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PriceRange {
    #[serde(rename = "$")]
    Budget,
    #[serde(rename = "$$")]
    Moderate,
    #[serde(rename = "$$$")]
    Premium,
    #[serde(rename = "$$$$")]
    Luxury,
}

impl PriceRange {
    pub fn symbol(&self) -> &'static str {
        match self {
            PriceRange::Budget => "$",
            PriceRange::Moderate => "$$",
            PriceRange::Premium => "$$$",
            PriceRange::Luxury => "$$$$",
        }
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Postal and geographic location of a gym
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GymLocation {
    pub address: String,
    pub city: String,
    pub country: Country,
    pub latitude: f64,
    pub longitude: f64,
}

impl GymLocation {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

/// Gym reference data, loaded once and never mutated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GymRecord {
    pub id: String,
    pub name: String,
    pub location: GymLocation,
    pub rating: f64,
    #[serde(default)]
    pub review_count: u32,
    pub price_range: PriceRange,
    pub price_per_month: f64,
    #[serde(default)]
    pub facilities: BTreeSet<Facility>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub opening_hours: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub website: String,
}

impl GymRecord {
    pub fn has_facility(&self, facility: Facility) -> bool {
        self.facilities.contains(&facility)
    }
}

/// Search criteria for the gym filter engine
///
/// Every field is optional. An unset field (or an empty list, or a
/// `min_rating` of zero) contributes no predicate, so `GymFilters::default()`
/// matches every gym.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GymFilters {
    pub country: Option<Country>,
    pub city: Option<String>,
    pub search_query: Option<String>,
    /// Upper bound in kilometres, only applied with `user_location`
    pub max_distance: Option<f64>,
    /// Every listed facility must be present
    #[serde(deserialize_with = "null_as_empty")]
    pub facilities: Vec<Facility>,
    /// Any listed tier matches
    #[serde(deserialize_with = "null_as_empty")]
    pub price_range: Vec<PriceRange>,
    pub min_rating: Option<f64>,
    pub user_location: Option<Coordinates>,
}

/// Read a JSON `null` list as an empty one
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A gym that passed the filters, annotated with its distance from the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GymMatch {
    #[serde(flatten)]
    pub gym: GymRecord,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub distance_km: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub distance: Option<String>,
}

impl GymMatch {
    /// Drop the query-time annotation and return the underlying record
    pub fn into_record(self) -> GymRecord {
        self.gym
    }
}
