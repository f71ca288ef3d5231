use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Returned when a facility tag is not part of the known vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown facility tag: {0}")]
pub struct ParseFacilityError(pub String);

/// Amenities a gym can offer
///
/// The wire form is the lowercase tag (`"wifi"`, `"24hours"`, ...). Unknown
/// tags fail to deserialize instead of falling back to a generic icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facility {
    Parking,
    Wifi,
    Shower,
    Locker,
    Trainer,
    Pool,
    Sauna,
    Spa,
    Cafe,
    Yoga,
    Crossfit,
    Supplement,
    #[serde(rename = "24hours")]
    Open24Hours,
    Zumba,
    Hiit,
    Nutrition,
}

impl Facility {
    pub const ALL: [Facility; 16] = [
        Facility::Parking,
        Facility::Wifi,
        Facility::Shower,
        Facility::Locker,
        Facility::Trainer,
        Facility::Pool,
        Facility::Sauna,
        Facility::Spa,
        Facility::Cafe,
        Facility::Yoga,
        Facility::Crossfit,
        Facility::Supplement,
        Facility::Open24Hours,
        Facility::Zumba,
        Facility::Hiit,
        Facility::Nutrition,
    ];

    /// Wire tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Facility::Parking => "parking",
            Facility::Wifi => "wifi",
            Facility::Shower => "shower",
            Facility::Locker => "locker",
            Facility::Trainer => "trainer",
            Facility::Pool => "pool",
            Facility::Sauna => "sauna",
            Facility::Spa => "spa",
            Facility::Cafe => "cafe",
            Facility::Yoga => "yoga",
            Facility::Crossfit => "crossfit",
            Facility::Supplement => "supplement",
            Facility::Open24Hours => "24hours",
            Facility::Zumba => "zumba",
            Facility::Hiit => "hiit",
            Facility::Nutrition => "nutrition",
        }
    }

    /// Human-readable name for filter chips and detail pages
    pub fn label(&self) -> &'static str {
        match self {
            Facility::Parking => "Parking",
            Facility::Wifi => "Free WiFi",
            Facility::Shower => "Showers",
            Facility::Locker => "Lockers",
            Facility::Trainer => "Personal Trainer",
            Facility::Pool => "Swimming Pool",
            Facility::Sauna => "Sauna",
            Facility::Spa => "Spa",
            Facility::Cafe => "Cafe",
            Facility::Yoga => "Yoga Classes",
            Facility::Crossfit => "CrossFit",
            Facility::Supplement => "Supplement Store",
            Facility::Open24Hours => "Open 24 Hours",
            Facility::Zumba => "Zumba",
            Facility::Hiit => "HIIT",
            Facility::Nutrition => "Nutrition Advice",
        }
    }

    /// Icon name in the app's icon set
    pub fn icon(&self) -> &'static str {
        match self {
            Facility::Parking => "car",
            Facility::Wifi => "wifi",
            Facility::Shower => "water",
            Facility::Locker => "lock-closed",
            Facility::Trainer => "person",
            Facility::Pool => "water-outline",
            Facility::Sauna => "flame",
            Facility::Spa => "leaf",
            Facility::Cafe => "cafe",
            Facility::Yoga => "body",
            Facility::Crossfit => "barbell",
            Facility::Supplement => "nutrition",
            Facility::Open24Hours => "time",
            Facility::Zumba => "musical-notes",
            Facility::Hiit => "flash",
            Facility::Nutrition => "restaurant",
        }
    }
}

impl fmt::Display for Facility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Facility {
    type Err = ParseFacilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Facility::ALL
            .iter()
            .copied()
            .find(|facility| facility.as_str() == s)
            .ok_or_else(|| ParseFacilityError(s.to_string()))
    }
}
