use thiserror::Error;

use crate::models::Coordinates;

/// Earth's mean radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Errors raised for coordinates outside the valid range
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeoError {
    #[error("Latitude {0} is outside [-90, 90]")]
    InvalidLatitude(f64),

    #[error("Longitude {0} is outside [-180, 180]")]
    InvalidLongitude(f64),
}

/// Calculate the Haversine distance between two points in kilometers
///
/// Inputs are not range-checked; use [`compute_distance_km`] for
/// caller-supplied coordinates.
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in kilometers
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push `a` just past 1.0 for antipodal points
    let c = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Check that a point lies within the valid latitude/longitude range
///
/// NaN and infinite components are rejected as well.
pub fn validate_coordinates(point: &Coordinates) -> Result<(), GeoError> {
    if !(-90.0..=90.0).contains(&point.latitude) {
        return Err(GeoError::InvalidLatitude(point.latitude));
    }
    if !(-180.0..=180.0).contains(&point.longitude) {
        return Err(GeoError::InvalidLongitude(point.longitude));
    }
    Ok(())
}

/// Great-circle distance between two validated points, in kilometers
pub fn compute_distance_km(a: &Coordinates, b: &Coordinates) -> Result<f64, GeoError> {
    validate_coordinates(a)?;
    validate_coordinates(b)?;

    Ok(haversine_distance(a.latitude, a.longitude, b.latitude, b.longitude))
}

/// Render a distance for display
///
/// Below one kilometer the value is shown in whole meters ("850 m"),
/// otherwise with one decimal ("3.2 km"). `km` must be a distance from
/// [`compute_distance_km`]: finite and non-negative.
pub fn format_distance(km: f64) -> String {
    debug_assert!(km >= 0.0 && km.is_finite(), "not a distance: {}", km);

    if km < 1.0 {
        let meters = (km * 1000.0).round();
        if meters < 1000.0 {
            return format!("{} m", meters as i64);
        }
    }
    format!("{:.1} km", km)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_distance() {
        // Distance from London to Paris (approximately 344 km)
        let london_lat = 51.5074;
        let london_lon = -0.1278;
        let paris_lat = 48.8566;
        let paris_lon = 2.3522;

        let distance = haversine_distance(london_lat, london_lon, paris_lat, paris_lon);
        assert!((distance - 344.0).abs() < 10.0, "Distance should be ~344km, got {}", distance);
    }

    #[test]
    fn test_identical_points_are_exactly_zero() {
        let colombo = Coordinates::new(6.9271, 79.8612);
        assert_eq!(compute_distance_km(&colombo, &colombo), Ok(0.0));

        let pole = Coordinates::new(90.0, 180.0);
        assert_eq!(compute_distance_km(&pole, &pole), Ok(0.0));
    }

    #[test]
    fn test_antipodal_points_do_not_produce_nan() {
        let a = Coordinates::new(0.0, 0.0);
        let b = Coordinates::new(0.0, 180.0);
        let distance = compute_distance_km(&a, &b).unwrap();

        assert!(distance.is_finite());
        assert!((distance - EARTH_RADIUS_KM * std::f64::consts::PI).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_latitude_rejected() {
        let bad = Coordinates::new(91.0, 0.0);
        let ok = Coordinates::new(0.0, 0.0);

        assert_eq!(compute_distance_km(&bad, &ok), Err(GeoError::InvalidLatitude(91.0)));
        assert_eq!(compute_distance_km(&ok, &bad), Err(GeoError::InvalidLatitude(91.0)));
    }

    #[test]
    fn test_invalid_longitude_rejected() {
        let bad = Coordinates::new(0.0, -180.5);
        let ok = Coordinates::new(0.0, 0.0);

        assert_eq!(compute_distance_km(&ok, &bad), Err(GeoError::InvalidLongitude(-180.5)));
    }

    #[test]
    fn test_nan_rejected() {
        let bad = Coordinates::new(f64::NAN, 0.0);
        assert!(matches!(
            validate_coordinates(&bad),
            Err(GeoError::InvalidLatitude(_))
        ));
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(0.0), "0 m");
        assert_eq!(format_distance(0.85), "850 m");
        assert_eq!(format_distance(0.9994), "999 m");
        assert_eq!(format_distance(0.9996), "1.0 km");
        assert_eq!(format_distance(1.0), "1.0 km");
        assert_eq!(format_distance(3.24), "3.2 km");
        assert_eq!(format_distance(42.06), "42.1 km");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "not a distance")]
    fn test_format_distance_rejects_negative() {
        format_distance(-0.5);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "not a distance")]
    fn test_format_distance_rejects_nan() {
        format_distance(f64::NAN);
    }
}
