//! Input validation for search parameters.
//!
//! Validators are pure and deterministic, and every violated rule is
//! reported rather than just the first. Type coercion of raw request values
//! happens at the HTTP boundary; these functions assume already-parsed
//! numbers.

use std::ops::RangeInclusive;

use crate::units::DistanceUnit;

/// Latitude band served by this deployment (Japan, roughly).
pub const REGION_LAT: RangeInclusive<f64> = 24.0..=46.0;

/// Longitude band served by this deployment.
pub const REGION_LNG: RangeInclusive<f64> = 123.0..=146.0;

/// Outcome of a validation pass.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a valid result.
    pub fn valid() -> Self {
        Self { is_valid: true, errors: Vec::new() }
    }

    /// Record a violated rule.
    pub fn add_error(&mut self, reason: impl Into<String>) {
        self.is_valid = false;
        self.errors.push(reason.into());
    }
}

/// Validate a latitude/longitude pair.
///
/// The global range checks and the regional check are evaluated
/// independently; a coordinate can violate several rules at once and all of
/// them are reported. Non-finite values fail every check.
pub fn validate_coordinates(lat: f64, lng: f64) -> ValidationResult {
    let mut result = ValidationResult::valid();

    if !(-90.0..=90.0).contains(&lat) {
        result.add_error("latitude out of range");
    }
    if !(-180.0..=180.0).contains(&lng) {
        result.add_error("longitude out of range");
    }
    if !REGION_LAT.contains(&lat) || !REGION_LNG.contains(&lng) {
        result.add_error("coordinates outside supported region");
    }

    result
}

/// Maximum radius for a search, paired with the unit the bound is
/// expressed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusLimit {
    pub max: f64,
    pub unit: DistanceUnit,
}

/// Cap for the kilometer-scale restaurant radius search.
pub const RESTAURANT_SEARCH_LIMIT: RadiusLimit =
    RadiusLimit { max: 50.0, unit: DistanceUnit::Kilometers };

/// Cap for the meter-scale building proximity search.
pub const BUILDING_NEARBY_LIMIT: RadiusLimit =
    RadiusLimit { max: 1000.0, unit: DistanceUnit::Meters };

/// Validate a search radius against a bound. The maximum is inclusive.
pub fn validate_radius(radius: f64, limit: &RadiusLimit) -> ValidationResult {
    let mut result = ValidationResult::valid();

    if radius.is_nan() || radius <= 0.0 {
        result.add_error("radius must be positive");
    }
    if radius > limit.max {
        result.add_error("radius exceeds maximum");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_coordinates_inside_region() {
        let result = validate_coordinates(35.0, 139.0);
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_latitude_out_of_range() {
        let result = validate_coordinates(91.0, 139.0);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e == "latitude out of range"));
    }

    #[test]
    fn test_longitude_out_of_range() {
        let result = validate_coordinates(35.0, 181.0);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e == "longitude out of range"));
    }

    #[test]
    fn test_globally_valid_but_outside_region() {
        let result = validate_coordinates(10.0, 10.0);
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["coordinates outside supported region"]);
    }

    #[test]
    fn test_all_violations_reported() {
        let result = validate_coordinates(91.0, 181.0);
        assert_eq!(
            result.errors,
            vec![
                "latitude out of range",
                "longitude out of range",
                "coordinates outside supported region",
            ]
        );
    }

    #[test]
    fn test_non_finite_coordinates_do_not_panic() {
        let result = validate_coordinates(f64::NAN, f64::INFINITY);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 3);
    }

    #[test]
    fn test_radius_must_be_positive() {
        assert!(!validate_radius(0.0, &RESTAURANT_SEARCH_LIMIT).is_valid);
        let result = validate_radius(-5.0, &RESTAURANT_SEARCH_LIMIT);
        assert!(result.errors.iter().any(|e| e == "radius must be positive"));
    }

    #[test]
    fn test_radius_maximum_is_inclusive() {
        assert!(validate_radius(50.0, &RESTAURANT_SEARCH_LIMIT).is_valid);

        let result = validate_radius(51.0, &RESTAURANT_SEARCH_LIMIT);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e == "radius exceeds maximum"));
    }

    #[test]
    fn test_meter_scale_limit() {
        assert!(validate_radius(1000.0, &BUILDING_NEARBY_LIMIT).is_valid);
        assert!(!validate_radius(1001.0, &BUILDING_NEARBY_LIMIT).is_valid);
        assert_eq!(BUILDING_NEARBY_LIMIT.unit, DistanceUnit::Meters);
        assert_eq!(RESTAURANT_SEARCH_LIMIT.unit, DistanceUnit::Kilometers);
    }

    proptest! {
        #[test]
        fn prop_coordinates_in_region_are_valid(
            lat in 24.0f64..=46.0,
            lng in 123.0f64..=146.0,
        ) {
            let result = validate_coordinates(lat, lng);
            prop_assert!(result.is_valid);
            prop_assert!(result.errors.is_empty());
        }

        #[test]
        fn prop_out_of_globe_latitude_always_flagged(
            lat in prop_oneof![-10_000.0f64..-90.0001, 90.0001f64..10_000.0],
            lng in -180.0f64..=180.0,
        ) {
            let result = validate_coordinates(lat, lng);
            prop_assert!(!result.is_valid);
            prop_assert!(result.errors.iter().any(|e| e == "latitude out of range"));
        }

        #[test]
        fn prop_positive_radius_within_bound_is_valid(radius in 0.0001f64..=50.0) {
            prop_assert!(validate_radius(radius, &RESTAURANT_SEARCH_LIMIT).is_valid);
        }

        #[test]
        fn prop_validation_is_deterministic(lat in -200.0f64..=200.0, lng in -400.0f64..=400.0) {
            let first = validate_coordinates(lat, lng);
            let second = validate_coordinates(lat, lng);
            prop_assert_eq!(first.errors, second.errors);
            prop_assert_eq!(first.is_valid, second.is_valid);
        }
    }
}
