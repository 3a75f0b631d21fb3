use serde::{Deserialize, Deserializer};

/// Nearest-restaurant and containment search body.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(deserialize_with = "coerce_f64")]
    pub lat: f64,
    #[serde(deserialize_with = "coerce_f64")]
    pub lng: f64,
}

/// Restaurant radius search body. The radius is in kilometers.
#[derive(Debug, Deserialize)]
pub struct LocationSearchRequest {
    #[serde(deserialize_with = "coerce_f64")]
    pub lat: f64,
    #[serde(deserialize_with = "coerce_f64")]
    pub lng: f64,
    #[serde(default = "default_radius_km", deserialize_with = "coerce_f64")]
    pub radius: f64,
}

fn default_radius_km() -> f64 {
    1.0
}

/// Building proximity search body. The radius is in meters.
#[derive(Debug, Deserialize)]
pub struct NearbySearchRequest {
    #[serde(deserialize_with = "coerce_f64")]
    pub lat: f64,
    #[serde(deserialize_with = "coerce_f64")]
    pub lng: f64,
    #[serde(default = "default_radius_m", deserialize_with = "coerce_f64")]
    pub radius: f64,
}

fn default_radius_m() -> f64 {
    100.0
}

/// Query string for the restaurant listing.
#[derive(Debug, Deserialize)]
pub struct RestaurantListParams {
    /// Substring name filter.
    pub name: Option<String>,
}

/// Query string for the building listing.
#[derive(Debug, Deserialize)]
pub struct BuildingListParams {
    /// Filter by recorded use, e.g. `use=commercial`.
    #[serde(rename = "use")]
    pub building_use: Option<String>,
}

/// Accept both JSON numbers and numeric strings, as the legacy map clients
/// send either.
fn coerce_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        String(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom("expected a number")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_strings_are_coerced() {
        let request: SearchRequest =
            serde_json::from_str(r#"{"lat": "35.0", "lng": 139.0}"#).unwrap();
        assert_eq!(request.lat, 35.0);
        assert_eq!(request.lng, 139.0);
    }

    #[test]
    fn test_non_numeric_string_is_rejected() {
        let result = serde_json::from_str::<SearchRequest>(r#"{"lat": "abc", "lng": 139.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_location_search_radius_defaults_to_one_km() {
        let request: LocationSearchRequest =
            serde_json::from_str(r#"{"lat": 35.0, "lng": 139.0}"#).unwrap();
        assert_eq!(request.radius, 1.0);
    }

    #[test]
    fn test_nearby_radius_defaults_to_hundred_meters() {
        let request: NearbySearchRequest =
            serde_json::from_str(r#"{"lat": 35.0, "lng": 139.0}"#).unwrap();
        assert_eq!(request.radius, 100.0);
    }

    #[test]
    fn test_missing_coordinates_are_rejected() {
        assert!(serde_json::from_str::<SearchRequest>(r#"{"lat": 35.0}"#).is_err());
    }
}
