use geojson::Feature;
use serde::Serialize;
use tabemap_core::models::{Building, Restaurant};

/// Nearest restaurant with its footprint polygon resolved through the
/// stored building reference.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearestRestaurantResponse {
    pub restaurant: Restaurant,
    /// GeoJSON feature, absent when the restaurant has no stored building
    /// reference or the referenced building is gone.
    pub building_polygon: Option<Feature>,
    pub message: String,
    /// Planar degree distance, not meters.
    pub distance: f64,
}

/// Nearest restaurant with only the stored building id attached; the
/// client fetches the polygon separately when it needs it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearestRestaurantIdResponse {
    pub restaurant: Restaurant,
    pub building_id: Option<String>,
    pub message: String,
    /// Planar degree distance, not meters.
    pub distance: f64,
}

/// One restaurant inside a radius search result.
#[derive(Debug, Serialize)]
pub struct RestaurantHit {
    pub restaurant: Restaurant,
    /// Planar degree distance, not meters.
    pub distance: f64,
}

/// Echo of the radius search inputs.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSearchParams {
    pub lat: f64,
    pub lng: f64,
    pub radius_km: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSearchResponse {
    pub restaurants: Vec<RestaurantHit>,
    pub count: usize,
    pub search_params: LocationSearchParams,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantListResponse {
    pub restaurants: Vec<Restaurant>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantDetailResponse {
    pub restaurant: Restaurant,
    pub building_polygon: Option<Feature>,
}

/// Building found by live containment test.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainingBuildingResponse {
    pub building_id: String,
    pub building: Feature,
    pub message: String,
}

/// One building inside a proximity search result.
#[derive(Debug, Serialize)]
pub struct BuildingHit {
    pub building: Feature,
    /// True spatial distance in meters.
    pub distance: f64,
}

/// Echo of the proximity search inputs.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbySearchParams {
    pub lat: f64,
    pub lng: f64,
    pub radius_meters: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyBuildingsResponse {
    pub buildings: Vec<BuildingHit>,
    pub count: usize,
    pub search_params: NearbySearchParams,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingListResponse {
    pub buildings: Vec<Building>,
    pub count: usize,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self { status: "ok", service: "tabemap-api" }
    }
}
