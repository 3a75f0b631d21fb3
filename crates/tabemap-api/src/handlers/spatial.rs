use std::sync::Arc;

use axum::{extract::State, Json};
use tabemap_core::models::Point;
use tabemap_core::validation::{
    validate_coordinates, validate_radius, BUILDING_NEARBY_LIMIT,
};

use crate::dto::{ContainingBuildingResponse, NearbyBuildingsResponse, NearbySearchRequest, SearchRequest};
use crate::error::ApiError;
use crate::services::SpatialSearchService;
use crate::state::AppState;

use super::ensure_valid;

/// POST /api/search/spatial - the building containing the point.
pub async fn search_building(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<ContainingBuildingResponse>, ApiError> {
    tracing::info!(lat = request.lat, lng = request.lng, "Building containment search");

    ensure_valid(validate_coordinates(request.lat, request.lng))?;

    let point = Point::new(request.lat, request.lng);
    let result = SpatialSearchService::find_building_at(&state, point).await?;

    result.map(Json).ok_or_else(|| ApiError::not_found("No building found at this location"))
}

/// POST /api/search/spatial/nearby - buildings within a meter radius.
pub async fn search_nearby_buildings(
    State(state): State<Arc<AppState>>,
    Json(request): Json<NearbySearchRequest>,
) -> Result<Json<NearbyBuildingsResponse>, ApiError> {
    tracing::info!(
        lat = request.lat,
        lng = request.lng,
        radius_m = request.radius,
        "Nearby building search"
    );

    ensure_valid(validate_coordinates(request.lat, request.lng))?;
    ensure_valid(validate_radius(request.radius, &BUILDING_NEARBY_LIMIT))?;

    let point = Point::new(request.lat, request.lng);
    let response =
        SpatialSearchService::find_buildings_near(&state, point, request.radius).await?;

    Ok(Json(response))
}
