use std::sync::Arc;

use axum::{extract::State, Json};
use tabemap_core::models::Point;
use tabemap_core::validation::{
    validate_coordinates, validate_radius, RESTAURANT_SEARCH_LIMIT,
};

use crate::dto::{
    LocationSearchRequest, LocationSearchResponse, NearestRestaurantIdResponse,
    NearestRestaurantResponse, SearchRequest,
};
use crate::error::ApiError;
use crate::services::RestaurantSearchService;
use crate::state::AppState;

use super::ensure_valid;

/// POST /api/search - nearest restaurant with its footprint polygon.
pub async fn search_nearest(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<NearestRestaurantResponse>, ApiError> {
    tracing::info!(lat = request.lat, lng = request.lng, "Nearest restaurant search");

    ensure_valid(validate_coordinates(request.lat, request.lng))?;

    let point = Point::new(request.lat, request.lng);
    let result = RestaurantSearchService::nearest_with_polygon(&state, point).await?;

    result.map(Json).ok_or_else(|| ApiError::not_found("No restaurant found nearby"))
}

/// POST /api/search/optimized - nearest restaurant with the stored
/// building id only, no polygon lookup.
pub async fn search_optimized(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<NearestRestaurantIdResponse>, ApiError> {
    tracing::info!(lat = request.lat, lng = request.lng, "Nearest restaurant search (id only)");

    ensure_valid(validate_coordinates(request.lat, request.lng))?;

    let point = Point::new(request.lat, request.lng);
    let result = RestaurantSearchService::nearest_with_building_id(&state, point).await?;

    result.map(Json).ok_or_else(|| ApiError::not_found("No restaurant found nearby"))
}

/// POST /api/search/location - restaurants within a kilometer radius.
pub async fn search_by_location(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LocationSearchRequest>,
) -> Result<Json<LocationSearchResponse>, ApiError> {
    tracing::info!(
        lat = request.lat,
        lng = request.lng,
        radius_km = request.radius,
        "Restaurant radius search"
    );

    ensure_valid(validate_coordinates(request.lat, request.lng))?;
    ensure_valid(validate_radius(request.radius, &RESTAURANT_SEARCH_LIMIT))?;

    let point = Point::new(request.lat, request.lng);
    let response =
        RestaurantSearchService::search_by_location(&state, point, request.radius).await?;

    Ok(Json(response))
}
