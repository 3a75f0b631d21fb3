use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::dto::{RestaurantDetailResponse, RestaurantListParams, RestaurantListResponse};
use crate::error::ApiError;
use crate::services::RestaurantSearchService;
use crate::state::AppState;

/// GET /api/restaurants - all restaurants, or a name search with `?name=`.
pub async fn list_restaurants(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RestaurantListParams>,
) -> Result<Json<RestaurantListResponse>, ApiError> {
    let restaurants = match params.name.as_deref() {
        Some(name) => {
            tracing::info!(name = %name, "Restaurant name search");
            RestaurantSearchService::search_by_name(&state, name).await?
        }
        None => {
            tracing::info!("Listing restaurants");
            RestaurantSearchService::list(&state).await?
        }
    };

    Ok(Json(RestaurantListResponse { count: restaurants.len(), restaurants }))
}

/// GET /api/restaurants/{id} - one restaurant with its footprint polygon.
pub async fn get_restaurant(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<RestaurantDetailResponse>, ApiError> {
    tracing::info!(id = %id, "Restaurant detail");

    RestaurantSearchService::detail(&state, &id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Restaurant not found"))
}
