use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::state::AppState;

/// Create the API router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .route("/api/health", get(handlers::health_check))

        // Spatial building search
        .route("/api/search/spatial", post(handlers::search_building))
        .route("/api/search/spatial/nearby", post(handlers::search_nearby_buildings))

        // Restaurant search
        .route("/api/search", post(handlers::search_nearest))
        .route("/api/search/optimized", post(handlers::search_optimized))
        .route("/api/search/location", post(handlers::search_by_location))

        // Restaurants
        .route("/api/restaurants", get(handlers::list_restaurants))
        .route("/api/restaurants/{id}", get(handlers::get_restaurant))

        // Buildings
        .route("/api/buildings", get(handlers::list_buildings))
        .route("/api/buildings/{id}", get(handlers::get_building))

        .with_state(state)
}
