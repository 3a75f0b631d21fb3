use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use geojson::Feature;

use crate::dto::{BuildingListParams, BuildingListResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/buildings - all buildings, or `?use=commercial` for the
/// commercial subset.
pub async fn list_buildings(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BuildingListParams>,
) -> Result<Json<BuildingListResponse>, ApiError> {
    let buildings = match params.building_use.as_deref() {
        Some("commercial") => {
            tracing::info!("Listing commercial buildings");
            state.building_store.get_commercial().await?
        }
        Some(other) => {
            return Err(ApiError::bad_request(format!("unsupported use filter: {}", other)));
        }
        None => {
            tracing::info!("Listing buildings");
            state.building_store.get_all().await?
        }
    };

    Ok(Json(BuildingListResponse { count: buildings.len(), buildings }))
}

/// GET /api/buildings/{id} - one building as a GeoJSON feature.
pub async fn get_building(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Feature>, ApiError> {
    tracing::info!(id = %id, "Building detail");

    state
        .building_store
        .get(&id)
        .await?
        .map(|building| Json(building.to_geojson_feature()))
        .ok_or_else(|| ApiError::not_found("Building not found"))
}
