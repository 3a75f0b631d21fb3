//! Building spatial search business logic.
//!
//! These operations use the store's true spatial predicates and meter
//! distances. They are kept separate from the planar restaurant search on
//! purpose; the two rank and filter differently near boundaries.

use tabemap_core::models::Point;

use crate::dto::{
    BuildingHit, ContainingBuildingResponse, NearbyBuildingsResponse, NearbySearchParams,
};
use crate::error::ApiError;
use crate::state::AppState;

pub struct SpatialSearchService;

impl SpatialSearchService {
    /// The building whose footprint contains the point, by live
    /// containment test against the store.
    pub async fn find_building_at(
        state: &AppState,
        point: Point,
    ) -> Result<Option<ContainingBuildingResponse>, ApiError> {
        let Some(building) = state.building_store.find_containing(point).await? else {
            return Ok(None);
        };

        Ok(Some(ContainingBuildingResponse {
            building_id: building.id.clone(),
            message: format!("Found building {}", building.id),
            building: building.to_geojson_feature(),
        }))
    }

    /// Buildings within `radius_m` meters of the point, nearest first.
    pub async fn find_buildings_near(
        state: &AppState,
        point: Point,
        radius_m: f64,
    ) -> Result<NearbyBuildingsResponse, ApiError> {
        let hits = state.building_store.find_within_distance(point, radius_m).await?;

        let buildings: Vec<BuildingHit> = hits
            .into_iter()
            .map(|hit| BuildingHit {
                building: hit.entity.to_geojson_feature(),
                distance: hit.distance,
            })
            .collect();

        Ok(NearbyBuildingsResponse {
            count: buildings.len(),
            buildings,
            search_params: NearbySearchParams {
                lat: point.lat,
                lng: point.lng,
                radius_meters: radius_m,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tabemap_core::models::Building;
    use tabemap_store::memory::MemoryStore;
    use tabemap_store::ports::BuildingStore;

    fn square(id: &str, center_lat: f64, center_lng: f64, half: f64) -> Building {
        Building {
            id: id.to_string(),
            name: None,
            building_type: Some("retail".to_string()),
            levels: None,
            material: None,
            building_use: Some("commercial".to_string()),
            footprint: vec![vec![
                [center_lng - half, center_lat - half],
                [center_lng + half, center_lat - half],
                [center_lng + half, center_lat + half],
                [center_lng - half, center_lat + half],
                [center_lng - half, center_lat - half],
            ]],
        }
    }

    async fn state_with(buildings: &[Building]) -> AppState {
        let store = Arc::new(MemoryStore::new());
        store.put_buildings(buildings).await.unwrap();
        AppState::new(store.clone(), store.clone(), store)
    }

    #[tokio::test]
    async fn test_find_building_at_containment_hit() {
        let state = state_with(&[square("b1", 35.0, 139.0, 0.001)]).await;

        let response = SpatialSearchService::find_building_at(&state, Point::new(35.0, 139.0))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(response.building_id, "b1");
        assert!(response.building.geometry.is_some());
    }

    #[tokio::test]
    async fn test_find_building_at_miss_is_none() {
        let state = state_with(&[square("b1", 35.0, 139.0, 0.001)]).await;

        let response =
            SpatialSearchService::find_building_at(&state, Point::new(36.0, 140.0)).await.unwrap();

        assert!(response.is_none());
    }

    #[tokio::test]
    async fn test_find_buildings_near_orders_by_distance() {
        let state = state_with(&[
            square("far", 35.0, 139.003, 0.0001),
            square("near", 35.0, 139.001, 0.0001),
        ])
        .await;

        let response =
            SpatialSearchService::find_buildings_near(&state, Point::new(35.0, 139.0), 500.0)
                .await
                .unwrap();

        assert_eq!(response.count, 2);
        assert!(response.buildings[0].distance < response.buildings[1].distance);
        assert_eq!(response.search_params.radius_meters, 500.0);
    }

    #[tokio::test]
    async fn test_find_buildings_near_empty_store() {
        let state = state_with(&[]).await;

        let response =
            SpatialSearchService::find_buildings_near(&state, Point::new(35.0, 139.0), 100.0)
                .await
                .unwrap();

        assert_eq!(response.count, 0);
        assert!(response.buildings.is_empty());
    }
}
