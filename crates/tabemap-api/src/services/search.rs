//! Restaurant search business logic.

use tabemap_core::models::Point;
use tabemap_core::units::km_to_degrees;

use crate::dto::{
    LocationSearchParams, LocationSearchResponse, NearestRestaurantIdResponse,
    NearestRestaurantResponse, RestaurantDetailResponse, RestaurantHit,
};
use crate::error::ApiError;
use crate::state::AppState;

pub struct RestaurantSearchService;

impl RestaurantSearchService {
    /// Nearest restaurant with its footprint polygon resolved through the
    /// stored building reference.
    ///
    /// This path trusts the loader-set reference and does not re-check
    /// geometry; the live containment lookup is a separate operation.
    pub async fn nearest_with_polygon(
        state: &AppState,
        point: Point,
    ) -> Result<Option<NearestRestaurantResponse>, ApiError> {
        let Some(hit) = state.restaurant_store.find_nearest(point).await? else {
            return Ok(None);
        };

        let building_polygon = match hit.entity.building_id.as_deref() {
            Some(id) => state.building_store.get(id).await?.map(|b| b.to_geojson_feature()),
            None => None,
        };

        Ok(Some(NearestRestaurantResponse {
            message: format!("Found {}", hit.entity.name),
            building_polygon,
            distance: hit.distance,
            restaurant: hit.entity,
        }))
    }

    /// Nearest restaurant carrying only the stored building id, skipping
    /// the polygon lookup entirely.
    pub async fn nearest_with_building_id(
        state: &AppState,
        point: Point,
    ) -> Result<Option<NearestRestaurantIdResponse>, ApiError> {
        let Some(hit) = state.restaurant_store.find_nearest(point).await? else {
            return Ok(None);
        };

        Ok(Some(NearestRestaurantIdResponse {
            message: format!("Found {}", hit.entity.name),
            building_id: hit.entity.building_id.clone(),
            distance: hit.distance,
            restaurant: hit.entity,
        }))
    }

    /// Restaurants within `radius_km` of the point, nearest first.
    ///
    /// The kilometer radius converts to planar degrees with the fixed
    /// 111 km/degree constant; distances in the result are degrees.
    pub async fn search_by_location(
        state: &AppState,
        point: Point,
        radius_km: f64,
    ) -> Result<LocationSearchResponse, ApiError> {
        let radius_deg = km_to_degrees(radius_km);
        let hits = state.restaurant_store.find_within_radius(point, radius_deg).await?;

        let restaurants: Vec<RestaurantHit> = hits
            .into_iter()
            .map(|hit| RestaurantHit { restaurant: hit.entity, distance: hit.distance })
            .collect();

        Ok(LocationSearchResponse {
            count: restaurants.len(),
            restaurants,
            search_params: LocationSearchParams {
                lat: point.lat,
                lng: point.lng,
                radius_km,
            },
        })
    }

    /// All restaurants, best rated first.
    pub async fn list(state: &AppState) -> Result<Vec<tabemap_core::models::Restaurant>, ApiError> {
        Ok(state.restaurant_store.get_all().await?)
    }

    /// Substring name search, best rated first.
    pub async fn search_by_name(
        state: &AppState,
        name: &str,
    ) -> Result<Vec<tabemap_core::models::Restaurant>, ApiError> {
        Ok(state.restaurant_store.search_by_name(name).await?)
    }

    /// One restaurant with its referenced footprint polygon.
    pub async fn detail(
        state: &AppState,
        id: &str,
    ) -> Result<Option<RestaurantDetailResponse>, ApiError> {
        let Some(restaurant) = state.restaurant_store.get(id).await? else {
            return Ok(None);
        };

        let building_polygon = match restaurant.building_id.as_deref() {
            Some(building_id) => {
                state.building_store.get(building_id).await?.map(|b| b.to_geojson_feature())
            }
            None => None,
        };

        Ok(Some(RestaurantDetailResponse { restaurant, building_polygon }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tabemap_core::models::{Building, Restaurant};
    use tabemap_store::memory::MemoryStore;
    use tabemap_store::ports::{BuildingStore, RestaurantStore};

    fn restaurant(id: &str, lat: f64, lng: f64, building_id: Option<&str>) -> Restaurant {
        Restaurant {
            id: id.to_string(),
            name: format!("Restaurant {}", id),
            address: "Tokyo".to_string(),
            opening_hours: "11:00-21:00".to_string(),
            rating: 4.0,
            lat,
            lng,
            building_id: building_id.map(str::to_string),
        }
    }

    fn building(id: &str, center_lat: f64, center_lng: f64) -> Building {
        let half = 0.0005;
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

    async fn state_with(restaurants: &[Restaurant], buildings: &[Building]) -> AppState {
        let store = Arc::new(MemoryStore::new());
        store.put_restaurants(restaurants).await.unwrap();
        store.put_buildings(buildings).await.unwrap();
        AppState::new(store.clone(), store.clone(), store)
    }

    #[tokio::test]
    async fn test_nearest_with_polygon_resolves_stored_reference() {
        // The stored reference points at b1 even though the restaurant's
        // point sits inside b2; the reference path must win here.
        let state = state_with(
            &[restaurant("r1", 35.0, 139.0, Some("b1"))],
            &[building("b1", 35.1, 139.1), building("b2", 35.0, 139.0)],
        )
        .await;

        let response = RestaurantSearchService::nearest_with_polygon(
            &state,
            Point::new(35.0, 139.0),
        )
        .await
        .unwrap()
        .unwrap();

        assert_eq!(response.restaurant.id, "r1");
        assert_eq!(response.distance, 0.0);
        let polygon = response.building_polygon.unwrap();
        assert_eq!(polygon.properties.unwrap()["id"], "b1");
    }

    #[tokio::test]
    async fn test_nearest_with_polygon_dangling_reference() {
        let state =
            state_with(&[restaurant("r1", 35.0, 139.0, Some("missing"))], &[]).await;

        let response = RestaurantSearchService::nearest_with_polygon(
            &state,
            Point::new(35.0, 139.0),
        )
        .await
        .unwrap()
        .unwrap();

        assert!(response.building_polygon.is_none());
    }

    #[tokio::test]
    async fn test_nearest_on_empty_store_is_none() {
        let state = state_with(&[], &[]).await;
        let response =
            RestaurantSearchService::nearest_with_polygon(&state, Point::new(35.0, 139.0))
                .await
                .unwrap();
        assert!(response.is_none());
    }

    #[tokio::test]
    async fn test_nearest_with_building_id_skips_polygon_lookup() {
        let state = state_with(&[restaurant("r1", 35.0, 139.0, Some("b1"))], &[]).await;

        let response = RestaurantSearchService::nearest_with_building_id(
            &state,
            Point::new(35.001, 139.001),
        )
        .await
        .unwrap()
        .unwrap();

        assert_eq!(response.building_id.as_deref(), Some("b1"));
        assert!((response.distance - (2.0f64 * 0.001 * 0.001).sqrt()).abs() < 1e-12);
    }

    #[tokio::test]
    async fn test_search_by_location_converts_km_to_degrees() {
        let state = state_with(
            &[
                // 0.005 degrees away: inside a 1 km (~0.009 deg) radius.
                restaurant("in", 35.0, 139.005, None),
                // 0.02 degrees away: outside.
                restaurant("out", 35.0, 139.02, None),
            ],
            &[],
        )
        .await;

        let response = RestaurantSearchService::search_by_location(
            &state,
            Point::new(35.0, 139.0),
            1.0,
        )
        .await
        .unwrap();

        assert_eq!(response.count, 1);
        assert_eq!(response.restaurants[0].restaurant.id, "in");
        assert_eq!(response.search_params.radius_km, 1.0);
    }

    #[tokio::test]
    async fn test_detail_missing_restaurant_is_none() {
        let state = state_with(&[], &[]).await;
        let response = RestaurantSearchService::detail(&state, "nope").await.unwrap();
        assert!(response.is_none());
    }
}
