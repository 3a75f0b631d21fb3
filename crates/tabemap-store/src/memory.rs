//! In-memory storage implementations for development and testing.
//!
//! These implementations use `RwLock::unwrap()` intentionally. Lock poisoning
//! only occurs when another thread panicked while holding the lock, which is
//! an unrecoverable state. For production workloads, use the PostgreSQL
//! backend.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use geo::algorithm::centroid::Centroid;
use geo::algorithm::contains::Contains;
use geo::{Distance, Haversine};
use tabemap_core::error::Result;
use tabemap_core::models::{Building, Point, Restaurant, SearchHit};

use crate::ports::{BuildingStore, RestaurantStore, StoreHealth};

/// In-memory implementation of both storage ports.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    restaurants: Arc<RwLock<HashMap<String, Restaurant>>>,
    buildings: Arc<RwLock<HashMap<String, Building>>>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn by_rating_desc(a: &Restaurant, b: &Restaurant) -> Ordering {
    b.rating
        .partial_cmp(&a.rating)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.id.cmp(&b.id))
}

/// Meter distance from a point to a building footprint.
///
/// Zero when the footprint contains the point, otherwise the geodesic
/// distance to the footprint centroid. The PostgreSQL adapter measures true
/// edge distance; the centroid approximation is close enough for the small
/// footprints the development datasets carry.
fn footprint_distance_m(point: geo::Point, building: &Building) -> Option<f64> {
    let polygon = building.to_geo_polygon();
    if polygon.contains(&point) {
        return Some(0.0);
    }
    polygon.centroid().map(|centroid| Haversine.distance(point, centroid))
}

#[async_trait]
impl RestaurantStore for MemoryStore {
    async fn get_all(&self) -> Result<Vec<Restaurant>> {
        let restaurants = self.restaurants.read().unwrap();
        let mut all: Vec<Restaurant> = restaurants.values().cloned().collect();
        all.sort_by(by_rating_desc);
        Ok(all)
    }

    async fn get(&self, id: &str) -> Result<Option<Restaurant>> {
        let restaurants = self.restaurants.read().unwrap();
        Ok(restaurants.get(id).cloned())
    }

    async fn find_nearest(&self, point: Point) -> Result<Option<SearchHit<Restaurant>>> {
        let restaurants = self.restaurants.read().unwrap();

        let mut best: Option<SearchHit<Restaurant>> = None;
        for restaurant in restaurants.values() {
            let distance = point.planar_distance(&restaurant.location());
            let closer = match &best {
                None => true,
                Some(current) => {
                    distance < current.distance
                        || (distance == current.distance && restaurant.id < current.entity.id)
                }
            };
            if closer {
                best = Some(SearchHit::new(restaurant.clone(), distance));
            }
        }

        Ok(best)
    }

    async fn find_within_radius(
        &self,
        point: Point,
        radius_deg: f64,
    ) -> Result<Vec<SearchHit<Restaurant>>> {
        let restaurants = self.restaurants.read().unwrap();

        let mut hits: Vec<SearchHit<Restaurant>> = restaurants
            .values()
            .filter_map(|restaurant| {
                let distance = point.planar_distance(&restaurant.location());
                (distance <= radius_deg).then(|| SearchHit::new(restaurant.clone(), distance))
            })
            .collect();

        hits.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.entity.id.cmp(&b.entity.id))
        });

        Ok(hits)
    }

    async fn search_by_name(&self, name: &str) -> Result<Vec<Restaurant>> {
        let restaurants = self.restaurants.read().unwrap();
        let mut matches: Vec<Restaurant> =
            restaurants.values().filter(|r| r.name.contains(name)).cloned().collect();
        matches.sort_by(by_rating_desc);
        Ok(matches)
    }

    async fn put_restaurants(&self, restaurants: &[Restaurant]) -> Result<()> {
        let mut store = self.restaurants.write().unwrap();
        for restaurant in restaurants {
            store.insert(restaurant.id.clone(), restaurant.clone());
        }
        Ok(())
    }
}

#[async_trait]
impl BuildingStore for MemoryStore {
    async fn get_all(&self) -> Result<Vec<Building>> {
        let buildings = self.buildings.read().unwrap();
        let mut all: Vec<Building> = buildings.values().cloned().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(all)
    }

    async fn get(&self, id: &str) -> Result<Option<Building>> {
        let buildings = self.buildings.read().unwrap();
        Ok(buildings.get(id).cloned())
    }

    async fn get_commercial(&self) -> Result<Vec<Building>> {
        let buildings = self.buildings.read().unwrap();
        let mut commercial: Vec<Building> =
            buildings.values().filter(|b| b.is_commercial()).cloned().collect();
        commercial.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(commercial)
    }

    async fn find_containing(&self, point: Point) -> Result<Option<Building>> {
        let buildings = self.buildings.read().unwrap();
        let geo_point = point.to_geo();

        let mut containing: Vec<&Building> = buildings
            .values()
            .filter(|building| building.to_geo_polygon().contains(&geo_point))
            .collect();
        containing.sort_by(|a, b| a.id.cmp(&b.id));

        Ok(containing.first().map(|b| (*b).clone()))
    }

    async fn find_within_distance(
        &self,
        point: Point,
        radius_m: f64,
    ) -> Result<Vec<SearchHit<Building>>> {
        let buildings = self.buildings.read().unwrap();
        let geo_point = point.to_geo();

        let mut hits: Vec<SearchHit<Building>> = buildings
            .values()
            .filter_map(|building| {
                let distance = footprint_distance_m(geo_point, building)?;
                (distance <= radius_m).then(|| SearchHit::new(building.clone(), distance))
            })
            .collect();

        hits.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.entity.id.cmp(&b.entity.id))
        });

        Ok(hits)
    }

    async fn put_buildings(&self, buildings: &[Building]) -> Result<()> {
        let mut store = self.buildings.write().unwrap();
        for building in buildings {
            store.insert(building.id.clone(), building.clone());
        }
        Ok(())
    }
}

#[async_trait]
impl StoreHealth for MemoryStore {
    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}
