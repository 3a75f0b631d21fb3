use std::sync::Arc;

use tabemap_store::ports::{BuildingStore, RestaurantStore, StoreHealth};

/// Shared application state: one handle per storage port, immutable after
/// startup.
#[derive(Clone)]
pub struct AppState {
    pub restaurant_store: Arc<dyn RestaurantStore>,
    pub building_store: Arc<dyn BuildingStore>,
    pub store_health: Arc<dyn StoreHealth>,
}

impl AppState {
    pub fn new(
        restaurant_store: Arc<dyn RestaurantStore>,
        building_store: Arc<dyn BuildingStore>,
        store_health: Arc<dyn StoreHealth>,
    ) -> Self {
        Self { restaurant_store, building_store, store_health }
    }
}
