use async_trait::async_trait;
use tabemap_core::error::Result;
use tabemap_core::models::{Building, Point, Restaurant, SearchHit};

/// Port for restaurant row access.
///
/// Every method issues a single logical query with no retries; a failed
/// query fails the whole operation. Absent rows are `None`/empty, never an
/// error.
#[async_trait]
pub trait RestaurantStore: Send + Sync {
    /// All restaurants, best rated first.
    async fn get_all(&self) -> Result<Vec<Restaurant>>;

    /// Look up a restaurant by id.
    async fn get(&self, id: &str) -> Result<Option<Restaurant>>;

    /// The restaurant closest to `point` by planar degree distance.
    ///
    /// Distance is `sqrt(dlat^2 + dlng^2)` over raw coordinates, in degree
    /// units. Ties break on restaurant id.
    async fn find_nearest(&self, point: Point) -> Result<Option<SearchHit<Restaurant>>>;

    /// Restaurants within `radius_deg` planar degrees of `point`,
    /// ascending by distance, id as the secondary key. The threshold is
    /// inclusive.
    async fn find_within_radius(
        &self,
        point: Point,
        radius_deg: f64,
    ) -> Result<Vec<SearchHit<Restaurant>>>;

    /// Substring name search, best rated first.
    async fn search_by_name(&self, name: &str) -> Result<Vec<Restaurant>>;

    /// Upsert restaurants by id. Only the data loader writes.
    async fn put_restaurants(&self, restaurants: &[Restaurant]) -> Result<()>;
}

/// Port for building footprint access.
#[async_trait]
pub trait BuildingStore: Send + Sync {
    /// All buildings, id order.
    async fn get_all(&self) -> Result<Vec<Building>>;

    /// Look up a building by id.
    async fn get(&self, id: &str) -> Result<Option<Building>>;

    /// Buildings whose recorded use is commercial, id order.
    async fn get_commercial(&self) -> Result<Vec<Building>>;

    /// The building whose footprint contains `point`, per the store's
    /// containment predicate. First by id when several polygons overlap.
    async fn find_containing(&self, point: Point) -> Result<Option<Building>>;

    /// Buildings within `radius_m` meters of `point` by true spatial
    /// distance, ascending, id as the secondary key.
    async fn find_within_distance(
        &self,
        point: Point,
        radius_m: f64,
    ) -> Result<Vec<SearchHit<Building>>>;

    /// Upsert buildings by id. Only the data loader writes.
    async fn put_buildings(&self, buildings: &[Building]) -> Result<()>;
}

/// Port for store liveness checks, used by the health endpoint.
#[async_trait]
pub trait StoreHealth: Send + Sync {
    /// Verify the backing store answers a trivial query.
    async fn health_check(&self) -> Result<()>;
}
