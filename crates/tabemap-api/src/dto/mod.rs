pub mod request;
pub mod response;

pub use request::{
    BuildingListParams, LocationSearchRequest, NearbySearchRequest, RestaurantListParams,
    SearchRequest,
};
pub use response::{
    BuildingHit, BuildingListResponse, ContainingBuildingResponse, HealthResponse,
    LocationSearchParams, LocationSearchResponse, NearbyBuildingsResponse, NearbySearchParams,
    NearestRestaurantIdResponse, NearestRestaurantResponse, RestaurantDetailResponse,
    RestaurantHit, RestaurantListResponse,
};
