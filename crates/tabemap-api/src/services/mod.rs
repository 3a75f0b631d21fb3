mod search;
mod spatial;

pub use search::RestaurantSearchService;
pub use spatial::SpatialSearchService;
