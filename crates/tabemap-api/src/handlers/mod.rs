mod buildings;
mod health;
mod restaurants;
mod search;
mod spatial;

pub use buildings::{get_building, list_buildings};
pub use health::health_check;
pub use restaurants::{get_restaurant, list_restaurants};
pub use search::{search_by_location, search_nearest, search_optimized};
pub use spatial::{search_building, search_nearby_buildings};

use tabemap_core::error::TabemapError;
use tabemap_core::validation::ValidationResult;

use crate::error::ApiError;

/// Convert a failed validation into the 400 response, reporting every
/// violated rule.
pub(crate) fn ensure_valid(result: ValidationResult) -> Result<(), ApiError> {
    if result.is_valid {
        Ok(())
    } else {
        Err(TabemapError::invalid_input(result.errors).into())
    }
}
