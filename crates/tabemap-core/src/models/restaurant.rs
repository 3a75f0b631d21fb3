//! Restaurant records.

use serde::{Deserialize, Serialize};

use super::point::Point;

/// A restaurant as loaded by the external data loader.
///
/// Read-only from the service's perspective; only `tabemap-cli` writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub address: String,
    pub opening_hours: String,
    /// 0.0 to 5.0, one decimal.
    pub rating: f64,
    pub lat: f64,
    pub lng: f64,
    /// Reference into the building dataset, set by the loader independently
    /// of geometry. May disagree with the polygon that spatially contains
    /// the restaurant's point; live containment is a separate lookup path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building_id: Option<String>,
}

impl Restaurant {
    pub fn location(&self) -> Point {
        Point::new(self.lat, self.lng)
    }
}
