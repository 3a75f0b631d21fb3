//! Geographic point value type.

use serde::{Deserialize, Serialize};

/// A WGS 84 latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub lat: f64,
    pub lng: f64,
}

impl Point {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Planar Euclidean distance in degree units.
    ///
    /// Raw lat/lng differences, not scaled by latitude and not geodesic.
    /// The restaurant finders rank by this value; callers must not assume
    /// meters.
    pub fn planar_distance(&self, other: &Point) -> f64 {
        let dlat = self.lat - other.lat;
        let dlng = self.lng - other.lng;
        (dlat * dlat + dlng * dlng).sqrt()
    }

    /// Convert to a `geo` point (x = lng, y = lat).
    pub fn to_geo(&self) -> geo::Point {
        geo::Point::new(self.lng, self.lat)
    }
}
