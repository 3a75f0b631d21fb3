//! Distance units and conversions used by the search operations.

use serde::{Deserialize, Serialize};

/// Approximate kilometers per degree of latitude/longitude.
///
/// The restaurant radius search converts kilometers to degrees with this
/// single constant, uniform regardless of latitude. Result sets near the
/// radius boundary depend on it; do not replace with a geodesic conversion.
pub const KM_PER_DEGREE: f64 = 111.0;

/// Convert a kilometer radius to the degree units used by planar search.
pub fn km_to_degrees(km: f64) -> f64 {
    km / KM_PER_DEGREE
}

/// Unit a radius bound or search distance is expressed in.
///
/// Restaurant searches are kilometer-scale over planar degrees; building
/// proximity searches are meter-scale over true spatial distance. The unit
/// travels with every bound so call sites cannot mix the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceUnit {
    Kilometers,
    Meters,
}

impl DistanceUnit {
    pub fn suffix(&self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Meters => "m",
        }
    }
}

impl std::fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.suffix())
    }
}
