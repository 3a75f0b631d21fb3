//! Search result pairs.

use serde::Serialize;

/// An entity paired with its distance from the query point.
///
/// The unit depends on the finder that produced it: planar restaurant
/// searches yield degrees, spatial building searches yield meters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit<T> {
    pub entity: T,
    pub distance: f64,
}

impl<T> SearchHit<T> {
    pub fn new(entity: T, distance: f64) -> Self {
        Self { entity, distance }
    }
}
