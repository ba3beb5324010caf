//! Per-grid-point results.

use crate::{Building, BuildingNumber, GeoPoint};

/// ETA recorded when the routing service gave no usable answer.
pub const UNREACHABLE_ETA: f64 = f64::INFINITY;

/// One ranked neighbor of a grid point.
#[derive(Clone, Debug, PartialEq)]
pub struct NeighborEntry {
    pub building_number: BuildingNumber,
    pub building_name:   String,
    /// Walking time in seconds; [`UNREACHABLE_ETA`] if unknown.
    pub eta_secs:        f64,
}

impl NeighborEntry {
    pub fn new(building: &Building, eta_secs: f64) -> Self {
        Self {
            building_number: building.number.clone(),
            building_name:   building.name.clone(),
            eta_secs,
        }
    }

    #[inline]
    pub fn is_reachable(&self) -> bool {
        self.eta_secs.is_finite()
    }
}

/// The ranked neighbor list for one grid point.
#[derive(Clone, Debug, PartialEq)]
pub struct GridResult {
    pub coords:    GeoPoint,
    pub neighbors: Vec<NeighborEntry>,
}

impl GridResult {
    pub fn new(coords: GeoPoint, neighbors: Vec<NeighborEntry>) -> Self {
        Self { coords, neighbors }
    }
}
