//! Serialized row types and their conversion to/from core results.

use serde::{Deserialize, Serialize};

use wg_core::{BuildingNumber, GridResult, NeighborEntry, UNREACHABLE_ETA};

use crate::OutputResult;

/// One grid point as written to disk.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridRow {
    pub neighbors: Vec<NeighborRow>,
    /// `[lat, lon]`.
    pub coords:    [f64; 2],
}

/// One neighbor as written to disk.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NeighborRow {
    pub building_number: String,
    pub building_name:   String,
    /// Seconds; `null` when unreachable.
    #[serde(with = "eta")]
    pub eta:             f64,
}

impl From<&GridResult> for GridRow {
    fn from(r: &GridResult) -> Self {
        Self {
            neighbors: r.neighbors.iter().map(NeighborRow::from).collect(),
            coords:    r.coords.to_pair(),
        }
    }
}

impl From<&NeighborEntry> for NeighborRow {
    fn from(n: &NeighborEntry) -> Self {
        Self {
            building_number: n.building_number.to_string(),
            building_name:   n.building_name.clone(),
            eta:             n.eta_secs,
        }
    }
}

impl GridRow {
    /// Convert back to a [`GridResult`].  Fails only on an empty building number.
    pub fn into_result(self) -> OutputResult<GridResult> {
        let neighbors = self
            .neighbors
            .into_iter()
            .map(|n| -> OutputResult<NeighborEntry> {
                Ok(NeighborEntry {
                    building_number: BuildingNumber::new(&n.building_number)?,
                    building_name:   n.building_name,
                    eta_secs:        n.eta,
                })
            })
            .collect::<OutputResult<Vec<_>>>()?;
        Ok(GridResult::new(self.coords.into(), neighbors))
    }
}

/// Whole seconds as integers (`318`, not `318.0`), other finite ETAs as
/// floats, anything else as `null`.
mod eta {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::UNREACHABLE_ETA;

    /// Largest magnitude at which every integer is exact in an f64.
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

    pub fn serialize<S: Serializer>(eta: &f64, s: S) -> Result<S::Ok, S::Error> {
        if !eta.is_finite() {
            s.serialize_none()
        } else if eta.fract() == 0.0 && eta.abs() <= MAX_EXACT {
            s.serialize_i64(*eta as i64)
        } else {
            s.serialize_f64(*eta)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(d)?.unwrap_or(UNREACHABLE_ETA))
    }
}
