use thiserror::Error;

use wg_core::{BuildingNumber, CoreError, GeoPoint};
use wg_spatial::SpatialError;

use crate::EtaOrder;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("pipeline configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Spatial(#[from] SpatialError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("building table has no buildings with coordinates")]
    NoLocatedBuildings,

    #[error("checkpoint has {checkpoint} results but the grid only has {grid} points")]
    CheckpointTooLong { checkpoint: usize, grid: usize },

    #[error("checkpoint point {index} is {found}, but the grid has {expected}")]
    CheckpointMismatch {
        index:    usize,
        expected: GeoPoint,
        found:    GeoPoint,
    },

    #[error("checkpoint point {index} refers to unknown building {number}")]
    UnknownBuilding { index: usize, number: BuildingNumber },

    #[error("checkpoint point {index} has {found} neighbors, this run keeps {expected} (was it written with another k?)")]
    CheckpointNeighborCount {
        index:    usize,
        found:    usize,
        expected: usize,
    },

    #[error("checkpoint point {index} is not sorted {order}")]
    CheckpointOrder { index: usize, order: EtaOrder },
}

pub type PipelineResult<T> = Result<T, PipelineError>;
