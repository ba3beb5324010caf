use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("grid spacing must be a positive, finite number of metres (got {0})")]
    InvalidSpacing(f64),

    #[error("grid of {n_lat} × {n_lon} points exceeds the {max} point limit", max = crate::grid::MAX_GRID_POINTS)]
    GridTooLarge { n_lat: usize, n_lon: usize },

    #[error("boundary corner {corner} is not a valid coordinate: {lat}, {lon}")]
    InvalidCorner {
        corner: &'static str,
        lat:    f64,
        lon:    f64,
    },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
