use thiserror::Error;

use wg_core::CoreError;

#[derive(Debug, Error)]
pub enum BuildingError {
    #[error("building CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("building search failed on page {page}: {message}")]
    Search { page: u32, message: String },
}

pub type BuildingResult<T> = Result<T, BuildingError>;
