//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

use crate::BuildingNumber;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("duplicate building number {0}")]
    DuplicateBuilding(BuildingNumber),

    #[error("building {0} not found")]
    BuildingNotFound(BuildingNumber),

    #[error("empty building number")]
    EmptyBuildingNumber,
}

/// Shorthand result type for `wg-core`.
pub type CoreResult<T> = Result<T, CoreError>;
