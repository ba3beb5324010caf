//! `wg-spatial` — campus boundary, sample grid, and nearest-building ranking.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`boundary`] | `BoundaryCorners`, `Bounds`                               |
//! | [`grid`]     | `generate_grid`, `grid_shape`, `GridShape`                |
//! | [`ranker`]   | `nearest_buildings`, `Candidate`                          |
//! | [`error`]    | `SpatialError`, `SpatialResult<T>`                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `BoundaryCorners`.      |

pub mod boundary;
pub mod error;
pub mod grid;
pub mod ranker;

#[cfg(test)]
mod tests;

pub use boundary::{BoundaryCorners, Bounds};
pub use error::{SpatialError, SpatialResult};
pub use grid::{generate_grid, grid_shape, GridShape, MAX_GRID_POINTS};
pub use ranker::{nearest_buildings, Candidate};
