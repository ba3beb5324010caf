//! Regular sample lattice over a campus boundary.
//!
//! # Algorithm
//!
//! ```text
//! bounds   = lat/lon min/max over the four corners
//! n_lat    = floor(lat_extent_m / spacing_m) + 1
//! n_lon    = floor(lon_extent_m / spacing_m) + 1
//! lats     = linspace(min_lat, max_lat, n_lat)
//! lons     = linspace(min_lon, max_lon, n_lon)
//! grid     = [(lat, lon) for lat in lats for lon in lons]     // row-major
//! ```
//!
//! The lattice bounds the quadrilateral rather than conforming to it, so
//! points outside the campus footprint are included.  Using `floor + 1`
//! keeps the realised spacing at or below the requested one.

use wg_core::GeoPoint;

use crate::{BoundaryCorners, SpatialError, SpatialResult};

/// Largest grid [`grid_shape`] accepts.  Each point costs `k` routing calls,
/// so anything near this is already far beyond a usable request budget.
pub const MAX_GRID_POINTS: usize = 10_000_000;

/// Row/column counts of a generated grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GridShape {
    pub n_lat: usize,
    pub n_lon: usize,
}

impl GridShape {
    /// Saturates rather than overflowing for hand-built shapes; shapes from
    /// [`grid_shape`] never exceed [`MAX_GRID_POINTS`].
    #[inline]
    pub fn point_count(&self) -> usize {
        self.n_lat.saturating_mul(self.n_lon)
    }
}

/// Compute the lattice shape without materialising the points.
pub fn grid_shape(boundary: &BoundaryCorners, spacing_m: f64) -> SpatialResult<GridShape> {
    if !spacing_m.is_finite() || spacing_m <= 0.0 {
        return Err(SpatialError::InvalidSpacing(spacing_m));
    }
    boundary.validate()?;

    let bounds = boundary.bounds();
    let shape = GridShape {
        n_lat: steps(bounds.lat_extent_m(), spacing_m),
        n_lon: steps(bounds.lon_extent_m(), spacing_m),
    };
    match shape.n_lat.checked_mul(shape.n_lon) {
        Some(n) if n <= MAX_GRID_POINTS => Ok(shape),
        _ => Err(SpatialError::GridTooLarge { n_lat: shape.n_lat, n_lon: shape.n_lon }),
    }
}

/// Generate grid points row-major (latitude outer, longitude inner).
pub fn generate_grid(boundary: &BoundaryCorners, spacing_m: f64) -> SpatialResult<Vec<GeoPoint>> {
    let shape = grid_shape(boundary, spacing_m)?;
    let bounds = boundary.bounds();

    let lats = linspace(bounds.min_lat, bounds.max_lat, shape.n_lat);
    let lons = linspace(bounds.min_lon, bounds.max_lon, shape.n_lon);

    let mut points = Vec::with_capacity(shape.point_count());
    for &lat in &lats {
        for &lon in &lons {
            points.push(GeoPoint::new(lat, lon));
        }
    }

    tracing::info!(
        n_lat = shape.n_lat,
        n_lon = shape.n_lon,
        points = points.len(),
        spacing_m,
        "generated sample grid"
    );
    Ok(points)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// `as usize` saturates for huge ratios; the caller rejects those.
fn steps(extent_m: f64, spacing_m: f64) -> usize {
    ((extent_m / spacing_m).floor() as usize).saturating_add(1)
}

/// `n` evenly spaced values from `min` to `max` inclusive.  `n == 1` → `[min]`.
pub(crate) fn linspace(min: f64, max: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let step = (max - min) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { max } else { min + step * i as f64 })
                .collect()
        }
    }
}
