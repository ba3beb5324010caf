//! Fluent builder for constructing a [`Pipeline`].

use wg_core::{BuildingTable, GeoPoint, GridResult, NeighborEntry};
use wg_routing::EtaProvider;
use wg_spatial::{generate_grid, BoundaryCorners};

use crate::{EtaOrder, Pipeline, PipelineConfig, PipelineError, PipelineResult};

/// Fluent builder for [`Pipeline<P>`].
///
/// # Required inputs
///
/// - [`PipelineConfig`]: k, spacing, ETA order
/// - [`BuildingTable`]: at least one located building
/// - [`BoundaryCorners`]: campus outline for the grid
/// - `P: EtaProvider`: e.g. `wg_routing::TmapClient`
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                                     |
/// |---------------------|---------------------------------------------|
/// | `.grid(points)`     | `generate_grid(boundary, config.spacing_m)` |
/// | `.resume_from(v)`   | no checkpoint; every point is computed      |
pub struct PipelineBuilder<P: EtaProvider> {
    config:    PipelineConfig,
    buildings: BuildingTable,
    boundary:  BoundaryCorners,
    provider:  P,
    grid:      Option<Vec<GeoPoint>>,
    resumed:   Vec<GridResult>,
}

impl<P: EtaProvider> PipelineBuilder<P> {
    pub fn new(
        config:    PipelineConfig,
        buildings: BuildingTable,
        boundary:  BoundaryCorners,
        provider:  P,
    ) -> Self {
        Self {
            config,
            buildings,
            boundary,
            provider,
            grid:    None,
            resumed: Vec::new(),
        }
    }

    /// Use these points instead of generating a grid from the boundary.
    pub fn grid(mut self, points: Vec<GeoPoint>) -> Self {
        self.grid = Some(points);
        self
    }

    /// Results already computed by an interrupted run, in grid order.
    ///
    /// They must be a prefix of the grid, written with the same `k` and ETA
    /// order over the same table; [`build`][Self::build] checks this.
    pub fn resume_from(mut self, results: Vec<GridResult>) -> Self {
        self.resumed = results;
        self
    }

    /// Validate inputs, generate the grid, and return a ready-to-run
    /// [`Pipeline`].
    pub fn build(self) -> PipelineResult<Pipeline<P>> {
        self.config.validate()?;

        if self.buildings.located_count() == 0 {
            return Err(PipelineError::NoLocatedBuildings);
        }

        let grid = match self.grid {
            Some(points) => points,
            None => generate_grid(&self.boundary, self.config.spacing_m)?,
        };

        // ── Checkpoint must be a prefix of this grid over this table ──────
        let per_point = self.config.k.min(self.buildings.located_count());
        if self.resumed.len() > grid.len() {
            return Err(PipelineError::CheckpointTooLong {
                checkpoint: self.resumed.len(),
                grid:       grid.len(),
            });
        }
        for (index, (result, &expected)) in self.resumed.iter().zip(&grid).enumerate() {
            if !same_point(result.coords, expected) {
                return Err(PipelineError::CheckpointMismatch {
                    index,
                    expected,
                    found: result.coords,
                });
            }
            if let Some(n) = result.neighbors.iter().find(|n| !self.buildings.contains(&n.building_number)) {
                return Err(PipelineError::UnknownBuilding {
                    index,
                    number: n.building_number.clone(),
                });
            }
            // A row written under another k or order would not match the
            // rows this run computes.
            if result.neighbors.len() != per_point {
                return Err(PipelineError::CheckpointNeighborCount {
                    index,
                    found:    result.neighbors.len(),
                    expected: per_point,
                });
            }
            if !is_ordered(&result.neighbors, self.config.order) {
                return Err(PipelineError::CheckpointOrder { index, order: self.config.order });
            }
        }

        let pipeline = Pipeline {
            config:    self.config,
            grid,
            buildings: self.buildings,
            provider:  self.provider,
            resumed:   self.resumed,
        };
        tracing::info!(
            points = pipeline.grid.len(),
            resumed = pipeline.resumed.len(),
            located = pipeline.buildings.located_count(),
            k = pipeline.config.k,
            calls = pipeline.call_budget(),
            "pipeline ready"
        );
        Ok(pipeline)
    }
}

/// Grid points survive a JSON round-trip exactly; the tolerance only absorbs
/// checkpoints written by other tools.
fn same_point(a: GeoPoint, b: GeoPoint) -> bool {
    const EPS: f64 = 1e-9;
    (a.lat - b.lat).abs() <= EPS && (a.lon - b.lon).abs() <= EPS
}

/// Whether `neighbors` is already sorted the way `sort_neighbors` sorts for `order`.
fn is_ordered(neighbors: &[NeighborEntry], order: EtaOrder) -> bool {
    neighbors.windows(2).all(|w| {
        let (a, b) = (w[0].eta_secs, w[1].eta_secs);
        match order {
            EtaOrder::SlowestFirst => a.total_cmp(&b).is_ge(),
            EtaOrder::FastestFirst => a.total_cmp(&b).is_le(),
        }
    })
}
