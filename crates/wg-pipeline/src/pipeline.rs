//! The `Pipeline` struct and its run loop.

use wg_core::{BuildingTable, GeoPoint, GridResult};
use wg_routing::EtaProvider;
use wg_spatial::nearest_buildings;

use crate::enrich::enrich_candidates;
use crate::{PipelineConfig, PipelineObserver, PipelineResult};

/// Sequential enrichment over a fixed grid.
///
/// Points are processed one at a time, in grid order; each issues at most `k`
/// blocking ETA calls.  Create via [`PipelineBuilder`][crate::PipelineBuilder].
pub struct Pipeline<P: EtaProvider> {
    pub config:    PipelineConfig,
    /// Sample points, row-major.
    pub grid:      Vec<GeoPoint>,
    pub buildings: BuildingTable,
    pub(crate) provider: P,
    /// Checkpointed prefix of the grid; drained by `run`.
    pub(crate) resumed:  Vec<GridResult>,
}

impl<P: EtaProvider> Pipeline<P> {
    /// Number of ETA requests the remaining (non-resumed) points will issue.
    pub fn call_budget(&self) -> usize {
        let per_point = self.config.k.min(self.buildings.located_count());
        (self.grid.len() - self.resumed.len()) * per_point
    }

    /// Rank and enrich a single point.
    pub fn process_point(&mut self, point: GeoPoint) -> GridResult {
        let candidates = nearest_buildings(point, &self.buildings, self.config.k);
        let neighbors = enrich_candidates(point, &candidates, &mut self.provider, self.config.order);
        GridResult::new(point, neighbors)
    }

    /// Process every grid point and return the results in grid order.
    ///
    /// Checkpointed points are handed to `on_point_resumed` and not
    /// recomputed.  Results are reported to the observer as each point
    /// finishes, so an observer that persists them loses at most one point on
    /// a crash.
    pub fn run<O: PipelineObserver>(&mut self, observer: &mut O) -> PipelineResult<Vec<GridResult>> {
        let total = self.grid.len();
        let resumed = std::mem::take(&mut self.resumed);
        observer.on_run_start(total, resumed.len());

        let mut results = Vec::with_capacity(total);
        for (index, result) in resumed.into_iter().enumerate() {
            observer.on_point_resumed(index, &result);
            results.push(result);
        }

        for index in results.len()..total {
            let point = self.grid[index];
            observer.on_point_start(index, point);
            let result = self.process_point(point);
            observer.on_point_end(index, &result);
            results.push(result);
        }

        observer.on_run_end(results.len());
        tracing::info!(points = results.len(), "pipeline run complete");
        Ok(results)
    }

    /// Give back the provider (e.g. to inspect a fake in tests).
    pub fn into_provider(self) -> P {
        self.provider
    }
}
