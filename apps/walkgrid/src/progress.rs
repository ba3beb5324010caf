//! Stdout progress reporting for `walkgrid build`.

use std::time::Instant;

use wg_core::{GeoPoint, GridResult};
use wg_pipeline::PipelineObserver;

/// Prints a line every `every` points plus a start and end summary.
pub struct Progress {
    every:       usize,
    total:       usize,
    resumed:     usize,
    unreachable: usize,
    started:     Instant,
}

impl Progress {
    pub fn new(every: usize) -> Self {
        Self { every: every.max(1), total: 0, resumed: 0, unreachable: 0, started: Instant::now() }
    }

    /// Neighbor entries that fell back to the unreachable sentinel.
    pub fn unreachable(&self) -> usize {
        self.unreachable
    }
}

impl PipelineObserver for Progress {
    fn on_run_start(&mut self, total: usize, resumed: usize) {
        self.total = total;
        self.resumed = resumed;
        self.started = Instant::now();
        if resumed > 0 {
            println!("Resuming: {resumed}/{total} points already in checkpoint");
        }
    }

    fn on_point_start(&mut self, index: usize, point: GeoPoint) {
        if index % self.every == 0 {
            println!("  [{:>5}/{}] {point}", index + 1, self.total);
        }
    }

    fn on_point_end(&mut self, _index: usize, result: &GridResult) {
        self.unreachable += result.neighbors.iter().filter(|n| !n.is_reachable()).count();
    }

    fn on_run_end(&mut self, completed: usize) {
        let computed = completed - self.resumed;
        let elapsed = self.started.elapsed();
        let per_point = if computed > 0 { elapsed.as_secs_f64() / computed as f64 } else { 0.0 };
        println!(
            "Computed {computed} points in {:.1}s ({per_point:.2}s/point), {} unreachable neighbors",
            elapsed.as_secs_f64(),
            self.unreachable,
        );
    }
}
