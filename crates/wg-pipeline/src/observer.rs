//! Pipeline observer trait for progress reporting and output.

use wg_core::{GeoPoint, GridResult};

/// Callbacks invoked by [`Pipeline::run`][crate::Pipeline::run].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct Progress;
///
/// impl PipelineObserver for Progress {
///     fn on_point_end(&mut self, index: usize, result: &GridResult) {
///         println!("#{index} {}: {} neighbors", result.coords, result.neighbors.len());
///     }
/// }
/// ```
pub trait PipelineObserver {
    /// Called once before the first point.  `resumed` points come from a
    /// checkpoint and will not be recomputed.
    fn on_run_start(&mut self, _total: usize, _resumed: usize) {}

    /// Called before ranking and enriching grid point `index`.
    fn on_point_start(&mut self, _index: usize, _point: GeoPoint) {}

    /// Called with the finished result for a freshly computed point.
    fn on_point_end(&mut self, _index: usize, _result: &GridResult) {}

    /// Called instead of start/end for a point restored from a checkpoint.
    fn on_point_resumed(&mut self, _index: usize, _result: &GridResult) {}

    /// Called once after the last point.  `completed` includes resumed points.
    fn on_run_end(&mut self, _completed: usize) {}
}

/// A [`PipelineObserver`] that does nothing.
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

impl<O: PipelineObserver + ?Sized> PipelineObserver for &mut O {
    fn on_run_start(&mut self, total: usize, resumed: usize) {
        (**self).on_run_start(total, resumed);
    }

    fn on_point_start(&mut self, index: usize, point: GeoPoint) {
        (**self).on_point_start(index, point);
    }

    fn on_point_end(&mut self, index: usize, result: &GridResult) {
        (**self).on_point_end(index, result);
    }

    fn on_point_resumed(&mut self, index: usize, result: &GridResult) {
        (**self).on_point_resumed(index, result);
    }

    fn on_run_end(&mut self, completed: usize) {
        (**self).on_run_end(completed);
    }
}

/// Fan out to two observers, first `A` then `B`.
impl<A: PipelineObserver, B: PipelineObserver> PipelineObserver for (A, B) {
    fn on_run_start(&mut self, total: usize, resumed: usize) {
        self.0.on_run_start(total, resumed);
        self.1.on_run_start(total, resumed);
    }

    fn on_point_start(&mut self, index: usize, point: GeoPoint) {
        self.0.on_point_start(index, point);
        self.1.on_point_start(index, point);
    }

    fn on_point_end(&mut self, index: usize, result: &GridResult) {
        self.0.on_point_end(index, result);
        self.1.on_point_end(index, result);
    }

    fn on_point_resumed(&mut self, index: usize, result: &GridResult) {
        self.0.on_point_resumed(index, result);
        self.1.on_point_resumed(index, result);
    }

    fn on_run_end(&mut self, completed: usize) {
        self.0.on_run_end(completed);
        self.1.on_run_end(completed);
    }
}
