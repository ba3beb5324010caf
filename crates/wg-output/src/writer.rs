//! The `OutputWriter` trait implemented by all backend writers.

use wg_core::GridResult;

use crate::OutputResult;

/// Trait implemented by the JSON and JSON-lines writers.
///
/// When driven by [`OutputObserver`][crate::OutputObserver], errors are
/// stored and retrieved after the run with
/// [`take_error`][crate::OutputObserver::take_error].
pub trait OutputWriter {
    /// Record one freshly computed grid point.
    fn write_result(&mut self, result: &GridResult) -> OutputResult<()>;

    /// Record a point restored from a checkpoint.
    ///
    /// Defaults to [`write_result`][Self::write_result]; writers whose file
    /// already holds resumed points override this to skip them.
    fn write_resumed(&mut self, result: &GridResult) -> OutputResult<()> {
        self.write_result(result)
    }

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; the observer calls it once per run.
    fn finish(&mut self) -> OutputResult<()>;
}
