//! `OutputObserver<W>` — bridges `PipelineObserver` to an `OutputWriter`.

use wg_core::GridResult;
use wg_pipeline::PipelineObserver;

use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`PipelineObserver`] that forwards every result to any [`OutputWriter`].
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After `pipeline.run()` returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct OutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> OutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `pipeline.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            tracing::error!(error = %e, "output write failed");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> PipelineObserver for OutputObserver<W> {
    fn on_point_end(&mut self, _index: usize, result: &GridResult) {
        let result = self.writer.write_result(result);
        self.store_err(result);
    }

    fn on_point_resumed(&mut self, _index: usize, result: &GridResult) {
        let result = self.writer.write_resumed(result);
        self.store_err(result);
    }

    fn on_run_end(&mut self, _completed: usize) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
