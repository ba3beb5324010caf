//! Pretty-printed JSON array output.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use wg_core::GridResult;

use crate::row::GridRow;
use crate::writer::OutputWriter;
use crate::OutputResult;

/// Serialize `results` as a pretty (2-space) JSON array.
pub fn results_to_string(results: &[GridResult]) -> OutputResult<String> {
    let rows: Vec<GridRow> = results.iter().map(GridRow::from).collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

/// Write `results` to `path` as a pretty JSON array, replacing the file.
pub fn write_results(path: &Path, results: &[GridResult]) -> OutputResult<()> {
    let rows: Vec<GridRow> = results.iter().map(GridRow::from).collect();
    write_rows(path, &rows)
}

/// Read a table written by [`write_results`] / [`JsonWriter`].
pub fn read_results(path: &Path) -> OutputResult<Vec<GridResult>> {
    let rows: Vec<GridRow> = serde_json::from_reader(BufReader::new(File::open(path)?))?;
    rows.into_iter().map(GridRow::into_result).collect()
}

fn write_rows(path: &Path, rows: &[GridRow]) -> OutputResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut out, rows)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

// ── JsonWriter ────────────────────────────────────────────────────────────────

/// Buffers every result and writes the whole array at [`finish`][OutputWriter::finish].
///
/// Nothing reaches disk before `finish`; pair it with a
/// [`JsonLinesWriter`][crate::JsonLinesWriter] for crash safety.
pub struct JsonWriter {
    path:     PathBuf,
    rows:     Vec<GridRow>,
    finished: bool,
}

impl JsonWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), rows: Vec::new(), finished: false }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rows buffered so far.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl OutputWriter for JsonWriter {
    fn write_result(&mut self, result: &GridResult) -> OutputResult<()> {
        self.rows.push(GridRow::from(result));
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        write_rows(&self.path, &self.rows)?;
        tracing::info!(path = %self.path.display(), points = self.rows.len(), "wrote JSON table");
        Ok(())
    }
}
