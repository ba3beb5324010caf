//! JSON-lines checkpoint: one compact `GridRow` per line, flushed per point.
//!
//! A crash can leave a half-written final line; [`load_checkpoint`] drops it
//! and [`JsonLinesWriter::resume`] rewrites the file without it before
//! appending, so the file never holds a corrupt line in the middle.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use wg_core::GridResult;

use crate::row::GridRow;
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// Read all complete rows from a checkpoint file.
///
/// A missing file is an empty checkpoint.  An unparseable *last* line is
/// treated as a torn write and ignored; an unparseable line anywhere else is
/// an error.
pub fn load_checkpoint(path: &Path) -> OutputResult<Vec<GridResult>> {
    let text = match std::fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .collect();

    let mut results = Vec::with_capacity(lines.len());
    for (pos, &(line_no, line)) in lines.iter().enumerate() {
        match serde_json::from_str::<GridRow>(line) {
            Ok(row) => results.push(row.into_result()?),
            Err(e) if pos + 1 == lines.len() => {
                tracing::warn!(line = line_no + 1, error = %e, "dropping torn checkpoint line");
            }
            Err(source) => return Err(OutputError::Checkpoint { line: line_no + 1, source }),
        }
    }
    Ok(results)
}

/// Appends each result as one JSON line and flushes immediately.
pub struct JsonLinesWriter {
    path: PathBuf,
    out:  BufWriter<File>,
}

impl JsonLinesWriter {
    /// Start a fresh checkpoint, truncating any existing file.
    pub fn create(path: impl Into<PathBuf>) -> OutputResult<Self> {
        let path = path.into();
        let out = BufWriter::new(File::create(&path)?);
        Ok(Self { path, out })
    }

    /// Load an existing checkpoint and reopen it for appending.
    ///
    /// The file is rewritten with only the valid rows first.  Returns the
    /// writer and the restored results, in grid order.
    pub fn resume(path: impl Into<PathBuf>) -> OutputResult<(Self, Vec<GridResult>)> {
        let path = path.into();
        let restored = load_checkpoint(&path)?;

        let mut writer = Self::create(&path)?;
        for r in &restored {
            writer.append(r)?;
        }
        writer.out.flush()?;

        drop(writer);
        let file = OpenOptions::new().append(true).open(&path)?;
        tracing::info!(path = %path.display(), restored = restored.len(), "resumed checkpoint");
        Ok((Self { path, out: BufWriter::new(file) }, restored))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&mut self, result: &GridResult) -> OutputResult<()> {
        serde_json::to_writer(&mut self.out, &GridRow::from(result))?;
        self.out.write_all(b"\n")?;
        Ok(())
    }
}

impl OutputWriter for JsonLinesWriter {
    fn write_result(&mut self, result: &GridResult) -> OutputResult<()> {
        self.append(result)?;
        self.out.flush()?;
        Ok(())
    }

    /// Resumed points are already in the file.
    fn write_resumed(&mut self, _result: &GridResult) -> OutputResult<()> {
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.out.flush()?;
        Ok(())
    }
}
