//! `wg-output` — result writers for the walkgrid toolkit.
//!
//! Two backends are provided:
//!
//! | Writer             | File              | When written                        |
//! |--------------------|-------------------|-------------------------------------|
//! | [`JsonWriter`]     | `knn.json`        | whole array at `finish()`           |
//! | [`JsonLinesWriter`]| `knn.jsonl`       | one line per point, flushed at once |
//!
//! Both implement [`OutputWriter`] and are driven by [`OutputObserver`],
//! which implements `wg_pipeline::PipelineObserver`.  The JSON-lines file is
//! the crash checkpoint: [`JsonLinesWriter::resume`] reads it back so an
//! interrupted run can continue where it stopped.
//!
//! # JSON shape
//!
//! ```json
//! [
//!   {
//!     "neighbors": [
//!       { "building_number": "83", "building_name": "치과병원", "eta": 912 },
//!       { "building_number": "301", "building_name": "제1공학관", "eta": null }
//!     ],
//!     "coords": [37.44745, 126.947716]
//!   }
//! ]
//! ```
//!
//! Names are raw UTF-8.  Whole-second ETAs are written as integers.  JSON has no infinity, so an unreachable ETA is
//! written as `null` and read back as `UNREACHABLE_ETA`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use wg_output::{JsonWriter, OutputObserver};
//!
//! let mut obs = OutputObserver::new(JsonWriter::new("knn.json"));
//! pipeline.run(&mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod error;
pub mod json;
pub mod jsonl;
pub mod observer;
pub mod row;
pub mod writer;


pub use error::{OutputError, OutputResult};
pub use json::{read_results, results_to_string, write_results, JsonWriter};
pub use jsonl::{load_checkpoint, JsonLinesWriter};
pub use observer::OutputObserver;
pub use row::{GridRow, NeighborRow};
pub use writer::OutputWriter;
