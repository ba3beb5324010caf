//! `wg-pipeline` — the grid → rank → enrich run loop.
//!
//! # Stages
//!
//! ```text
//! BuildingTable ─┐
//!                ├─ ① grid     generate_grid(boundary, spacing_m)
//! Boundary ──────┘
//!   for each grid point, in order:
//!     ② rank     nearest_buildings(point, table, k)        planar distance
//!     ③ enrich   enrich_candidates(point, candidates, ..)  one ETA call each
//!     ④ emit     observer.on_point_end(index, &GridResult)
//! ```
//!
//! Every stage is a plain function over explicit arguments and can be run
//! alone; [`Pipeline`] only sequences them and reports through a
//! [`PipelineObserver`].  Serialization lives in `wg-output`, which hooks in
//! as an observer.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use wg_pipeline::{NoopObserver, PipelineBuilder, PipelineConfig};
//! use wg_routing::StraightLineEta;
//! use wg_spatial::BoundaryCorners;
//!
//! let mut pipeline = PipelineBuilder::new(
//!     PipelineConfig::default(),
//!     table,
//!     BoundaryCorners::SNU_GWANAK,
//!     StraightLineEta::default(),
//! )
//! .build()?;
//! let results = pipeline.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod config;
pub mod enrich;
pub mod error;
pub mod observer;
pub mod pipeline;


pub use builder::PipelineBuilder;
pub use config::{EtaOrder, PipelineConfig};
pub use enrich::{enrich_candidates, sort_neighbors};
pub use error::{PipelineError, PipelineResult};
pub use observer::{NoopObserver, PipelineObserver};
pub use pipeline::Pipeline;
