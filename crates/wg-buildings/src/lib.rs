//! `wg-buildings` — building tables and where their coordinates come from.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`loader`]  | `load_buildings_csv`, `load_buildings_reader`, `LoadOptions`|
//! | [`writer`]  | `write_buildings_csv`, `write_buildings_writer`             |
//! | [`url`]     | `coordinates_from_map_url`, `coordinates_from_text`         |
//! | [`source`]  | `CoordinateSource` trait, `LookupOutcome`, `FixtureSource`  |
//! | [`poi`]     | `Poi`, `PoiSearch` trait, `PoiIndex`                        |
//! | [`collect`] | `collect_coordinates`, `CollectOptions`, `CollectReport`    |
//! | [`error`]   | `BuildingError`, `BuildingResult<T>`                        |
//!
//! # Coordinate flow
//!
//! ```text
//! buildings.csv ──load──▶ BuildingTable ──collect(source)──▶ BuildingTable
//!                                                                  │
//!                                   buildings_with_coords.csv ◀──write
//! ```
//!
//! A `CoordinateSource` is anything that can answer "where is building N?".
//! The POI search index and in-memory fixtures are provided; a scraper
//! would be another implementation.

pub mod collect;
pub mod error;
pub mod loader;
pub mod poi;
pub mod source;
pub mod url;
pub mod writer;

#[cfg(test)]
mod tests;

pub use collect::{collect_coordinates, CollectOptions, CollectReport};
pub use error::{BuildingError, BuildingResult};
pub use loader::{load_buildings_csv, load_buildings_reader, LoadOptions};
pub use poi::{building_number_from_poi_name, Poi, PoiIndex, PoiSearch};
pub use source::{CoordinateSource, FixtureSource, LookupOutcome};
pub use url::{coordinates_from_map_url, coordinates_from_text};
pub use writer::{write_buildings_csv, write_buildings_writer};
