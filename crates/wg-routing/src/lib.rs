//! `wg-routing` — walking-time providers and the routing/search HTTP client.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`eta`]      | `EtaProvider` trait, `StraightLineEta`                     |
//! | [`response`] | `parse_pedestrian_response`, `parse_poi_response`          |
//! | [`tmap`]     | `TmapClient`, `TmapConfig` (blocking `reqwest`)            |
//! | [`error`]    | `RoutingError`, `RoutingResult<T>`                         |
//!
//! # Pluggability
//!
//! `wg-pipeline` only sees [`EtaProvider`].  The HTTP client is one
//! implementation; tests use fakes and offline runs can use
//! [`StraightLineEta`].  [`TmapClient`] also implements
//! `wg_buildings::PoiSearch` for coordinate collection.
//!
//! No retry, backoff, or rate limiting is done here.  A full run issues
//! `grid_points × k` route requests; budget that against the service quota
//! before starting.

pub mod error;
pub mod eta;
pub mod response;
pub mod tmap;


pub use error::{RoutingError, RoutingResult};
pub use eta::{EtaProvider, StraightLineEta};
pub use response::{parse_pedestrian_response, parse_poi_response};
pub use tmap::{TmapClient, TmapConfig};
