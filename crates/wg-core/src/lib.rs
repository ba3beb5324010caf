//! `wg-core` — foundational types for the `walkgrid` toolkit.
//!
//! Every other `wg-*` crate depends on this one.  It has no `wg-*`
//! dependencies and only `thiserror` (plus optional `serde`) externally.
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`geo`]       | `GeoPoint`, haversine and planar distance               |
//! | [`building`]  | `BuildingNumber`, `Building`, `BuildingTable`           |
//! | [`neighbor`]  | `NeighborEntry`, `GridResult`, `UNREACHABLE_ETA`        |
//! | [`error`]     | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to `GeoPoint` and           |
//! |         | `BuildingNumber`.                                          |

pub mod building;
pub mod error;
pub mod geo;
pub mod neighbor;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use building::{Building, BuildingNumber, BuildingTable};
pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use neighbor::{GridResult, NeighborEntry, UNREACHABLE_ETA};
