//! ETA enrichment: one routing call per candidate, then re-rank by ETA.

use wg_core::{GeoPoint, NeighborEntry, UNREACHABLE_ETA};
use wg_routing::EtaProvider;
use wg_spatial::Candidate;

use crate::EtaOrder;

/// Query `provider` for each candidate in turn and return ranked entries.
///
/// A failed lookup records [`UNREACHABLE_ETA`] for that pair and the loop
/// continues; nothing here aborts.
pub fn enrich_candidates<P>(
    point:      GeoPoint,
    candidates: &[Candidate<'_>],
    provider:   &mut P,
    order:      EtaOrder,
) -> Vec<NeighborEntry>
where
    P: EtaProvider + ?Sized,
{
    let mut entries: Vec<NeighborEntry> = candidates
        .iter()
        .map(|c| {
            let eta = match provider.eta_secs(point, c.location) {
                Ok(secs) => secs,
                Err(e) => {
                    tracing::warn!(
                        from = %point,
                        building = %c.building.number,
                        error = %e,
                        "ETA lookup failed; recording as unreachable"
                    );
                    UNREACHABLE_ETA
                }
            };
            tracing::debug!(from = %point, building = %c.building.number, eta, "ETA");
            NeighborEntry::new(c.building, eta)
        })
        .collect();

    sort_neighbors(&mut entries, order);
    entries
}

/// Stable sort by ETA; equal ETAs keep distance order.
pub fn sort_neighbors(entries: &mut [NeighborEntry], order: EtaOrder) {
    match order {
        EtaOrder::SlowestFirst => entries.sort_by(|a, b| b.eta_secs.total_cmp(&a.eta_secs)),
        EtaOrder::FastestFirst => entries.sort_by(|a, b| a.eta_secs.total_cmp(&b.eta_secs)),
    }
}
