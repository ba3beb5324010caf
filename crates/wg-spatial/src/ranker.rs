//! Brute-force k-nearest building ranking.
//!
//! Every located building is scored by [`GeoPoint::planar_distance`] from the
//! query point.  The scan is `O(n log n)` per query; campus tables hold a few
//! hundred buildings, so no spatial index is used.

use wg_core::{Building, GeoPoint};

/// A building selected for a grid point, with its planar distance.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Candidate<'a> {
    pub building: &'a Building,
    /// Resolved location of `building` (always `Some` in the source).
    pub location: GeoPoint,
    /// Euclidean distance in degree space.
    pub distance: f64,
}

/// Select the `k` buildings closest to `point`.
///
/// Buildings without a location are skipped up front.  The sort is stable, so
/// equidistant buildings keep their input order.  Returns fewer than `k`
/// entries only if fewer located buildings exist.
pub fn nearest_buildings<'a, I>(point: GeoPoint, buildings: I, k: usize) -> Vec<Candidate<'a>>
where
    I: IntoIterator<Item = &'a Building>,
{
    if k == 0 {
        return Vec::new();
    }

    let mut scored: Vec<Candidate<'a>> = buildings
        .into_iter()
        .filter_map(|b| {
            b.location.map(|location| Candidate {
                building: b,
                location,
                distance: point.planar_distance(location),
            })
        })
        .collect();

    scored.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    scored.truncate(k);
    scored
}
