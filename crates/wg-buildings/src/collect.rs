//! Fill in missing building coordinates from a [`CoordinateSource`].

use wg_core::{Building, BuildingNumber, BuildingTable};

use crate::source::{CoordinateSource, LookupOutcome};
use crate::BuildingResult;

/// Tuning for [`collect_coordinates`].
#[derive(Clone, Debug)]
pub struct CollectOptions {
    /// Lookups per building before a `Transient` outcome is given up on.
    /// Values below 1 are treated as 1.
    pub max_attempts:       u32,
    /// Look up buildings that already have a location and replace it on a hit.
    pub overwrite_existing: bool,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self { max_attempts: 2, overwrite_existing: false }
    }
}

/// Per-run collection tally.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CollectReport {
    /// Already located and not looked up.
    pub kept:      usize,
    pub found:     usize,
    pub not_found: Vec<BuildingNumber>,
    /// Buildings whose every attempt was `Transient`, with the last message.
    pub failed:    Vec<(BuildingNumber, String)>,
}

impl CollectReport {
    pub fn unresolved(&self) -> usize {
        self.not_found.len() + self.failed.len()
    }
}

/// Return a copy of `table` with locations filled from `source`.
///
/// Unresolved buildings keep their previous location (usually none), so
/// downstream ranking simply excludes them.
pub fn collect_coordinates<S>(
    table:   &BuildingTable,
    source:  &mut S,
    options: &CollectOptions,
) -> BuildingResult<(BuildingTable, CollectReport)>
where
    S: CoordinateSource + ?Sized,
{
    let attempts = options.max_attempts.max(1);
    let mut report = CollectReport::default();
    let mut out: Vec<Building> = Vec::with_capacity(table.len());

    for building in table {
        if building.is_located() && !options.overwrite_existing {
            report.kept += 1;
            out.push(building.clone());
            continue;
        }

        let mut resolved = building.clone();
        let mut last_error = None;
        for attempt in 1..=attempts {
            match source.lookup(building) {
                LookupOutcome::Found(p) => {
                    tracing::debug!(number = %building.number, location = %p, "coordinates found");
                    resolved.location = Some(p);
                    report.found += 1;
                    last_error = None;
                    break;
                }
                LookupOutcome::NotFound => {
                    tracing::warn!(number = %building.number, name = %building.name, "coordinates not found");
                    report.not_found.push(building.number.clone());
                    last_error = None;
                    break;
                }
                LookupOutcome::Transient(msg) => {
                    tracing::warn!(number = %building.number, attempt, error = %msg, "coordinate lookup failed");
                    last_error = Some(msg);
                }
            }
        }
        if let Some(msg) = last_error {
            report.failed.push((building.number.clone(), msg));
        }
        out.push(resolved);
    }

    tracing::info!(
        kept = report.kept,
        found = report.found,
        not_found = report.not_found.len(),
        failed = report.failed.len(),
        "coordinate collection finished"
    );
    Ok((BuildingTable::from_buildings(out)?, report))
}
