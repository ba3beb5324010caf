//! The `CoordinateSource` seam.
//!
//! Any way of finding a building's coordinates (search API, scraper, fixture
//! file) sits behind [`CoordinateSource`], so collection logic and tests never
//! depend on a live service.

use std::collections::HashMap;

use wg_core::{Building, BuildingNumber, GeoPoint};

/// Result of one coordinate lookup.
///
/// `NotFound` is a definitive answer; `Transient` means the source could not
/// answer this time and the caller may retry.
#[derive(Clone, Debug, PartialEq)]
pub enum LookupOutcome {
    Found(GeoPoint),
    NotFound,
    Transient(String),
}

/// Pluggable building → coordinate lookup.
pub trait CoordinateSource {
    fn lookup(&mut self, building: &Building) -> LookupOutcome;
}

impl<S: CoordinateSource + ?Sized> CoordinateSource for &mut S {
    fn lookup(&mut self, building: &Building) -> LookupOutcome {
        (**self).lookup(building)
    }
}

impl<S: CoordinateSource + ?Sized> CoordinateSource for Box<S> {
    fn lookup(&mut self, building: &Building) -> LookupOutcome {
        (**self).lookup(building)
    }
}

// ── FixtureSource ─────────────────────────────────────────────────────────────

/// In-memory source backed by a number → point map.
#[derive(Clone, Debug, Default)]
pub struct FixtureSource {
    points: HashMap<BuildingNumber, GeoPoint>,
}

impl FixtureSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, number: BuildingNumber, point: GeoPoint) -> &mut Self {
        self.points.insert(number, point);
        self
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl FromIterator<(BuildingNumber, GeoPoint)> for FixtureSource {
    fn from_iter<I: IntoIterator<Item = (BuildingNumber, GeoPoint)>>(iter: I) -> Self {
        Self { points: iter.into_iter().collect() }
    }
}

impl CoordinateSource for FixtureSource {
    fn lookup(&mut self, building: &Building) -> LookupOutcome {
        match self.points.get(&building.number) {
            Some(&p) => LookupOutcome::Found(p),
            None => LookupOutcome::NotFound,
        }
    }
}
