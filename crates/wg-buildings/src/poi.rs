//! Points of interest from a keyword search service, indexed by building number.
//!
//! Campus POIs are named like `서울대학교 관악캠퍼스 제1공학관(301)`; the
//! trailing parenthesised digits are the building number.  A paged keyword
//! search for the university name therefore yields most of the campus in a
//! handful of requests.

use std::collections::HashMap;
use std::fmt::Display;
use std::ops::RangeInclusive;

use wg_core::{Building, BuildingNumber, GeoPoint};

use crate::source::{CoordinateSource, LookupOutcome};
use crate::{BuildingError, BuildingResult};

/// One search hit.
#[derive(Clone, Debug, PartialEq)]
pub struct Poi {
    pub name:     String,
    pub location: GeoPoint,
}

/// A paged keyword search over points of interest.
pub trait PoiSearch {
    type Error: Display;

    /// Fetch one page (1-based) of results for `keyword`.  A page past the
    /// last result is empty, not an error.
    fn search(&mut self, keyword: &str, page: u32) -> Result<Vec<Poi>, Self::Error>;
}

/// Extract the building number from a POI name ending in `(<digits>)`.
pub fn building_number_from_poi_name(name: &str) -> Option<BuildingNumber> {
    let (_, tail) = name.trim_end().rsplit_once('(')?;
    let digits = tail.strip_suffix(')')?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    BuildingNumber::new(digits).ok()
}

// ── PoiIndex ──────────────────────────────────────────────────────────────────

/// Building number → POI location, built from keyword search results.
#[derive(Clone, Debug, Default)]
pub struct PoiIndex {
    entries: HashMap<BuildingNumber, Poi>,
}

impl PoiIndex {
    /// Run `keyword` over `pages` and index every hit whose name contains the
    /// keyword and ends in a building number.
    ///
    /// Every page in `pages` is requested, even after an empty one; the
    /// service's paging is not reliable enough to stop early.  Any failed
    /// page fails the build: a partial index would silently report buildings
    /// as not found.
    pub fn build<S>(search: &mut S, keyword: &str, pages: RangeInclusive<u32>) -> BuildingResult<Self>
    where
        S: PoiSearch + ?Sized,
    {
        let mut hits = Vec::new();
        for page in pages {
            let found = search
                .search(keyword, page)
                .map_err(|e| BuildingError::Search { page, message: e.to_string() })?;
            tracing::debug!(page, hits = found.len(), keyword, "POI search page");
            hits.extend(found);
        }
        let index = Self::from_pois(keyword, hits);
        tracing::info!(buildings = index.len(), keyword, "built POI index");
        Ok(index)
    }

    /// Index already-fetched POIs.  Later hits for the same number win.
    pub fn from_pois<I>(keyword: &str, pois: I) -> Self
    where
        I: IntoIterator<Item = Poi>,
    {
        let mut entries = HashMap::new();
        for poi in pois {
            if !poi.name.contains(keyword) || !poi.location.is_valid() {
                continue;
            }
            if let Some(number) = building_number_from_poi_name(&poi.name) {
                entries.insert(number, poi);
            }
        }
        Self { entries }
    }

    pub fn get(&self, number: &BuildingNumber) -> Option<&Poi> {
        self.entries.get(number)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CoordinateSource for PoiIndex {
    fn lookup(&mut self, building: &Building) -> LookupOutcome {
        match self.entries.get(&building.number) {
            Some(poi) => LookupOutcome::Found(poi.location),
            None => LookupOutcome::NotFound,
        }
    }
}
