//! Building identity and the in-memory building table.

use std::collections::HashMap;
use std::fmt;

use crate::{CoreError, CoreResult, GeoPoint};

// ── BuildingNumber ────────────────────────────────────────────────────────────

/// Campus building number, e.g. `"301"` or `"43-1"`.
///
/// Kept as a string: numbers carry suffixes and markers that are not numeric.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct BuildingNumber(String);

impl BuildingNumber {
    /// Trim surrounding whitespace; reject an empty number.
    pub fn new(raw: impl AsRef<str>) -> CoreResult<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(CoreError::EmptyBuildingNumber);
        }
        Ok(Self(trimmed.to_owned()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BuildingNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── Building ──────────────────────────────────────────────────────────────────

/// One campus building.  `location` is `None` until coordinates are known.
#[derive(Clone, Debug, PartialEq)]
pub struct Building {
    pub number:   BuildingNumber,
    pub name:     String,
    pub location: Option<GeoPoint>,
}

impl Building {
    pub fn new(number: BuildingNumber, name: impl Into<String>, location: Option<GeoPoint>) -> Self {
        Self { number, name: name.into(), location }
    }

    #[inline]
    pub fn is_located(&self) -> bool {
        self.location.is_some()
    }
}

// ── BuildingTable ─────────────────────────────────────────────────────────────

/// Ordered building collection with lookup by number.
///
/// Input order is preserved; the ranker relies on it for tie-breaking.
#[derive(Clone, Debug, Default)]
pub struct BuildingTable {
    buildings: Vec<Building>,
    by_number: HashMap<BuildingNumber, usize>,
}

impl BuildingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `buildings`, rejecting duplicate numbers.
    pub fn from_buildings<I>(buildings: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = Building>,
    {
        let mut table = Self::new();
        for b in buildings {
            table.insert(b)?;
        }
        Ok(table)
    }

    /// Append a building.  Fails if its number is already present.
    pub fn insert(&mut self, building: Building) -> CoreResult<()> {
        if self.by_number.contains_key(&building.number) {
            return Err(CoreError::DuplicateBuilding(building.number));
        }
        self.by_number.insert(building.number.clone(), self.buildings.len());
        self.buildings.push(building);
        Ok(())
    }

    pub fn get(&self, number: &BuildingNumber) -> Option<&Building> {
        self.by_number.get(number).map(|&i| &self.buildings[i])
    }

    /// Like [`get`][Self::get] but returns an error for unknown numbers.
    pub fn require(&self, number: &BuildingNumber) -> CoreResult<&Building> {
        self.get(number)
            .ok_or_else(|| CoreError::BuildingNotFound(number.clone()))
    }

    pub fn contains(&self, number: &BuildingNumber) -> bool {
        self.by_number.contains_key(number)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buildings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Building> {
        self.buildings.iter()
    }

    pub fn as_slice(&self) -> &[Building] {
        &self.buildings
    }

    /// Buildings with known coordinates, in table order.
    pub fn located(&self) -> impl Iterator<Item = &Building> {
        self.buildings.iter().filter(|b| b.is_located())
    }

    pub fn located_count(&self) -> usize {
        self.located().count()
    }

    pub fn into_vec(self) -> Vec<Building> {
        self.buildings
    }
}

impl<'a> IntoIterator for &'a BuildingTable {
    type Item = &'a Building;
    type IntoIter = std::slice::Iter<'a, Building>;

    fn into_iter(self) -> Self::IntoIter {
        self.buildings.iter()
    }
}
