//! CSV building-table loader.
//!
//! # CSV format
//!
//! One row per building.  Only the first two columns are required; the rest
//! appear once coordinates have been collected.
//!
//! ```csv
//! 동번호,동(건물)명,위도,경도,검색어,지도URL
//! 1,인문관1,37.4601,126.9506,서울대 관악캠퍼스 1동,https://www.google.com/maps/@37.4601,126.9506,17z
//! 2,인문관2,,,서울대 관악캠퍼스 2동,https://www.google.com/maps/@37.4598,126.9509,17z
//! 3,인문관3,,,,
//! ```
//!
//! | Column      | Meaning                                          |
//! |-------------|--------------------------------------------------|
//! | `동번호`     | building number (identity)                       |
//! | `동(건물)명`  | building name                                    |
//! | `위도`       | latitude, optional                               |
//! | `경도`       | longitude, optional                              |
//! | `좌표`       | map "what's here" text (`37.46°, 126.95°`), optional |
//! | `지도URL`    | map URL from a scraper, optional                 |
//!
//! Empty, unparseable, or out-of-range coordinates leave the location
//! unknown.  Sources are tried in order: `위도`/`경도`, then `좌표`, then the
//! `@lat,lon` fragment of `지도URL`.  Other columns are ignored.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use wg_core::{Building, BuildingNumber, BuildingTable, GeoPoint};

use crate::url::{coordinates_from_map_url, coordinates_from_text};
use crate::BuildingResult;

// ── Options ───────────────────────────────────────────────────────────────────

/// Row filters applied while loading.
#[derive(Clone, Debug)]
pub struct LoadOptions {
    /// Rows whose building number contains any of these substrings are
    /// dropped.  The campus table marks non-building entries with `Y`.
    pub exclude_markers: Vec<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { exclude_markers: vec!["Y".to_owned()] }
    }
}

impl LoadOptions {
    /// Keep every row.
    pub fn keep_all() -> Self {
        Self { exclude_markers: Vec::new() }
    }

    fn is_excluded(&self, number: &str) -> bool {
        self.exclude_markers.iter().any(|m| number.contains(m.as_str()))
    }
}

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct BuildingRecord {
    #[serde(rename = "동번호")]
    number:  String,
    #[serde(rename = "동(건물)명", default)]
    name:    String,
    #[serde(rename = "위도", default, deserialize_with = "csv::invalid_option")]
    lat:     Option<f64>,
    #[serde(rename = "경도", default, deserialize_with = "csv::invalid_option")]
    lon:     Option<f64>,
    #[serde(rename = "좌표", default)]
    coords:  Option<String>,
    #[serde(rename = "지도URL", default)]
    map_url: Option<String>,
}

impl BuildingRecord {
    fn location(&self) -> Option<GeoPoint> {
        let from_columns = match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(GeoPoint::new(lat, lon)).filter(|p| p.is_valid()),
            _ => None,
        };
        from_columns
            .or_else(|| self.coords.as_deref().and_then(coordinates_from_text))
            .or_else(|| self.map_url.as_deref().and_then(coordinates_from_map_url))
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`BuildingTable`] from a CSV file.
pub fn load_buildings_csv(path: &Path, options: &LoadOptions) -> BuildingResult<BuildingTable> {
    let file = std::fs::File::open(path)?;
    load_buildings_reader(file, options)
}

/// Like [`load_buildings_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded tables.
pub fn load_buildings_reader<R: Read>(reader: R, options: &LoadOptions) -> BuildingResult<BuildingTable> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut table = BuildingTable::new();

    for result in csv_reader.deserialize::<BuildingRecord>() {
        let row = result?;

        if options.is_excluded(&row.number) {
            tracing::debug!(number = %row.number, "excluded building row");
            continue;
        }
        let Ok(number) = BuildingNumber::new(&row.number) else {
            tracing::warn!(name = %row.name, "skipping row with empty building number");
            continue;
        };

        let location = row.location();
        if location.is_none() {
            tracing::debug!(%number, "building has no coordinates");
        }
        table.insert(Building::new(number, row.name.trim(), location))?;
    }

    tracing::info!(
        buildings = table.len(),
        located = table.located_count(),
        "loaded building table"
    );
    Ok(table)
}
