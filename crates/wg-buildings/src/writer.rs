//! CSV building-table writer.
//!
//! Writes `동번호,동(건물)명,위도,경도`; unknown locations become empty cells,
//! which [`load_buildings_reader`][crate::load_buildings_reader] reads back
//! as unknown.

use std::io::Write;
use std::path::Path;

use csv::Writer;

use wg_core::BuildingTable;

use crate::BuildingResult;

const HEADER: [&str; 4] = ["동번호", "동(건물)명", "위도", "경도"];

/// Write `table` to a CSV file at `path`, replacing any existing file.
pub fn write_buildings_csv(path: &Path, table: &BuildingTable) -> BuildingResult<()> {
    let file = std::fs::File::create(path)?;
    write_buildings_writer(file, table)
}

/// Like [`write_buildings_csv`] but accepts any `Write` sink.
pub fn write_buildings_writer<W: Write>(sink: W, table: &BuildingTable) -> BuildingResult<()> {
    let mut w = Writer::from_writer(sink);
    w.write_record(HEADER)?;
    for b in table {
        let (lat, lon) = match b.location {
            Some(p) => (p.lat.to_string(), p.lon.to_string()),
            None => (String::new(), String::new()),
        };
        w.write_record([b.number.as_str(), b.name.as_str(), lat.as_str(), lon.as_str()])?;
    }
    w.flush()?;
    Ok(())
}
