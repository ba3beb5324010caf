//! Unit tests for wg-buildings.

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use wg_core::{BuildingNumber, GeoPoint};
    use crate::{load_buildings_reader, BuildingError, LoadOptions};

    fn num(s: &str) -> BuildingNumber {
        BuildingNumber::new(s).unwrap()
    }

    const RAW_CSV: &str = "\
동번호,동(건물)명\n\
1,인문관1\n\
2,인문관2\n\
Y1,야외시설\n\
";

    const SCRAPED_CSV: &str = "\
동번호,동(건물)명,위도,경도,검색어,지도URL\n\
1,인문관1,37.4601,126.9506,서울대 관악캠퍼스 1동,\"https://www.google.com/maps/@37.4601,126.9506,17z\"\n\
2,인문관2,,,서울대 관악캠퍼스 2동,\"https://www.google.com/maps/place/x/@37.4598,126.9509,17z/data=!3m1\"\n\
3,인문관3,nope,126.95,서울대 관악캠퍼스 3동,\n\
4,인문관4,,,서울대 관악캠퍼스 4동,\"https://www.google.com/maps\"\n\
5,인문관5,nan,nan,,\n\
";

    #[test]
    fn raw_table_without_coordinate_columns() {
        let table = load_buildings_reader(Cursor::new(RAW_CSV), &LoadOptions::default()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.located_count(), 0);
        assert_eq!(table.get(&num("2")).unwrap().name, "인문관2");
    }

    #[test]
    fn y_marked_rows_are_excluded_by_default() {
        let table = load_buildings_reader(Cursor::new(RAW_CSV), &LoadOptions::default()).unwrap();
        assert!(!table.contains(&num("Y1")));

        let all = load_buildings_reader(Cursor::new(RAW_CSV), &LoadOptions::keep_all()).unwrap();
        assert!(all.contains(&num("Y1")));
    }

    #[test]
    fn coordinate_columns_and_url_fallback() {
        let table = load_buildings_reader(Cursor::new(SCRAPED_CSV), &LoadOptions::default()).unwrap();
        assert_eq!(table.len(), 5);
        assert_eq!(table.get(&num("1")).unwrap().location, Some(GeoPoint::new(37.4601, 126.9506)));
        // Empty lat/lon, but the map URL has an @lat,lon fragment.
        assert_eq!(table.get(&num("2")).unwrap().location, Some(GeoPoint::new(37.4598, 126.9509)));
    }

    #[test]
    fn chip_text_column_before_url() {
        let csv = "\
동번호,동(건물)명,위도,경도,좌표,지도URL\n\
1,인문관1,,,\"37.46013°, 126.95194°\",\"https://www.google.com/maps/@37.4598,126.9509,17z\"\n\
2,인문관2,37.4601,126.9506,\"37.46013°, 126.95194°\",\n\
3,인문관3,,,모름,\"https://www.google.com/maps/@37.4598,126.9509,17z\"\n\
";
        let table = load_buildings_reader(Cursor::new(csv), &LoadOptions::default()).unwrap();
        assert_eq!(table.get(&num("1")).unwrap().location, Some(GeoPoint::new(37.46013, 126.95194)));
        // Explicit columns win over the chip text.
        assert_eq!(table.get(&num("2")).unwrap().location, Some(GeoPoint::new(37.4601, 126.9506)));
        // Unparseable chip text falls through to the URL.
        assert_eq!(table.get(&num("3")).unwrap().location, Some(GeoPoint::new(37.4598, 126.9509)));
    }

    #[test]
    fn garbage_coordinates_are_unknown() {
        let table = load_buildings_reader(Cursor::new(SCRAPED_CSV), &LoadOptions::default()).unwrap();
        assert_eq!(table.get(&num("3")).unwrap().location, None);
        assert_eq!(table.get(&num("4")).unwrap().location, None);
        assert_eq!(table.get(&num("5")).unwrap().location, None);
        let located: Vec<_> = table.located().map(|b| b.number.as_str()).collect();
        assert_eq!(located, ["1", "2"]);
    }

    #[test]
    fn duplicate_numbers_fail() {
        let csv = "동번호,동(건물)명\n1,a\n1,b\n";
        let err = load_buildings_reader(Cursor::new(csv), &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, BuildingError::Core(_)));
    }

    #[test]
    fn blank_number_rows_are_skipped() {
        let csv = "동번호,동(건물)명\n ,유령\n7,실험실\n";
        let table = load_buildings_reader(Cursor::new(csv), &LoadOptions::default()).unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.contains(&num("7")));
    }

    #[test]
    fn missing_number_column_is_an_error() {
        let csv = "name\nfoo\n";
        assert!(matches!(
            load_buildings_reader(Cursor::new(csv), &LoadOptions::default()),
            Err(BuildingError::Csv(_))
        ));
    }
}

#[cfg(test)]
mod writer {
    use std::io::Cursor;

    use wg_core::{Building, BuildingNumber, BuildingTable, GeoPoint};
    use crate::{load_buildings_csv, load_buildings_reader, write_buildings_csv, write_buildings_writer, LoadOptions};

    fn table() -> BuildingTable {
        BuildingTable::from_buildings([
            Building::new(BuildingNumber::new("301").unwrap(), "제1공학관", Some(GeoPoint::new(37.4502, 126.9525))),
            Building::new(BuildingNumber::new("302").unwrap(), "제2공학관", None),
        ])
        .unwrap()
    }

    #[test]
    fn header_and_empty_cells() {
        let mut buf = Vec::new();
        write_buildings_writer(&mut buf, &table()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("동번호,동(건물)명,위도,경도"));
        assert_eq!(lines.next(), Some("301,제1공학관,37.4502,126.9525"));
        assert_eq!(lines.next(), Some("302,제2공학관,,"));
    }

    #[test]
    fn written_table_loads_back() {
        let mut buf = Vec::new();
        write_buildings_writer(&mut buf, &table()).unwrap();
        let back = load_buildings_reader(Cursor::new(buf), &LoadOptions::default()).unwrap();
        let orig = table();
        assert_eq!(back.as_slice(), orig.as_slice());
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("with_coords.csv");
        write_buildings_csv(&path, &table()).unwrap();
        let back = load_buildings_csv(&path, &LoadOptions::default()).unwrap();
        assert_eq!(back.len(), 2);
        assert_eq!(back.located_count(), 1);
    }
}

#[cfg(test)]
mod url {
    use wg_core::GeoPoint;
    use crate::{coordinates_from_map_url, coordinates_from_text};

    #[test]
    fn google_style_url() {
        let url = "https://www.google.com/maps/place/%EC%84%9C%EC%9A%B8/@37.4601324,126.9519487,17z/data=!3m1";
        assert_eq!(coordinates_from_map_url(url), Some(GeoPoint::new(37.4601324, 126.9519487)));
    }

    #[test]
    fn url_without_fragment() {
        assert_eq!(coordinates_from_map_url("https://www.google.com/maps"), None);
        assert_eq!(coordinates_from_map_url("https://x/@37.46"), None);
        assert_eq!(coordinates_from_map_url("https://x/@abc,126.9"), None);
        assert_eq!(coordinates_from_map_url("https://x/@137.0,126.9,17z"), None);
    }

    #[test]
    fn chip_text() {
        assert_eq!(coordinates_from_text("37.46013°, 126.95194°"), Some(GeoPoint::new(37.46013, 126.95194)));
        assert_eq!(coordinates_from_text("37.46013"), None);
        assert_eq!(coordinates_from_text("north, east"), None);
    }
}

#[cfg(test)]
mod poi {
    use wg_core::{Building, BuildingNumber, GeoPoint};
    use crate::{building_number_from_poi_name, BuildingError, CoordinateSource, LookupOutcome, Poi, PoiIndex, PoiSearch};

    fn poi(name: &str, lat: f64, lon: f64) -> Poi {
        Poi { name: name.to_owned(), location: GeoPoint::new(lat, lon) }
    }

    /// Serves canned pages; page numbers past the end return nothing.
    struct CannedSearch {
        pages: Vec<Vec<Poi>>,
        calls: Vec<u32>,
        fail_on: Option<u32>,
    }

    impl PoiSearch for CannedSearch {
        type Error = String;

        fn search(&mut self, _keyword: &str, page: u32) -> Result<Vec<Poi>, String> {
            self.calls.push(page);
            if self.fail_on == Some(page) {
                return Err("503 Service Unavailable".into());
            }
            Ok(self.pages.get(page as usize - 1).cloned().unwrap_or_default())
        }
    }

    #[test]
    fn number_extraction() {
        assert_eq!(
            building_number_from_poi_name("서울대학교 관악캠퍼스 제1공학관(301)"),
            Some(BuildingNumber::new("301").unwrap())
        );
        assert_eq!(building_number_from_poi_name("서울대학교(관악)"), None);
        assert_eq!(building_number_from_poi_name("서울대학교 정문"), None);
        assert_eq!(building_number_from_poi_name("서울대학교 ()"), None);
        assert_eq!(building_number_from_poi_name("서울대학교 (12"), None);
    }

    #[test]
    fn index_filters_keyword_and_numbers() {
        let index = PoiIndex::from_pois(
            "서울대학교",
            [
                poi("서울대학교 제1공학관(301)", 37.4502, 126.9525),
                poi("서울대학교 정문", 37.4660, 126.9480),
                poi("봉천동 편의점(12)", 37.47, 126.95),
            ],
        );
        assert_eq!(index.len(), 1);
        assert!(index.get(&BuildingNumber::new("301").unwrap()).is_some());
    }

    #[test]
    fn later_hits_overwrite_earlier() {
        let index = PoiIndex::from_pois(
            "서울대학교",
            [
                poi("서울대학교 제1공학관(301)", 1.0, 1.0),
                poi("서울대학교 제1공학관 별관(301)", 2.0, 2.0),
            ],
        );
        let hit = index.get(&BuildingNumber::new("301").unwrap()).unwrap();
        assert_eq!(hit.location, GeoPoint::new(2.0, 2.0));
    }

    #[test]
    fn build_requests_every_page_past_an_empty_one() {
        let mut search = CannedSearch {
            pages: vec![
                vec![poi("서울대학교 인문관1(1)", 37.46, 126.95)],
                vec![],
                vec![poi("서울대학교 인문관2(2)", 37.461, 126.951)],
            ],
            calls: vec![],
            fail_on: None,
        };
        let index = PoiIndex::build(&mut search, "서울대학교", 1..=3).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(search.calls, [1, 2, 3]);
    }

    #[test]
    fn failed_page_fails_the_build() {
        let mut search = CannedSearch {
            pages: vec![vec![poi("서울대학교 인문관1(1)", 37.46, 126.95)]],
            calls: vec![],
            fail_on: Some(1),
        };
        let err = PoiIndex::build(&mut search, "서울대학교", 1..=3).unwrap_err();
        assert!(matches!(err, BuildingError::Search { page: 1, .. }));
    }

    #[test]
    fn index_as_coordinate_source() {
        let mut index = PoiIndex::from_pois("서울대학교", [poi("서울대학교 인문관1(1)", 37.46, 126.95)]);
        let hit = Building::new(BuildingNumber::new("1").unwrap(), "인문관1", None);
        let miss = Building::new(BuildingNumber::new("2").unwrap(), "인문관2", None);
        assert_eq!(index.lookup(&hit), LookupOutcome::Found(GeoPoint::new(37.46, 126.95)));
        assert_eq!(index.lookup(&miss), LookupOutcome::NotFound);
    }
}

#[cfg(test)]
mod collect {
    use wg_core::{Building, BuildingNumber, BuildingTable, GeoPoint};
    use crate::{collect_coordinates, CollectOptions, CoordinateSource, FixtureSource, LookupOutcome};

    fn num(s: &str) -> BuildingNumber {
        BuildingNumber::new(s).unwrap()
    }

    fn table() -> BuildingTable {
        BuildingTable::from_buildings([
            Building::new(num("1"), "a", Some(GeoPoint::new(1.0, 1.0))),
            Building::new(num("2"), "b", None),
            Building::new(num("3"), "c", None),
        ])
        .unwrap()
    }

    /// Fails `failures` times per building, then defers to a fixture.
    struct Flaky {
        inner:    FixtureSource,
        failures: u32,
        seen:     std::collections::HashMap<BuildingNumber, u32>,
    }

    impl CoordinateSource for Flaky {
        fn lookup(&mut self, building: &Building) -> LookupOutcome {
            let n = self.seen.entry(building.number.clone()).or_default();
            *n += 1;
            if *n <= self.failures {
                LookupOutcome::Transient(format!("timeout #{n}"))
            } else {
                self.inner.lookup(building)
            }
        }
    }

    #[test]
    fn fills_missing_and_keeps_existing() {
        let mut source: FixtureSource = [(num("2"), GeoPoint::new(2.0, 2.0))].into_iter().collect();
        let (out, report) = collect_coordinates(&table(), &mut source, &CollectOptions::default()).unwrap();

        assert_eq!(out.get(&num("1")).unwrap().location, Some(GeoPoint::new(1.0, 1.0)));
        assert_eq!(out.get(&num("2")).unwrap().location, Some(GeoPoint::new(2.0, 2.0)));
        assert_eq!(out.get(&num("3")).unwrap().location, None);
        assert_eq!(report.kept, 1);
        assert_eq!(report.found, 1);
        assert_eq!(report.not_found, [num("3")]);
        assert!(report.failed.is_empty());
        assert_eq!(report.unresolved(), 1);
    }

    #[test]
    fn transient_failures_are_retried() {
        let mut source = Flaky {
            inner:    [(num("2"), GeoPoint::new(2.0, 2.0))].into_iter().collect(),
            failures: 1,
            seen:     Default::default(),
        };
        let opts = CollectOptions { max_attempts: 2, overwrite_existing: false };
        let (out, report) = collect_coordinates(&table(), &mut source, &opts).unwrap();
        assert_eq!(out.get(&num("2")).unwrap().location, Some(GeoPoint::new(2.0, 2.0)));
        assert_eq!(report.found, 1);
        assert!(report.failed.is_empty());
    }

    #[test]
    fn exhausted_retries_are_reported_as_failed() {
        let mut source = Flaky {
            inner:    FixtureSource::new(),
            failures: 5,
            seen:     Default::default(),
        };
        let opts = CollectOptions { max_attempts: 3, overwrite_existing: false };
        let (out, report) = collect_coordinates(&table(), &mut source, &opts).unwrap();
        assert_eq!(out.located_count(), 1);
        assert_eq!(report.failed.len(), 2);
        assert_eq!(report.failed[0], (num("2"), "timeout #3".to_owned()));
        assert_eq!(source.seen[&num("2")], 3);
    }

    #[test]
    fn overwrite_existing_replaces_known_locations() {
        let mut source: FixtureSource = [(num("1"), GeoPoint::new(9.0, 9.0))].into_iter().collect();
        let opts = CollectOptions { max_attempts: 1, overwrite_existing: true };
        let (out, report) = collect_coordinates(&table(), &mut source, &opts).unwrap();
        assert_eq!(out.get(&num("1")).unwrap().location, Some(GeoPoint::new(9.0, 9.0)));
        assert_eq!(report.kept, 0);
    }
}
