//! Unit tests for wg-spatial.
//!
//! Boundaries are hand-picked; the campus default is used where real scale
//! matters.

#[cfg(test)]
mod helpers {
    use wg_core::{Building, BuildingNumber, BuildingTable, GeoPoint};

    pub fn building(number: &str, lat: f64, lon: f64) -> Building {
        Building::new(
            BuildingNumber::new(number).unwrap(),
            format!("{number}동"),
            Some(GeoPoint::new(lat, lon)),
        )
    }

    pub fn unlocated(number: &str) -> Building {
        Building::new(BuildingNumber::new(number).unwrap(), format!("{number}동"), None)
    }

    /// Five buildings on a line of increasing longitude from (0, 0).
    pub fn line_table() -> BuildingTable {
        BuildingTable::from_buildings([
            building("e", 0.0, 5.0),
            building("a", 0.0, 1.0),
            building("c", 0.0, 3.0),
            building("b", 0.0, 2.0),
            building("d", 0.0, 4.0),
        ])
        .unwrap()
    }
}

// ── Boundary ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod boundary {
    use wg_core::GeoPoint;
    use crate::{BoundaryCorners, SpatialError};

    #[test]
    fn campus_bounds() {
        let b = BoundaryCorners::SNU_GWANAK.bounds();
        assert_eq!(b.min_lat, 37.447450);
        assert_eq!(b.max_lat, 37.469003);
        assert_eq!(b.min_lon, 126.947716);
        assert_eq!(b.max_lon, 126.956276);
    }

    #[test]
    fn bounds_contain_every_corner() {
        let c = BoundaryCorners::SNU_GWANAK;
        let b = c.bounds();
        for (_, p) in c.corners() {
            assert!(b.contains(p));
        }
    }

    #[test]
    fn nan_corner_rejected() {
        let mut c = BoundaryCorners::SNU_GWANAK;
        c.top = GeoPoint::new(f64::NAN, 126.95);
        assert!(matches!(c.validate(), Err(SpatialError::InvalidCorner { corner: "top", .. })));
    }
}

// ── Grid ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod grid {
    use wg_core::GeoPoint;
    use crate::grid::linspace;
    use crate::{generate_grid, grid_shape, BoundaryCorners, GridShape, SpatialError, MAX_GRID_POINTS};

    #[test]
    fn campus_grid_at_1km_is_small() {
        let pts = generate_grid(&BoundaryCorners::SNU_GWANAK, 1000.0).unwrap();
        // ~2.4 km north-south → 3 rows; ~0.76 km east-west → 1 column.
        assert_eq!(grid_shape(&BoundaryCorners::SNU_GWANAK, 1000.0).unwrap().n_lat, 3);
        assert_eq!(pts.len(), 3);
        assert!(pts.len() < 10);
    }

    #[test]
    fn campus_grid_at_100m() {
        let shape = grid_shape(&BoundaryCorners::SNU_GWANAK, 100.0).unwrap();
        assert_eq!(shape.n_lat, 24);
        assert_eq!(shape.n_lon, 8);
        let pts = generate_grid(&BoundaryCorners::SNU_GWANAK, 100.0).unwrap();
        assert_eq!(pts.len(), shape.point_count());
    }

    #[test]
    fn points_lie_inside_bounds() {
        let corners = BoundaryCorners::SNU_GWANAK;
        let bounds = corners.bounds();
        let pts = generate_grid(&corners, 50.0).unwrap();
        assert!(pts.iter().all(|&p| bounds.contains(p)));
    }

    #[test]
    fn row_major_order_and_extremes() {
        let corners = BoundaryCorners::SNU_GWANAK;
        let shape = grid_shape(&corners, 200.0).unwrap();
        let pts = generate_grid(&corners, 200.0).unwrap();
        let b = corners.bounds();

        assert_eq!(pts[0], GeoPoint::new(b.min_lat, b.min_lon));
        assert_eq!(*pts.last().unwrap(), GeoPoint::new(b.max_lat, b.max_lon));
        // First row shares a latitude, longitude increases along it.
        let row = &pts[..shape.n_lon];
        assert!(row.iter().all(|p| p.lat == b.min_lat));
        assert!(row.windows(2).all(|w| w[0].lon < w[1].lon));
        // Next row starts back at min_lon with a larger latitude.
        assert_eq!(pts[shape.n_lon].lon, b.min_lon);
        assert!(pts[shape.n_lon].lat > b.min_lat);
    }

    #[test]
    fn degenerate_axis_yields_single_value() {
        let p = GeoPoint::new(37.46, 126.95);
        let corners = BoundaryCorners {
            left:   p,
            right:  GeoPoint::new(37.46, 126.96),
            top:    p,
            bottom: p,
        };
        let shape = grid_shape(&corners, 100.0).unwrap();
        assert_eq!(shape.n_lat, 1);
        let pts = generate_grid(&corners, 100.0).unwrap();
        assert!(pts.iter().all(|q| q.lat == 37.46));
        assert_eq!(pts.len(), shape.n_lon);
    }

    #[test]
    fn single_corner_point_grid() {
        let p = GeoPoint::new(37.46, 126.95);
        let corners = BoundaryCorners { left: p, right: p, top: p, bottom: p };
        assert_eq!(generate_grid(&corners, 10.0).unwrap(), vec![p]);
    }

    #[test]
    fn invalid_spacing_rejected() {
        let c = BoundaryCorners::SNU_GWANAK;
        for bad in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(generate_grid(&c, bad), Err(SpatialError::InvalidSpacing(_))));
        }
    }

    #[test]
    fn tiny_spacing_is_too_large_not_a_panic() {
        let c = BoundaryCorners::SNU_GWANAK;
        for tiny in [1e-9, f64::MIN_POSITIVE] {
            assert!(matches!(grid_shape(&c, tiny), Err(SpatialError::GridTooLarge { .. })));
            assert!(matches!(generate_grid(&c, tiny), Err(SpatialError::GridTooLarge { .. })));
        }
    }

    #[test]
    fn grid_limit_boundary() {
        let c = BoundaryCorners::SNU_GWANAK;
        // ~2.4 km × ~0.76 km: 0.25 m spacing is ~29 M points, 1 m is ~1.8 M.
        assert!(matches!(grid_shape(&c, 0.25), Err(SpatialError::GridTooLarge { .. })));
        let ok = grid_shape(&c, 1.0).unwrap();
        assert!(ok.point_count() <= MAX_GRID_POINTS);
    }

    #[test]
    fn point_count_saturates() {
        let shape = GridShape { n_lat: usize::MAX, n_lon: 2 };
        assert_eq!(shape.point_count(), usize::MAX);
    }

    #[test]
    fn linspace_endpoints() {
        assert_eq!(linspace(0.0, 1.0, 1), vec![0.0]);
        assert_eq!(linspace(0.0, 1.0, 2), vec![0.0, 1.0]);
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }
}

// ── Ranker ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod ranker {
    use wg_core::{BuildingTable, GeoPoint};
    use super::helpers::{building, line_table, unlocated};
    use crate::nearest_buildings;

    fn numbers(c: &[crate::Candidate<'_>]) -> Vec<String> {
        c.iter().map(|c| c.building.number.to_string()).collect()
    }

    #[test]
    fn returns_exactly_k_sorted_ascending() {
        let table = line_table();
        let got = nearest_buildings(GeoPoint::new(0.0, 0.0), &table, 3);
        assert_eq!(numbers(&got), ["a", "b", "c"]);
        assert!(got.windows(2).all(|w| w[0].distance <= w[1].distance));
        assert!(got.iter().all(|c| table.contains(&c.building.number)));
    }

    #[test]
    fn fewer_buildings_than_k() {
        let table = line_table();
        let got = nearest_buildings(GeoPoint::new(0.0, 0.0), &table, 10);
        assert_eq!(got.len(), 5);
    }

    #[test]
    fn k_zero_is_empty() {
        let table = line_table();
        assert!(nearest_buildings(GeoPoint::new(0.0, 0.0), &table, 0).is_empty());
    }

    #[test]
    fn ties_keep_table_order() {
        // "y" and "x" are both exactly 1.0 away from the origin.
        let table = BuildingTable::from_buildings([
            building("far", 0.0, 9.0),
            building("y", 1.0, 0.0),
            building("x", 0.0, 1.0),
        ])
        .unwrap();
        let got = nearest_buildings(GeoPoint::new(0.0, 0.0), &table, 2);
        assert_eq!(numbers(&got), ["y", "x"]);
    }

    #[test]
    fn unlocated_buildings_are_skipped() {
        let table = BuildingTable::from_buildings([
            unlocated("ghost"),
            building("real", 0.0, 1.0),
        ])
        .unwrap();
        let got = nearest_buildings(GeoPoint::new(0.0, 0.0), &table, 2);
        assert_eq!(numbers(&got), ["real"]);
        assert_eq!(got[0].location, GeoPoint::new(0.0, 1.0));
    }

    #[test]
    fn query_from_the_far_end() {
        let table = line_table();
        let got = nearest_buildings(GeoPoint::new(0.0, 4.6), &table, 2);
        assert_eq!(numbers(&got), ["e", "d"]);
    }
}
