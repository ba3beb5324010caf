//! The four landmark corners that approximate a campus outline.
//!
//! The corners are descriptive landmarks, not an axis-aligned rectangle; only
//! their lat/lon extremes are used, via [`Bounds`].

use wg_core::GeoPoint;

use crate::{SpatialError, SpatialResult};

/// Four named landmark coordinates around the campus.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundaryCorners {
    pub left:   GeoPoint,
    pub right:  GeoPoint,
    pub top:    GeoPoint,
    pub bottom: GeoPoint,
}

impl BoundaryCorners {
    /// Seoul National University, Gwanak campus.
    pub const SNU_GWANAK: BoundaryCorners = BoundaryCorners {
        left:   GeoPoint { lat: 37.459298, lon: 126.947716 }, // around building 500
        right:  GeoPoint { lat: 37.459174, lon: 126.956276 }, // Beodeulgol
        top:    GeoPoint { lat: 37.469003, lon: 126.952520 }, // dental hospital
        bottom: GeoPoint { lat: 37.447450, lon: 126.950308 }, // environmental studies
    };

    pub fn corners(&self) -> [(&'static str, GeoPoint); 4] {
        [
            ("left", self.left),
            ("right", self.right),
            ("top", self.top),
            ("bottom", self.bottom),
        ]
    }

    /// Reject NaN / out-of-range corners.
    pub fn validate(&self) -> SpatialResult<()> {
        for (corner, p) in self.corners() {
            if !p.is_valid() {
                return Err(SpatialError::InvalidCorner { corner, lat: p.lat, lon: p.lon });
            }
        }
        Ok(())
    }

    /// Axis-aligned lat/lon box enclosing all four corners.
    pub fn bounds(&self) -> Bounds {
        let pts = self.corners().map(|(_, p)| p);
        let mut b = Bounds {
            min_lat: pts[0].lat,
            max_lat: pts[0].lat,
            min_lon: pts[0].lon,
            max_lon: pts[0].lon,
        };
        for p in &pts[1..] {
            b.min_lat = b.min_lat.min(p.lat);
            b.max_lat = b.max_lat.max(p.lat);
            b.min_lon = b.min_lon.min(p.lon);
            b.max_lon = b.max_lon.max(p.lon);
        }
        b
    }
}

impl Default for BoundaryCorners {
    fn default() -> Self {
        Self::SNU_GWANAK
    }
}

/// Min/max latitude and longitude, in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl Bounds {
    pub fn contains(&self, p: GeoPoint) -> bool {
        (self.min_lat..=self.max_lat).contains(&p.lat)
            && (self.min_lon..=self.max_lon).contains(&p.lon)
    }

    /// North-south extent in metres, measured along `min_lon`.
    pub fn lat_extent_m(&self) -> f64 {
        GeoPoint::new(self.min_lat, self.min_lon)
            .distance_m(GeoPoint::new(self.max_lat, self.min_lon))
    }

    /// East-west extent in metres, measured along `min_lat`.
    pub fn lon_extent_m(&self) -> f64 {
        GeoPoint::new(self.min_lat, self.min_lon)
            .distance_m(GeoPoint::new(self.min_lat, self.max_lon))
    }
}
