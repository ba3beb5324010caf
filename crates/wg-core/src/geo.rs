//! Geographic coordinate type and distance utilities.
//!
//! Two distances are provided.  [`GeoPoint::distance_m`] is the haversine
//! great-circle distance and is used wherever a metric length is needed
//! (grid extents).  [`GeoPoint::planar_distance`] is plain Euclidean distance
//! in degree space; it is only meaningful for ranking points within a small
//! area such as a single campus, where the lat/lon skew is uniform.

/// Mean Earth radius in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS-84 geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in metres.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }

    /// Euclidean distance in degree space.  Not a length; use only to rank.
    #[inline]
    pub fn planar_distance(self, other: GeoPoint) -> f64 {
        (self.lat - other.lat).hypot(self.lon - other.lon)
    }

    /// `true` if both components are finite and inside the valid WGS-84 range.
    pub fn is_valid(self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }

    /// `[lat, lon]` pair, the order used in serialized output.
    #[inline]
    pub fn to_pair(self) -> [f64; 2] {
        [self.lat, self.lon]
    }
}

impl From<[f64; 2]> for GeoPoint {
    fn from([lat, lon]: [f64; 2]) -> Self {
        Self { lat, lon }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
