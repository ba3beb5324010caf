//! Coordinate extraction from map-UI artefacts.
//!
//! Map web UIs encode the viewport centre in the URL after a search, e.g.
//!
//! ```text
//! https://www.google.com/maps/place/.../@37.4601324,126.9519487,17z/data=...
//! ```
//!
//! and the "what's here" chip shows text like `37.46013°, 126.95194°`.

use wg_core::GeoPoint;

/// Parse the `@lat,lon` fragment of a map URL.
///
/// Returns `None` if there is no `@`, fewer than two comma-separated fields
/// follow it, or either field is not a valid coordinate.
pub fn coordinates_from_map_url(url: &str) -> Option<GeoPoint> {
    let (_, fragment) = url.split_once('@')?;
    let mut parts = fragment.split(',');
    let lat = parts.next()?.trim().parse::<f64>().ok()?;
    let lon = parts.next()?.trim().parse::<f64>().ok()?;
    let p = GeoPoint::new(lat, lon);
    p.is_valid().then_some(p)
}

/// Parse `"lat, lon"` text, tolerating degree signs.
pub fn coordinates_from_text(text: &str) -> Option<GeoPoint> {
    let cleaned = text.replace('°', "");
    let (lat, lon) = cleaned.split_once(',')?;
    let p = GeoPoint::new(lat.trim().parse().ok()?, lon.trim().parse().ok()?);
    p.is_valid().then_some(p)
}
