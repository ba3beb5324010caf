//! Response-body parsing for the routing and POI-search services.
//!
//! Kept separate from the HTTP client so it can be tested against captured
//! bodies.
//!
//! # Pedestrian route
//!
//! ```json
//! { "type": "FeatureCollection",
//!   "features": [ { "properties": { "totalDistance": 412, "totalTime": 318, ... } }, ... ] }
//! ```
//!
//! Only the first feature carries `totalTime`.  Errors come back as
//! `{ "error": { "id": "400", "code": "3102", "message": "..." } }`.
//!
//! # POI search
//!
//! ```json
//! { "searchPoiInfo": { "pois": { "poi": [
//!     { "name": "...(301)", "noorLat": "37.45", "noorLon": "126.95",
//!       "newAddressList": { "newAddress": [ { "centerLat": "37.45", "centerLon": "126.95" } ] } } ] } } }
//! ```
//!
//! Coordinates are usually strings.  No results → empty body (HTTP 204).

use serde_json::Value;

use wg_buildings::Poi;
use wg_core::GeoPoint;

use crate::{RoutingError, RoutingResult};

/// Extract `features[0].properties.totalTime` (seconds).
pub fn parse_pedestrian_response(body: &str) -> RoutingResult<f64> {
    let v: Value = serde_json::from_str(body)?;
    if v.get("features").is_none() {
        return Err(service_error(&v).unwrap_or(RoutingError::MissingTotalTime));
    }
    v.pointer("/features/0/properties/totalTime")
        .and_then(number)
        .filter(|t| t.is_finite() && *t >= 0.0)
        .ok_or(RoutingError::MissingTotalTime)
}

/// Extract name + coordinate for every POI in a search response.
///
/// Entries without a name or usable coordinate are dropped.
pub fn parse_poi_response(body: &str) -> RoutingResult<Vec<Poi>> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    let v: Value = serde_json::from_str(body)?;
    if let Some(err) = service_error(&v) {
        return Err(err);
    }
    let Some(items) = v.pointer("/searchPoiInfo/pois/poi").and_then(Value::as_array) else {
        return Ok(Vec::new());
    };

    Ok(items.iter().filter_map(poi_from_value).collect())
}

/// The `error.message` of a service error payload, if any.
pub(crate) fn error_message(body: &str) -> Option<String> {
    let v: Value = serde_json::from_str(body).ok()?;
    match service_error(&v)? {
        RoutingError::Service(msg) => Some(msg),
        _ => None,
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn service_error(v: &Value) -> Option<RoutingError> {
    let err = v.get("error")?;
    let message = err
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("unknown error");
    let msg = match err.get("code").and_then(Value::as_str) {
        Some(code) => format!("{message} (code {code})"),
        None => message.to_owned(),
    };
    Some(RoutingError::Service(msg))
}

fn poi_from_value(item: &Value) -> Option<Poi> {
    let name = item.get("name")?.as_str()?.to_owned();
    let center = item.pointer("/newAddressList/newAddress/0").and_then(|addr| {
        Some(GeoPoint::new(number(addr.get("centerLat")?)?, number(addr.get("centerLon")?)?))
    });
    let location = center
        .filter(|p| p.is_valid())
        .or_else(|| {
            Some(GeoPoint::new(number(item.get("noorLat")?)?, number(item.get("noorLon")?)?))
                .filter(|p| p.is_valid())
        })?;
    Some(Poi { name, location })
}

/// Numbers arrive as JSON numbers or numeric strings.
fn number(v: &Value) -> Option<f64> {
    v.as_f64().or_else(|| v.as_str()?.trim().parse().ok())
}
