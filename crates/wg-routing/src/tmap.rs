//! Blocking client for the SK open API "TMAP" pedestrian-route and POI-search
//! endpoints.
//!
//! | Endpoint                         | Method | Auth             |
//! |----------------------------------|--------|------------------|
//! | `/tmap/routes/pedestrian`        | POST   | `appKey` header  |
//! | `/tmap/pois`                     | GET    | `appKey` query   |

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use serde::Serialize;

use wg_buildings::{Poi, PoiSearch};
use wg_core::GeoPoint;

use crate::response::{error_message, parse_pedestrian_response, parse_poi_response};
use crate::{EtaProvider, RoutingError, RoutingResult};

// ── Config ────────────────────────────────────────────────────────────────────

/// Connection and query settings for [`TmapClient`].
#[derive(Clone, Debug)]
pub struct TmapConfig {
    pub base_url:     String,
    pub app_key:      String,
    pub timeout:      Duration,
    /// Administrative area filter for POI search (`11` = Seoul).
    pub area_ll_code: String,
    /// Sub-area filter for POI search (`620` = Gwanak-gu).
    pub area_lm_code: String,
    /// POIs per search page; the service caps this at 200.
    pub page_size:    u32,
}

impl TmapConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://apis.openapi.sk.com";

    pub fn new(app_key: impl Into<String>) -> Self {
        Self {
            base_url:     Self::DEFAULT_BASE_URL.to_owned(),
            app_key:      app_key.into(),
            timeout:      Duration::from_secs(30),
            area_ll_code: "11".to_owned(),
            area_lm_code: "620".to_owned(),
            page_size:    200,
        }
    }
}

// ── Request body ──────────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PedestrianRequest<'a> {
    start_x:        f64,
    start_y:        f64,
    angle:          u32,
    speed:          u32,
    end_x:          f64,
    end_y:          f64,
    start_name:     &'a str,
    end_name:       &'a str,
    req_coord_type: &'a str,
    search_option:  &'a str,
    res_coord_type: &'a str,
    sort:           &'a str,
}

impl PedestrianRequest<'static> {
    /// X is longitude, Y is latitude.
    pub(crate) fn new(from: GeoPoint, to: GeoPoint) -> Self {
        Self {
            start_x:        from.lon,
            start_y:        from.lat,
            angle:          20,
            speed:          30,
            end_x:          to.lon,
            end_y:          to.lat,
            start_name:     "출발지",
            end_name:       "도착지",
            req_coord_type: "WGS84GEO",
            search_option:  "0",
            res_coord_type: "WGS84GEO",
            sort:           "index",
        }
    }
}

// ── Client ────────────────────────────────────────────────────────────────────

/// One HTTP connection pool, reused across calls.
pub struct TmapClient {
    config: TmapConfig,
    http:   Client,
}

impl TmapClient {
    pub fn new(config: TmapConfig) -> RoutingResult<Self> {
        if config.app_key.trim().is_empty() {
            return Err(RoutingError::Config("TMAP app key is empty".into()));
        }
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &TmapConfig {
        &self.config
    }

    /// Walking time in seconds from `from` to `to`.
    pub fn pedestrian_eta(&self, from: GeoPoint, to: GeoPoint) -> RoutingResult<f64> {
        let url = format!(
            "{}/tmap/routes/pedestrian?version=1&callback=function",
            self.config.base_url.trim_end_matches('/')
        );
        let resp = self
            .http
            .post(url)
            .header("accept", "application/json")
            .header("appKey", &self.config.app_key)
            .json(&PedestrianRequest::new(from, to))
            .send()?;
        let body = checked_body(resp)?;
        parse_pedestrian_response(&body)
    }

    /// One page (1-based) of POIs matching `keyword` by name.
    pub fn search_pois(&self, keyword: &str, page: u32) -> RoutingResult<Vec<Poi>> {
        let url = format!("{}/tmap/pois", self.config.base_url.trim_end_matches('/'));
        let page = page.to_string();
        let count = self.config.page_size.to_string();
        let resp = self
            .http
            .get(url)
            .header("accept", "application/json")
            .query(&[
                ("version", "1"),
                ("searchKeyword", keyword),
                ("searchType", "name"),
                ("areaLLCode", self.config.area_ll_code.as_str()),
                ("areaLMCode", self.config.area_lm_code.as_str()),
                ("resCoordType", "WGS84GEO"),
                ("multiPoint", "Y"),
                ("page", page.as_str()),
                ("count", count.as_str()),
                ("appKey", self.config.app_key.as_str()),
            ])
            .send()?;
        let body = checked_body(resp)?;
        parse_poi_response(&body)
    }
}

/// Body text of a 2xx response; otherwise a `Status` error carrying the
/// service's error message when it sent one.
fn checked_body(resp: Response) -> RoutingResult<String> {
    let status = resp.status();
    let body = resp.text()?;
    if status.is_success() {
        return Ok(body);
    }
    tracing::debug!(status = status.as_u16(), body = %body, "TMAP request rejected");
    Err(RoutingError::Status {
        status:  status.as_u16(),
        message: error_message(&body).unwrap_or(body),
    })
}

impl EtaProvider for TmapClient {
    fn eta_secs(&mut self, from: GeoPoint, to: GeoPoint) -> RoutingResult<f64> {
        self.pedestrian_eta(from, to)
    }
}

impl PoiSearch for TmapClient {
    type Error = RoutingError;

    fn search(&mut self, keyword: &str, page: u32) -> Result<Vec<Poi>, RoutingError> {
        self.search_pois(keyword, page)
    }
}
